//! Virtual path arithmetic.
//!
//! The working directory is an ordered list of segments with the empty
//! list meaning `/`. Resolution is total: it never fails, it only
//! produces a segment sequence the caller then classifies.

/// Home directory segments; the shell starts here and `cd` with no
/// argument returns here.
pub const HOME_SEGMENTS: &[&str] = &["home", "nishanth"];

/// Absolute path of the home directory.
pub const HOME_PATH: &str = "/home/nishanth";

/// Split a path expression into its non-empty segments.
pub fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}

/// Render a segment sequence as an absolute path.
pub fn join(segments: &[String]) -> String {
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Resolve a path expression against the current segments.
///
/// Absolute expressions restart from root. `.` is a no-op and `..` pops
/// one segment, clamped at root; every other token is pushed as-is.
pub fn resolve(expr: &str, cwd: &[String]) -> Vec<String> {
    let target = expr.trim();
    let mut segments: Vec<String> = if target.starts_with('/') {
        Vec::new()
    } else {
        cwd.to_vec()
    };

    for part in split(target) {
        match part {
            "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other.to_string()),
        }
    }
    segments
}

/// Abbreviate the home directory to `~` for prompt display.
pub fn prompt_display(path: &str) -> String {
    if path == HOME_PATH {
        "~".to_string()
    } else if let Some(rest) = path.strip_prefix(HOME_PATH) {
        if rest.starts_with('/') {
            format!("~{rest}")
        } else {
            path.to_string()
        }
    } else {
        path.to_string()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn segment_strategy() -> impl Strategy<Value = String> {
        "[a-z0-9._-]{1,12}"
    }

    proptest! {
        /// Any run of `..` beyond the cwd depth clamps at root instead of
        /// underflowing.
        #[test]
        fn dotdot_never_underflows(
            cwd in prop::collection::vec(segment_strategy(), 0..5),
            extra in 0usize..8
        ) {
            let ups = vec![".."; cwd.len() + extra].join("/");
            let resolved = resolve(&ups, &cwd);
            prop_assert!(resolved.is_empty());
        }

        /// Resolution is total: any expression yields some segment
        /// sequence, and none of its segments is `.`, `..`, or empty.
        #[test]
        fn resolution_yields_clean_segments(
            cwd in prop::collection::vec(segment_strategy(), 0..4),
            expr in "[a-z0-9./]{0,40}"
        ) {
            let resolved = resolve(&expr, &cwd);
            for segment in &resolved {
                prop_assert!(!segment.is_empty());
                prop_assert_ne!(segment, ".");
                prop_assert_ne!(segment, "..");
            }
        }

        /// Joining then re-resolving an absolute path is stable.
        #[test]
        fn join_resolve_roundtrip(
            segments in prop::collection::vec(segment_strategy(), 0..5)
        ) {
            // The generator can emit "." and "..", which resolve away.
            prop_assume!(segments.iter().all(|s| s != "." && s != ".."));
            let path = join(&segments);
            prop_assert_eq!(resolve(&path, &[]), segments);
        }
    }
}
