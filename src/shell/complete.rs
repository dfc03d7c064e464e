//! Tab-completion over commands, paths, record keywords, and theme names.
//!
//! Completion is a pure function of the input line and the working
//! directory. The caller applies the result: replace the input line, or
//! print the candidate set as a log entry.

use crate::config::Theme;
use crate::content::{PROJECTS, STORIES};
use crate::shell::docs;
use crate::shell::path;
use crate::shell::vfs;

const MAX_SUGGESTIONS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing to complete.
    None,
    /// Replace the whole input line with this text.
    Replace(String),
    /// Multiple candidates for `token`; show them to the user.
    Candidates { token: String, matches: Vec<String> },
}

/// Complete the input line against the working directory `cwd`.
pub fn complete(input: &str, cwd: &[String]) -> Completion {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Completion::None;
    }

    let has_trailing_space = input.ends_with(char::is_whitespace);
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let command = tokens[0].to_lowercase();

    // A lone first token completes against command names.
    if tokens.len() == 1 && !has_trailing_space {
        let matches: Vec<String> = docs::command_names()
            .filter(|name| name.starts_with(&command))
            .map(str::to_string)
            .collect();
        return match matches.len() {
            0 => Completion::None,
            1 => Completion::Replace(format!("{} ", matches[0])),
            _ => Completion::Candidates {
                token: command,
                matches,
            },
        };
    }

    let arg_prefix = if has_trailing_space {
        ""
    } else {
        tokens[tokens.len() - 1]
    };

    let suggestions = match command.as_str() {
        "cd" | "ls" | "cat" => path_suggestions(arg_prefix, &command, cwd),
        "project" | "open" | "story" => keyword_suggestions(arg_prefix),
        "theme" => prefix_filter(Theme::ALL.iter().map(|t| t.name().to_string()), arg_prefix),
        "man" => prefix_filter(docs::command_names().map(str::to_string), arg_prefix),
        _ => Vec::new(),
    };

    match suggestions.len() {
        0 => Completion::None,
        1 => {
            let replacement = if has_trailing_space {
                format!("{}{} ", trimmed, suggestions[0])
            } else {
                let head = tokens[..tokens.len() - 1].join(" ");
                format!("{} {} ", head, suggestions[0])
            };
            Completion::Replace(replacement.trim_start().to_string())
        }
        _ => Completion::Candidates {
            token: command,
            matches: suggestions,
        },
    }
}

/// Path candidates for `cd`, `ls`, and `cat`: the static tree plus the
/// current directory's children, deduplicated in that order.
fn path_suggestions(partial: &str, command: &str, cwd: &[String]) -> Vec<String> {
    let mut pool: Vec<String> = if command == "cat" {
        let mut files: Vec<String> = vfs::STATIC_FILES.iter().map(|f| f.to_string()).collect();
        files.extend(PROJECTS.iter().map(|p| format!("/projects/{}.md", p.id)));
        files.extend(STORIES.iter().map(|s| format!("/journey/{}.md", s.id)));
        files
    } else {
        vfs::STATIC_DIRS.iter().map(|d| d.to_string()).collect()
    };

    let cwd_path = path::join(cwd);
    for item in vfs::list_dir(&cwd_path).unwrap_or_default() {
        let name = item.trim_end_matches('/').to_string();
        let candidate = if partial.starts_with('/') {
            if cwd_path == "/" {
                format!("/{name}")
            } else {
                format!("{cwd_path}/{name}")
            }
        } else {
            name
        };
        if !pool.contains(&candidate) {
            pool.push(candidate);
        }
    }

    if partial.is_empty() {
        pool.truncate(MAX_SUGGESTIONS);
        return pool;
    }
    let filtered: Vec<String> = if partial.starts_with('/') {
        pool.into_iter()
            .filter(|item| item.starts_with(partial))
            .collect()
    } else {
        let lowered = partial.to_lowercase();
        pool.into_iter()
            .filter(|item| item.to_lowercase().starts_with(&lowered))
            .collect()
    };
    filtered.into_iter().take(MAX_SUGGESTIONS).collect()
}

/// Record ids and lowercased titles, for `project`, `story`, and `open`.
fn keyword_suggestions(prefix: &str) -> Vec<String> {
    let pool = PROJECTS
        .iter()
        .map(|p| p.id.to_string())
        .chain(PROJECTS.iter().map(|p| p.title.to_lowercase()))
        .chain(STORIES.iter().map(|s| s.id.to_string()))
        .chain(STORIES.iter().map(|s| s.title.to_lowercase()));
    prefix_filter(pool, prefix)
}

fn prefix_filter(pool: impl Iterator<Item = String>, prefix: &str) -> Vec<String> {
    let lowered = prefix.to_lowercase();
    pool.filter(|item| item.to_lowercase().starts_with(&lowered))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Vec<String> {
        path::HOME_SEGMENTS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_input_completes_to_nothing() {
        assert_eq!(complete("", &home()), Completion::None);
        assert_eq!(complete("   ", &home()), Completion::None);
    }

    #[test]
    fn unique_command_prefix_replaces_with_trailing_space() {
        assert_eq!(
            complete("neo", &home()),
            Completion::Replace("neofetch ".to_string())
        );
    }

    #[test]
    fn ambiguous_command_prefix_lists_candidates() {
        let Completion::Candidates { token, matches } = complete("pro", &home()) else {
            panic!("expected candidates");
        };
        assert_eq!(token, "pro");
        assert_eq!(matches, vec!["projects", "project", "profile"]);
    }

    #[test]
    fn unknown_command_prefix_completes_to_nothing() {
        assert_eq!(complete("zzz", &home()), Completion::None);
    }

    #[test]
    fn cd_completes_absolute_directories() {
        assert_eq!(
            complete("cd /proj", &home()),
            Completion::Replace("cd /projects ".to_string())
        );
    }

    #[test]
    fn cd_with_trailing_space_offers_directory_pool() {
        let Completion::Candidates { token, matches } = complete("cd ", &home()) else {
            panic!("expected candidates");
        };
        assert_eq!(token, "cd");
        assert!(matches.contains(&"/projects".to_string()));
        assert!(matches.contains(&"/journey".to_string()));
    }

    #[test]
    fn cat_completes_cwd_relative_files() {
        assert_eq!(
            complete("cat read", &home()),
            Completion::Replace("cat readme.txt ".to_string())
        );
    }

    #[test]
    fn cat_completes_record_paths() {
        assert_eq!(
            complete("cat /projects/vis", &home()),
            Completion::Replace("cat /projects/visionary-ai.md ".to_string())
        );
    }

    #[test]
    fn suggestions_are_capped() {
        let Completion::Candidates { matches, .. } = complete("cat ", &home()) else {
            panic!("expected candidates");
        };
        assert_eq!(matches.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn project_argument_completes_against_ids_and_titles() {
        assert_eq!(
            complete("project supplier-q", &home()),
            Completion::Replace("project supplier-quotation-rag-pipeline ".to_string())
        );
        let Completion::Candidates { matches, .. } = complete("open p", &home()) else {
            panic!("expected candidates");
        };
        assert!(matches.iter().any(|m| m == "pssqfl"));
    }

    #[test]
    fn theme_argument_completes_theme_names() {
        assert_eq!(
            complete("theme mi", &home()),
            Completion::Replace("theme mint ".to_string())
        );
    }

    #[test]
    fn man_argument_completes_command_names() {
        assert_eq!(
            complete("man neo", &home()),
            Completion::Replace("man neofetch ".to_string())
        );
    }

    #[test]
    fn argument_without_match_completes_to_nothing() {
        assert_eq!(complete("theme banana", &home()), Completion::None);
        assert_eq!(complete("echo hi", &home()), Completion::None);
    }
}
