//! Output primitives: toned lines and the append-only entry log.

/// Display-style tag for one output line. Purely cosmetic; the UI maps
/// tones to theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Success,
    Error,
    Accent,
}

/// One line of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub tone: Tone,
}

impl OutputLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Default,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Muted,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Accent,
        }
    }
}

/// One executed command and its output, immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The command text as submitted (trimmed).
    pub command: String,
    /// Prompt-formatted cwd at the time the command ran.
    pub cwd_at_run: String,
    pub lines: Vec<OutputLine>,
}
