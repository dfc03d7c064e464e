//! Session state and the command dispatcher.
//!
//! A `Session` owns the working directory, the submitted-command
//! history, and the append-only entry log. `execute` parses one input
//! line, dispatches on the first token, and applies at most one of the
//! allowed side effects: append an entry, move the cwd, switch the
//! theme, or clear the log. Every failure is an explanatory output
//! line; no command leaves the session in a partial state.

use crate::config::Theme;
use crate::content::{self, PROJECTS, STORIES};
use crate::shell::docs;
use crate::shell::output::{Entry, OutputLine};
use crate::shell::path;
use crate::shell::vfs::{self, PathKind};

pub struct Session {
    cwd: Vec<String>,
    entries: Vec<Entry>,
    history: Vec<String>,
    theme: Theme,
    theme_changed: bool,
}

impl Session {
    /// Create a session homed at `/home/nishanth`.
    pub fn new(theme: Theme) -> Self {
        Self {
            cwd: path::HOME_SEGMENTS.iter().map(|s| s.to_string()).collect(),
            entries: Vec::new(),
            history: Vec::new(),
            theme,
            theme_changed: false,
        }
    }

    pub fn cwd_path(&self) -> String {
        path::join(&self.cwd)
    }

    /// The cwd as shown in the prompt (`~` abbreviation applied).
    pub fn prompt_path(&self) -> String {
        path::prompt_display(&self.cwd_path())
    }

    pub fn cwd_segments(&self) -> &[String] {
        &self.cwd
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Submitted command strings, oldest first. Survives `clear`.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Theme selected by the last `theme` command, if any, consumed for
    /// persistence.
    pub fn take_theme_change(&mut self) -> Option<Theme> {
        if self.theme_changed {
            self.theme_changed = false;
            Some(self.theme)
        } else {
            None
        }
    }

    /// Append an entry without recording history. Used for output that
    /// is not a submitted command, e.g. completion candidate listings.
    pub fn push_entry(&mut self, command: impl Into<String>, lines: Vec<OutputLine>) {
        self.entries.push(Entry {
            command: command.into(),
            cwd_at_run: self.prompt_path(),
            lines,
        });
    }

    /// Execute one input line.
    pub fn execute(&mut self, raw: &str) {
        let command_text = raw.trim().to_string();
        if command_text.is_empty() {
            return;
        }
        self.history.push(command_text.clone());

        let mut tokens = command_text.split_whitespace();
        // split_whitespace on non-empty trimmed input always yields a token
        let name = tokens.next().unwrap_or_default().to_lowercase();
        let args = tokens.collect::<Vec<_>>().join(" ");
        tracing::debug!(command = %name, args = %args, cwd = %self.cwd_path(), "executing");

        let cwd_at_run = self.prompt_path();

        let lines = match name.as_str() {
            "clear" => {
                self.entries.clear();
                return;
            }
            "help" | "commands" => docs::help_lines(),
            "man" => {
                if args.is_empty() {
                    vec![OutputLine::error("usage: man <command>")]
                } else {
                    docs::man_lines(&args)
                }
            }
            "whoami" => vec![OutputLine::success("nishanth")],
            "neofetch" => self.neofetch_lines(),
            "pwd" => vec![OutputLine::new(self.cwd_path())],
            "ls" => self.cmd_ls(&args),
            "cd" => self.cmd_cd(&args),
            "cat" => self.cmd_cat(&args),
            "projects" => read_known("/projects/list.txt"),
            "project" => {
                if args.is_empty() {
                    vec![OutputLine::error("usage: project <id|number|keyword>")]
                } else {
                    match content::find_project(&args) {
                        Some(project) => vfs::project_lines(project),
                        None => vec![OutputLine::error(format!("project not found: {args}"))],
                    }
                }
            }
            "journey" => read_known("/journey/list.txt"),
            "story" => {
                if args.is_empty() {
                    vec![OutputLine::error("usage: story <id|number|keyword>")]
                } else {
                    match content::find_story(&args) {
                        Some(story) => vfs::story_lines(story),
                        None => vec![OutputLine::error(format!("story not found: {args}"))],
                    }
                }
            }
            "open" => self.cmd_open(&args),
            "profile" => read_known("/home/nishanth/profile.txt"),
            "resume" => read_known("/home/nishanth/resume.txt"),
            "contact" => read_known("/home/nishanth/contact.txt"),
            "theme" => self.cmd_theme(&args),
            "sudo" => cmd_sudo(&args),
            _ => vec![
                OutputLine::error(format!("{name}: command not found")),
                OutputLine::muted("type \"help\" to list available commands"),
            ],
        };

        self.entries.push(Entry {
            command: command_text,
            cwd_at_run,
            lines,
        });
    }

    fn cmd_ls(&self, args: &str) -> Vec<OutputLine> {
        let target = if args.is_empty() {
            self.cwd.clone()
        } else {
            path::resolve(args, &self.cwd)
        };
        let target_path = path::join(&target);

        let kind = vfs::classify(&target_path);
        if kind.is_file() {
            let name = target.last().cloned().unwrap_or_default();
            return vec![OutputLine::success(name)];
        }
        if !kind.is_directory() {
            return vec![OutputLine::error(format!(
                "ls: cannot access '{args}': No such file or directory"
            ))];
        }

        match vfs::list_dir(&target_path) {
            Some(entries) if !entries.is_empty() => {
                vec![OutputLine::success(entries.join("  "))]
            }
            _ => vec![OutputLine::muted("(empty)")],
        }
    }

    fn cmd_cd(&mut self, args: &str) -> Vec<OutputLine> {
        let target = if args.is_empty() { path::HOME_PATH } else { args };
        let segments = path::resolve(target, &self.cwd);
        let target_path = path::join(&segments);

        if !vfs::classify(&target_path).is_directory() {
            return vec![OutputLine::error(format!(
                "cd: no such file or directory: {target}"
            ))];
        }
        self.cwd = segments;
        vec![OutputLine::muted(format!("moved to {target_path}"))]
    }

    fn cmd_cat(&self, args: &str) -> Vec<OutputLine> {
        if args.is_empty() {
            return vec![OutputLine::error("cat: missing file operand")];
        }
        let segments = path::resolve(args, &self.cwd);
        let file_path = path::join(&segments);

        match vfs::classify(&file_path) {
            PathKind::Directory => {
                vec![OutputLine::error(format!("cat: {args}: Is a directory"))]
            }
            PathKind::Missing => {
                vec![OutputLine::error(format!("cat: {args}: No such file"))]
            }
            _ => read_known(&file_path),
        }
    }

    fn cmd_open(&self, args: &str) -> Vec<OutputLine> {
        if args.is_empty() {
            return vec![OutputLine::error("usage: open <keyword>")];
        }
        // Projects win ties with stories for the same keyword.
        if let Some(project) = content::find_project(args) {
            return vfs::project_lines(project);
        }
        if let Some(story) = content::find_story(args) {
            return vfs::story_lines(story);
        }
        vec![OutputLine::error(format!("no match found for: {args}"))]
    }

    fn cmd_theme(&mut self, args: &str) -> Vec<OutputLine> {
        match args.parse::<Theme>() {
            Ok(theme) => {
                self.theme = theme;
                self.theme_changed = true;
                tracing::info!("Theme switched to {}", theme.name());
                vec![OutputLine::success(format!(
                    "theme switched to {}",
                    theme.name()
                ))]
            }
            Err(()) => vec![OutputLine::error(format!(
                "invalid theme '{args}', use: {}",
                Theme::options()
            ))],
        }
    }

    fn neofetch_lines(&self) -> Vec<OutputLine> {
        vec![
            OutputLine::accent("nishanth@portfolio"),
            OutputLine::muted("------------------"),
            OutputLine::new("OS: NISHANTH.OS Linux 3.1"),
            OutputLine::new("Shell: zsh"),
            OutputLine::new("Terminal: chrono-term"),
            OutputLine::new(format!("PWD: {}", self.cwd_path())),
            OutputLine::new(format!("Projects: {}", PROJECTS.len())),
            OutputLine::new(format!("Stories: {}", STORIES.len())),
        ]
    }
}

/// Read a path the caller already classified as a file.
fn read_known(file_path: &str) -> Vec<OutputLine> {
    vfs::read_file(file_path).unwrap_or_else(|| vec![OutputLine::error("file not found")])
}

fn cmd_sudo(args: &str) -> Vec<OutputLine> {
    if args.is_empty() {
        return vec![OutputLine::error("usage: sudo <command>")];
    }
    let password_line = OutputLine::muted("[sudo] password for nishanth: ********");
    let lowered = args.to_lowercase();
    if lowered == "hire nishanth" {
        return vec![
            password_line,
            OutputLine::success("Access granted. Offer letter generated."),
        ];
    }
    if lowered.starts_with("rm -rf") {
        return vec![
            password_line,
            OutputLine::error("Permission denied. Critical system protected."),
        ];
    }
    vec![
        password_line,
        OutputLine::error("nishanth is not in the sudoers file. This incident will be reported."),
    ]
}
