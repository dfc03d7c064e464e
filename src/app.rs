//! Application state: the session, the boot sequence, the input line,
//! and the key handling that ties them together.

use crate::boot::BootSequence;
use crate::config::Config;
use crate::config_io;
use crate::shell::complete::{self, Completion};
use crate::shell::output::OutputLine;
use crate::shell::session::Session;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

pub struct App {
    pub session: Session,
    pub boot: BootSequence,
    input: String,
    cursor: usize,
    history_index: Option<usize>,
    scroll_offset: usize,
    config: Config,
    config_path: Option<PathBuf>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: Option<PathBuf>, boot: BootSequence) -> Self {
        Self {
            session: Session::new(config.theme),
            boot,
            input: String::new(),
            cursor: 0,
            history_index: None,
            scroll_offset: 0,
            config,
            config_path,
            should_quit: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Cursor position as a byte offset into the input.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                }
                KeyCode::Char('l') => {
                    self.session.execute("clear");
                    self.scroll_offset = 0;
                }
                KeyCode::Char('u') => {
                    self.input.drain(..self.cursor);
                    self.cursor = 0;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.autocomplete(),
            KeyCode::Up => self.history_back(),
            KeyCode::Down => self.history_forward(),
            KeyCode::Left => {
                self.cursor = prev_boundary(&self.input, self.cursor);
            }
            KeyCode::Right => {
                self.cursor = next_boundary(&self.input, self.cursor);
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.len(),
            KeyCode::Backspace => {
                let prev = prev_boundary(&self.input, self.cursor);
                if prev < self.cursor {
                    self.input.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            KeyCode::Delete => {
                let next = next_boundary(&self.input, self.cursor);
                if next > self.cursor {
                    self.input.drain(self.cursor..next);
                }
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
            }
            KeyCode::Char(c) => {
                self.input.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        if self.boot.is_booting() {
            return;
        }
        let line = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.history_index = None;
        self.scroll_offset = 0;
        self.session.execute(&line);
        self.persist_theme_change();
    }

    fn autocomplete(&mut self) {
        if self.boot.is_booting() {
            return;
        }
        match complete::complete(&self.input, self.session.cwd_segments()) {
            Completion::None => {}
            Completion::Replace(text) => {
                self.input = text;
                self.cursor = self.input.len();
            }
            Completion::Candidates { token, matches } => {
                self.session.push_entry(
                    format!("tab-complete {token}"),
                    vec![OutputLine::success(matches.join("  "))],
                );
                self.scroll_offset = 0;
            }
        }
    }

    fn history_back(&mut self) {
        let history = self.session.history();
        if history.is_empty() {
            return;
        }
        let next = match self.history_index {
            None => history.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.history_index = Some(next);
        self.set_input(history[next].clone());
    }

    fn history_forward(&mut self) {
        let history = self.session.history();
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 >= history.len() {
            self.history_index = None;
            self.set_input(String::new());
        } else {
            self.history_index = Some(index + 1);
            self.set_input(history[index + 1].clone());
        }
    }

    fn set_input(&mut self, text: String) {
        self.cursor = text.len();
        self.input = text;
    }

    fn persist_theme_change(&mut self) {
        let Some(theme) = self.session.take_theme_change() else {
            return;
        };
        self.config.theme = theme;
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = config_io::save(path, &self.config) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
    }
}

fn prev_boundary(text: &str, cursor: usize) -> usize {
    text[..cursor]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .chars()
        .next()
        .map(|c| cursor + c.len_utf8())
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    fn app() -> App {
        App::new(Config::default(), None, BootSequence::skipped())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_enter_executes() {
        let mut a = app();
        type_line(&mut a, "pwd");
        press(&mut a, KeyCode::Enter);
        assert_eq!(a.input(), "");
        assert_eq!(a.session.entries().len(), 1);
        assert_eq!(a.session.entries()[0].command, "pwd");
    }

    #[test]
    fn enter_is_ignored_while_booting() {
        let mut a = App::new(
            Config::default(),
            None,
            BootSequence::new(std::time::Instant::now()),
        );
        type_line(&mut a, "pwd");
        press(&mut a, KeyCode::Enter);
        assert!(a.session.entries().is_empty());
        assert_eq!(a.input(), "pwd");
    }

    #[test]
    fn tab_replaces_unique_completion() {
        let mut a = app();
        type_line(&mut a, "neo");
        press(&mut a, KeyCode::Tab);
        assert_eq!(a.input(), "neofetch ");
        assert_eq!(a.cursor(), a.input().len());
    }

    #[test]
    fn tab_logs_ambiguous_candidates() {
        let mut a = app();
        type_line(&mut a, "pro");
        press(&mut a, KeyCode::Tab);
        assert_eq!(a.input(), "pro");
        let entry = a.session.entries().last().unwrap();
        assert_eq!(entry.command, "tab-complete pro");
        assert!(entry.lines[0].text.contains("projects"));
    }

    #[test]
    fn history_walks_up_and_down() {
        let mut a = app();
        type_line(&mut a, "pwd");
        press(&mut a, KeyCode::Enter);
        type_line(&mut a, "ls");
        press(&mut a, KeyCode::Enter);

        press(&mut a, KeyCode::Up);
        assert_eq!(a.input(), "ls");
        press(&mut a, KeyCode::Up);
        assert_eq!(a.input(), "pwd");
        press(&mut a, KeyCode::Up);
        assert_eq!(a.input(), "pwd");

        press(&mut a, KeyCode::Down);
        assert_eq!(a.input(), "ls");
        press(&mut a, KeyCode::Down);
        assert_eq!(a.input(), "");
    }

    #[test]
    fn history_includes_cleared_commands() {
        let mut a = app();
        type_line(&mut a, "ls");
        press(&mut a, KeyCode::Enter);
        type_line(&mut a, "clear");
        press(&mut a, KeyCode::Enter);
        assert!(a.session.entries().is_empty());
        press(&mut a, KeyCode::Up);
        assert_eq!(a.input(), "clear");
        press(&mut a, KeyCode::Up);
        assert_eq!(a.input(), "ls");
    }

    #[test]
    fn backspace_and_cursor_movement() {
        let mut a = app();
        type_line(&mut a, "cat");
        press(&mut a, KeyCode::Left);
        press(&mut a, KeyCode::Backspace);
        assert_eq!(a.input(), "ct");
        press(&mut a, KeyCode::End);
        press(&mut a, KeyCode::Backspace);
        press(&mut a, KeyCode::Backspace);
        press(&mut a, KeyCode::Backspace);
        assert_eq!(a.input(), "");
    }

    #[test]
    fn ctrl_q_requests_quit() {
        let mut a = app();
        a.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(a.should_quit());
    }

    #[test]
    fn theme_command_updates_config_on_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let mut a = App::new(Config::default(), Some(path.clone()), BootSequence::skipped());
        type_line(&mut a, "theme sunset");
        press(&mut a, KeyCode::Enter);
        let saved = config_io::load(&path).unwrap().unwrap();
        assert_eq!(saved.theme, Theme::Sunset);
    }
}
