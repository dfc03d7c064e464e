//! The simulated boot sequence shown before the shell accepts input.
//!
//! Lines appear one at a time on a fixed cadence; after the last line a
//! short pause ends the boot and unlocks the input line. The sequence is
//! driven by polling with explicit instants so it can be tested without
//! sleeping.

use crate::shell::output::OutputLine;
use std::time::{Duration, Instant};

pub const BOOT_LINE_INTERVAL: Duration = Duration::from_millis(220);
pub const BOOT_READY_PAUSE: Duration = Duration::from_millis(180);

fn boot_lines() -> Vec<OutputLine> {
    vec![
        OutputLine::success("[  OK  ] Mounted /home filesystem"),
        OutputLine::success("[  OK  ] Initialized nishanth.service"),
        OutputLine::success("[  OK  ] Started chronogram-terminal.target"),
        OutputLine::muted("[INFO ] Loading project index..."),
        OutputLine::muted("[INFO ] Loading journey logs..."),
        OutputLine::success("[  OK  ] Shell ready. type 'help' for commands"),
    ]
}

pub struct BootSequence {
    pending: std::vec::IntoIter<OutputLine>,
    shown: Vec<OutputLine>,
    next_tick: Option<Instant>,
    booting: bool,
}

impl BootSequence {
    /// Start a boot; the first line appears one interval from `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            pending: boot_lines().into_iter(),
            shown: Vec::new(),
            next_tick: Some(now + BOOT_LINE_INTERVAL),
            booting: true,
        }
    }

    /// A boot that already finished, with the full log shown.
    pub fn skipped() -> Self {
        Self {
            pending: Vec::new().into_iter(),
            shown: boot_lines(),
            next_tick: None,
            booting: false,
        }
    }

    /// Whether input is still locked.
    pub fn is_booting(&self) -> bool {
        self.booting
    }

    /// Lines revealed so far.
    pub fn log(&self) -> &[OutputLine] {
        &self.shown
    }

    /// Deadline of the next state change, for the event-loop poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Advance the sequence to `now`. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(deadline) = self.next_tick {
            if now < deadline {
                break;
            }
            changed = true;
            match self.pending.next() {
                Some(line) => {
                    self.shown.push(line);
                    self.next_tick = Some(if self.pending.len() == 0 {
                        deadline + BOOT_READY_PAUSE
                    } else {
                        deadline + BOOT_LINE_INTERVAL
                    });
                }
                None => {
                    self.booting = false;
                    self.next_tick = None;
                }
            }
        }
        changed
    }
}
