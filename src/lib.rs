//! chronoterm: a personal portfolio presented as a simulated Unix shell.
//!
//! The shell modules are pure state machines over static content; the
//! `app` and `ui` layers wire them to a crossterm/ratatui terminal.

pub mod app;
pub mod boot;
pub mod config;
pub mod config_io;
pub mod content;
pub mod shell;
pub mod ui;
