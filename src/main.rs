use anyhow::{Context, Result};
use chronoterm::app::App;
use chronoterm::boot::BootSequence;
use chronoterm::config::Theme;
use chronoterm::config_io;
use chronoterm::shell::session::Session;
use chronoterm::ui;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// A terminal-style portfolio shell
#[derive(Parser, Debug)]
#[command(name = "chronoterm")]
#[command(about = "A simulated Unix shell over a portfolio filesystem", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Start with this theme instead of the configured one
    #[arg(long, value_name = "NAME", value_parser = parse_theme)]
    theme: Option<Theme>,

    /// Skip the boot sequence animation
    #[arg(long)]
    no_boot: bool,

    /// Run commands without the TUI and print their output (repeatable)
    #[arg(long, value_name = "COMMAND")]
    exec: Vec<String>,
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    value
        .parse()
        .map_err(|_| format!("unknown theme '{value}', use: {}", Theme::options()))
}

fn init_logging(log_file: Option<PathBuf>) -> Result<()> {
    let path = log_file.unwrap_or_else(|| std::env::temp_dir().join("chronoterm.log"));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.clone())?;
    tracing::info!("chronoterm starting");

    let config_path = args.config.clone().or_else(config_io::default_config_path);
    let mut config = config_path
        .as_deref()
        .map(config_io::load_or_default)
        .unwrap_or_default();
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    if !args.exec.is_empty() {
        return run_headless(&args.exec, config.theme);
    }

    // Restore the terminal before the default panic report prints.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        ratatui::restore();
        original_hook(panic);
    }));

    let boot = if args.no_boot {
        BootSequence::skipped()
    } else {
        BootSequence::new(Instant::now())
    };
    let mut app = App::new(config, config_path, boot);

    let mut terminal = ratatui::init();
    let result = run_event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result.context("Event loop returned an error")
}

fn run_event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.boot.tick(Instant::now());
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_quit() {
            tracing::info!("chronoterm exiting");
            return Ok(());
        }

        // Wake up for the next boot line even when no key arrives.
        let timeout = app
            .boot
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(250));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(..) => {}
                _ => {}
            }
        }
    }
}

/// Run commands against a fresh session and print the transcript.
fn run_headless(commands: &[String], theme: Theme) -> Result<()> {
    let mut session = Session::new(theme);
    for command in commands {
        session.execute(command);
    }
    for entry in session.entries() {
        println!("nishanth@portfolio:{}$ {}", entry.cwd_at_run, entry.command);
        for line in &entry.lines {
            println!("{}", line.text);
        }
    }
    Ok(())
}
