mod build_info;
mod core;
mod ui;
mod utils;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::config::RunnerConfig;
use crate::core::session::{GamePhase, GameSession};

/// Input poll timeout per frame.
const FRAME_POLL_MS: u64 = 16;
/// Largest delta handed to the core. The core assumes dt >= 0; lag spikes
/// are cut here, before they reach it.
const MAX_FRAME_DT: f64 = 0.1;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "duskrunner {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("duskrunner - Terminal Endless Runner\n");
                println!("Usage: duskrunner [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!();
                println!("Keys: Space/Up to start and jump, R to restart, Q to quit.");
                println!("Tuning lives in ~/.duskrunner/config.json.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'duskrunner --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = RunnerConfig::load();
    // Seed an editable config file on first run
    if !RunnerConfig::exists_on_disk() {
        let _ = config.save();
    }

    let mut session = GameSession::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &session))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') | KeyCode::Up => session.handle_input(),
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        // Restart rebuilds the whole model from scratch
                        if session.phase() == GamePhase::GameOver {
                            session = GameSession::new(&config);
                        }
                    }
                    _ => {}
                }
            }
        }

        let now = Instant::now();
        let dt = now
            .duration_since(last_frame)
            .as_secs_f64()
            .min(MAX_FRAME_DT);
        last_frame = now;
        session.tick(dt);
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
