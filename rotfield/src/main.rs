//! Rotfield explorer TUI.
//!
//! A terminal interface for wandering the Rotfield swamp: a map of the five
//! locations, a location detail panel, the FLOAT principles sidebar, and the
//! in-app terminal.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for piping
//! and automated testing:
//!
//! ```bash
//! cargo run -p rotfield -- --headless
//! ```

mod app;
mod events;
mod headless;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rotfield_core::ExplorerSession;
use std::io::{self, stdout};
use std::time::Duration;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--headless") {
        return headless::run_headless().map_err(|e| e.into());
    }

    // The only hard failure in the system: an inconsistent compiled-in
    // location table. Surface it before touching the terminal.
    let session = match ExplorerSession::new() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to load the Rotfield registry: {e}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(session));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        // Poll for events with a timeout so the cursor blink keeps ticking
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("Rotfield: Gardens of Shacks - explorer TUI");
    println!();
    println!("USAGE:");
    println!("  rotfield [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run the terminal surface only (line-oriented, no TUI)");
    println!();
    println!("KEYS (TUI mode):");
    println!("  i or /           Focus the terminal prompt");
    println!("  m, t, a          Switch view (map, terminal, about)");
    println!("  Tab / Shift-Tab  Cycle locations");
    println!("  1-5              Jump to a location");
    println!("  n                Toggle necromantic sight");
    println!("  j/k, g/G         Scroll the terminal transcript");
    println!("  ?                Help overlay");
    println!("  q                Quit");
    println!();
    println!("TERMINAL COMMANDS (both modes):");
    println!("  help, about, clear, visit <location>");
}
