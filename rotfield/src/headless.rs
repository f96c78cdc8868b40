//! Headless mode for the Rotfield explorer.
//!
//! A line-oriented interface over the same session the TUI drives. App
//! commands go straight to the interpreter; `#`-prefixed lines are harness
//! commands that sit outside the in-app command surface.

use rotfield_core::{ExplorerSession, LineKind, WorldError};
use std::io::{self, BufRead};

/// Run the explorer in headless mode.
///
/// Protocol:
/// - Plain lines are terminal commands (`help`, `about`, `clear`, `visit <location>`)
/// - Lines starting with `#` are harness commands (`#status`, `#quit`)
/// - Echoed input is printed with a `> ` prefix, output verbatim
pub fn run_headless() -> Result<(), WorldError> {
    let mut session = ExplorerSession::new()?;

    println!("=== Rotfield Headless Mode ===");
    println!();
    println!("Harness commands:");
    println!("  #status - Show current location and view tab");
    println!("  #quit   - Exit");
    println!();

    let mut printed = 0;
    printed += print_new_lines(&session, printed);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(harness) = trimmed.strip_prefix('#') {
            match harness.split_whitespace().next() {
                Some("quit") | Some("exit") => {
                    println!("Leaving the swamp.");
                    break;
                }
                Some("status") => {
                    let location = session.current_location();
                    println!("[STATUS]");
                    println!("  Location: {} ({})", location.name, location.id);
                    println!("  View: {}", session.tab().title());
                }
                _ => {
                    println!("[ERROR] Unknown harness command: #{harness}");
                }
            }
            continue;
        }

        session.submit(&line);

        // A clear shrinks the transcript; resynchronize before printing.
        if session.transcript().len() < printed {
            printed = session.transcript().len();
        }
        printed += print_new_lines(&session, printed);
    }

    Ok(())
}

/// Print transcript lines from `from` onward, returning how many were printed.
fn print_new_lines(session: &ExplorerSession, from: usize) -> usize {
    let lines = &session.transcript().lines()[from..];
    for line in lines {
        match line.kind {
            LineKind::Input => println!("> {}", line.text),
            LineKind::Output => println!("{}", line.text),
        }
    }
    lines.len()
}
