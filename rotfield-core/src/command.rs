//! The terminal command interpreter.
//!
//! A fixed command surface: `help`, `about`, `clear`, and `visit <location>`.
//! Parsing and interpretation are pure; echoing the raw line into the
//! transcript is the caller's responsibility, and both error kinds here are
//! soft (transcript lines, never `Err`).

use crate::world::{LocationId, Registry};
use crate::VERSION;

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Clear,
    /// `visit` followed by a raw location token, not yet resolved.
    Visit(String),
    /// Anything else, carrying the normalized line for the error message.
    Unknown(String),
}

impl Command {
    /// Parse a raw input line. Returns `None` for input that is empty after
    /// trimming; submission of empty lines is suppressed entirely.
    pub fn parse(raw: &str) -> Option<Command> {
        let line = raw.trim().to_lowercase();
        if line.is_empty() {
            return None;
        }

        let command = match line.as_str() {
            "help" => Command::Help,
            "about" => Command::About,
            "clear" => Command::Clear,
            _ => match line.strip_prefix("visit ") {
                Some(rest) => match rest.split_whitespace().next() {
                    Some(token) => Command::Visit(token.to_string()),
                    None => Command::Unknown(line),
                },
                None => Command::Unknown(line),
            },
        };

        Some(command)
    }
}

/// What a command does to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Append these lines.
    Append(Vec<String>),
    /// Replace the transcript with an empty sequence.
    Clear,
}

/// The interpreter's verdict: transcript output plus an optional
/// navigation effect for the caller to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub output: Output,
    pub destination: Option<LocationId>,
}

impl Interpretation {
    fn append(lines: Vec<String>) -> Self {
        Self {
            output: Output::Append(lines),
            destination: None,
        }
    }
}

/// Interpret a parsed command against the registry.
pub fn interpret(registry: &Registry, command: &Command) -> Interpretation {
    match command {
        Command::Help => Interpretation::append(vec![
            "help - Show this help message".to_string(),
            format!(
                "visit [location] - Navigate to a location ({})",
                LocationId::valid_tokens()
            ),
            "about - About Rotfield".to_string(),
            "clear - Clear terminal output".to_string(),
        ]),

        Command::About => Interpretation::append(vec![
            "Rotfield: Gardens of Shacks".to_string(),
            "A living swamp of knowledge, ideas, and connections.".to_string(),
            "Built on the philosophy of 'Shacks, Not Cathedrals'".to_string(),
            format!("Version {VERSION} - FLOAT Memory Engine Active"),
        ]),

        Command::Clear => Interpretation {
            output: Output::Clear,
            destination: None,
        },

        Command::Visit(token) => match registry.lookup(token) {
            Ok(location) => Interpretation {
                output: Output::Append(vec![format!("Navigating to {}...", location.name)]),
                destination: Some(location.id),
            },
            Err(_) => Interpretation::append(vec![format!(
                "Unknown location: {token}. Valid locations are: {}",
                LocationId::valid_tokens()
            )]),
        },

        Command::Unknown(line) => Interpretation::append(vec![format!(
            "Unknown command: {line}. Type 'help' for available commands."
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Registry;

    fn registry() -> Registry {
        Registry::builtin().unwrap()
    }

    #[test]
    fn empty_input_is_suppressed() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("\t\n"), None);
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("HELP"), Some(Command::Help));
        assert_eq!(Command::parse("  help  "), Some(Command::Help));
        assert_eq!(Command::parse("Clear"), Some(Command::Clear));
    }

    #[test]
    fn help_block_lists_the_four_command_forms() {
        let verdict = interpret(&registry(), &Command::Help);
        let Output::Append(lines) = verdict.output else {
            panic!("help must append");
        };
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("help"));
        assert!(lines[1].contains("bonePiles, bulletinBoards"));
        assert!(lines[3].starts_with("clear"));
        assert_eq!(verdict.destination, None);
    }

    #[test]
    fn about_block_carries_the_version_string() {
        let verdict = interpret(&registry(), &Command::About);
        let Output::Append(lines) = verdict.output else {
            panic!("about must append");
        };
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Rotfield: Gardens of Shacks");
        assert_eq!(lines[3], "Version 0.3.4 - FLOAT Memory Engine Active");
    }

    #[test]
    fn clear_replaces_rather_than_appends() {
        let verdict = interpret(&registry(), &Command::Clear);
        assert_eq!(verdict.output, Output::Clear);
        assert_eq!(verdict.destination, None);
    }

    #[test]
    fn visit_known_location_navigates_and_confirms() {
        let verdict = interpret(&registry(), &Command::parse("visit gardens").unwrap());
        assert_eq!(verdict.destination, Some(LocationId::Gardens));
        assert_eq!(
            verdict.output,
            Output::Append(vec!["Navigating to Knowledge Gardens...".to_string()])
        );
    }

    #[test]
    fn visit_alias_matches_canonical_spelling() {
        let alias = interpret(&registry(), &Command::parse("visit bonepiles").unwrap());
        let canonical = interpret(&registry(), &Command::parse("visit bonePiles").unwrap());
        assert_eq!(alias, canonical);
        assert_eq!(alias.destination, Some(LocationId::BonePiles));
    }

    #[test]
    fn visit_unknown_location_lists_valid_tokens() {
        let verdict = interpret(&registry(), &Command::parse("visit nowhere").unwrap());
        assert_eq!(verdict.destination, None);
        assert_eq!(
            verdict.output,
            Output::Append(vec![
                "Unknown location: nowhere. Valid locations are: shacks, boardwalks, \
                 gardens, bonePiles, bulletinBoards"
                    .to_string()
            ])
        );
    }

    #[test]
    fn unknown_command_points_at_help() {
        let verdict = interpret(&registry(), &Command::parse("xyzzy").unwrap());
        assert_eq!(verdict.destination, None);
        assert_eq!(
            verdict.output,
            Output::Append(vec![
                "Unknown command: xyzzy. Type 'help' for available commands.".to_string()
            ])
        );
    }

    #[test]
    fn bare_visit_is_an_unknown_command() {
        assert_eq!(
            Command::parse("visit"),
            Some(Command::Unknown("visit".to_string()))
        );
    }

    #[test]
    fn visit_tolerates_repeated_spaces() {
        assert_eq!(
            Command::parse("visit   gardens"),
            Some(Command::Visit("gardens".to_string()))
        );
    }
}
