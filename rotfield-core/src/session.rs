//! ExplorerSession - the primary public API for wandering Rotfield.
//!
//! Owns the registry, the transcript, and the two navigation cells
//! (current location, active view tab). Every input source - terminal
//! command, location tab, map node - writes the same cells, synchronously,
//! last-write-wins.

use crate::command::{interpret, Command, Output};
use crate::transcript::Transcript;
use crate::world::{Location, LocationId, Registry, WorldError};

/// The main content views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    #[default]
    Map,
    Terminal,
    About,
}

impl ViewTab {
    pub const ALL: [ViewTab; 3] = [ViewTab::Map, ViewTab::Terminal, ViewTab::About];

    pub fn title(&self) -> &'static str {
        match self {
            ViewTab::Map => "Map View",
            ViewTab::Terminal => "Terminal",
            ViewTab::About => "About",
        }
    }
}

/// A live Rotfield session: validated registry plus session-local state.
#[derive(Debug, Clone)]
pub struct ExplorerSession {
    registry: Registry,
    transcript: Transcript,
    location: LocationId,
    tab: ViewTab,
}

impl ExplorerSession {
    /// Start a session over the built-in registry. Fails only if the
    /// compiled-in location table is inconsistent.
    pub fn new() -> Result<Self, WorldError> {
        Ok(Self {
            registry: Registry::builtin()?,
            transcript: Transcript::with_banner(),
            location: LocationId::Boardwalks,
            tab: ViewTab::default(),
        })
    }

    /// Submit a raw terminal line: echo it, interpret it, apply the result.
    /// Empty input (after trimming) is suppressed without an echo.
    pub fn submit(&mut self, raw: &str) {
        let Some(command) = Command::parse(raw) else {
            return;
        };

        self.transcript.push_input(raw.to_string());

        let verdict = interpret(&self.registry, &command);
        match verdict.output {
            Output::Append(lines) => {
                for line in lines {
                    self.transcript.push_output(line);
                }
            }
            Output::Clear => self.transcript.clear(),
        }

        if let Some(destination) = verdict.destination {
            self.location = destination;
        }
    }

    /// Navigate directly, as from a location tab or a map node.
    pub fn visit(&mut self, id: LocationId) {
        self.location = id;
    }

    /// Switch the active view tab.
    pub fn select_tab(&mut self, tab: ViewTab) {
        self.tab = tab;
    }

    pub fn location(&self) -> LocationId {
        self.location
    }

    /// The full record for the current location.
    pub fn current_location(&self) -> &Location {
        self.registry
            .get(self.location)
            .expect("builtin registry covers every location id")
    }

    pub fn tab(&self) -> ViewTab {
        self.tab
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::LineKind;

    #[test]
    fn session_starts_on_the_boardwalks_map() {
        let session = ExplorerSession::new().unwrap();
        assert_eq!(session.location(), LocationId::Boardwalks);
        assert_eq!(session.tab(), ViewTab::Map);
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn submit_echoes_before_output() {
        let mut session = ExplorerSession::new().unwrap();
        session.submit("visit gardens");

        let lines = session.transcript().lines();
        let echo = &lines[lines.len() - 2];
        let reply = &lines[lines.len() - 1];
        assert_eq!(echo.kind, LineKind::Input);
        assert_eq!(echo.text, "visit gardens");
        assert_eq!(reply.kind, LineKind::Output);
        assert_eq!(reply.text, "Navigating to Knowledge Gardens...");
        assert_eq!(session.location(), LocationId::Gardens);
    }

    #[test]
    fn submit_preserves_raw_echo_text() {
        let mut session = ExplorerSession::new().unwrap();
        session.submit("  HELP  ");

        let lines = session.transcript().lines();
        // 2 banner + 1 echo + 4 help lines
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[2].text, "  HELP  ");
        assert_eq!(lines[2].kind, LineKind::Input);
    }

    #[test]
    fn empty_submission_is_a_no_op() {
        let mut session = ExplorerSession::new().unwrap();
        session.submit("   ");
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.location(), LocationId::Boardwalks);
    }

    #[test]
    fn clear_empties_the_transcript_regardless_of_contents() {
        let mut session = ExplorerSession::new().unwrap();
        session.submit("help");
        session.submit("about");
        session.submit("clear");
        assert!(session.transcript().is_empty());

        // Repeating clear on an already-empty transcript stays empty
        // (one echo is appended, then the clear wipes it).
        session.submit("clear");
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn failed_visit_leaves_location_unchanged() {
        let mut session = ExplorerSession::new().unwrap();
        session.submit("visit nowhere");
        assert_eq!(session.location(), LocationId::Boardwalks);

        let last = session.transcript().lines().last().unwrap();
        assert!(last.text.starts_with("Unknown location: nowhere."));
    }

    #[test]
    fn all_input_sources_write_the_same_cell() {
        let mut session = ExplorerSession::new().unwrap();

        session.visit(LocationId::Shacks);
        assert_eq!(session.location(), LocationId::Shacks);

        session.submit("visit bulletinboards");
        assert_eq!(session.location(), LocationId::BulletinBoards);

        session.visit(LocationId::Gardens);
        assert_eq!(session.location(), LocationId::Gardens);
    }

    #[test]
    fn tab_selection_is_independent_of_location() {
        let mut session = ExplorerSession::new().unwrap();
        session.select_tab(ViewTab::Terminal);
        session.visit(LocationId::BonePiles);
        assert_eq!(session.tab(), ViewTab::Terminal);
        assert_eq!(session.location(), LocationId::BonePiles);

        session.select_tab(ViewTab::About);
        assert_eq!(session.tab(), ViewTab::About);
    }

    #[test]
    fn current_location_reflects_navigation() {
        let mut session = ExplorerSession::new().unwrap();
        assert_eq!(session.current_location().name, "Connecting Boardwalks");
        session.submit("visit shacks");
        assert_eq!(session.current_location().name, "Conceptual Shacks");
    }
}
