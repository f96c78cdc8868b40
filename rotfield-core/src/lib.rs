//! Rotfield: Gardens of Shacks.
//!
//! This crate provides the behavioral core of the Rotfield explorer:
//! - The five-location world registry, validated at startup
//! - The terminal command interpreter (`help`, `about`, `clear`, `visit`)
//! - The append-only terminal transcript
//! - Session navigation state (current location, active view tab)
//!
//! # Quick Start
//!
//! ```
//! use rotfield_core::{ExplorerSession, LocationId};
//!
//! let mut session = ExplorerSession::new().expect("built-in world data is consistent");
//!
//! session.submit("visit gardens");
//! assert_eq!(session.location(), LocationId::Gardens);
//! println!("{}", session.current_location().content);
//! ```

pub mod command;
pub mod session;
pub mod transcript;
pub mod world;

/// The Rotfield version string, as surfaced by `about` and the UI chrome.
pub const VERSION: &str = "0.3.4";

// Primary public API
pub use command::{interpret, Command, Interpretation, Output};
pub use session::{ExplorerSession, ViewTab};
pub use transcript::{LineKind, Transcript, TranscriptLine};
pub use world::{Location, LocationId, Registry, Theme, WorldError};
