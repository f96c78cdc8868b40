//! TUI widgets for the Rotfield explorer

pub mod detail;
pub mod input;
pub mod map;
pub mod principles;
pub mod status_bar;
pub mod terminal;

pub use detail::LocationDetailWidget;
pub use input::PromptWidget;
pub use map::MapWidget;
pub use principles::PrinciplesWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
pub use terminal::TerminalWidget;
