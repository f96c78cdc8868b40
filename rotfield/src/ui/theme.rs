//! Color theme and styling for the Rotfield TUI

use ratatui::style::{Color, Modifier, Style};
use rotfield_core::Theme;

/// Swamp UI color theme
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct SwampTheme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Terminal colors
    pub prompt: Color,
    pub echo: Color,
    pub output: Color,

    // Chrome
    pub title_float: Color,
    pub title_rot: Color,
    pub muted: Color,
    pub water: Color,

    // Necromantic sight
    pub necro: Color,
    pub necro_dim: Color,
}

impl Default for SwampTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Green,

            prompt: Color::Green,
            echo: Color::Blue,
            output: Color::LightGreen,

            title_float: Color::Green,
            title_rot: Color::LightMagenta,
            muted: Color::DarkGray,
            water: Color::Cyan,

            necro: Color::LightMagenta,
            necro_dim: Color::Magenta,
        }
    }
}

impl SwampTheme {
    /// Concrete color for a location's theme token.
    pub fn location_color(&self, theme: Theme) -> Color {
        match theme {
            Theme::Indigo => Color::LightBlue,
            Theme::Green => Color::Green,
            Theme::Emerald => Color::LightGreen,
            Theme::Rose => Color::LightRed,
            Theme::Amber => Color::Yellow,
        }
    }

    /// Accent color: the location's own color, or pink under necromantic
    /// sight, which flattens every location into one palette.
    pub fn accent(&self, theme: Theme, necro: bool) -> Color {
        if necro {
            self.necro
        } else {
            self.location_color(theme)
        }
    }

    /// Style for echoed input lines in the terminal.
    pub fn echo_style(&self) -> Style {
        Style::default().fg(self.echo)
    }

    /// Style for terminal output lines.
    pub fn output_style(&self) -> Style {
        Style::default().fg(self.output)
    }

    /// Style for the `>` prompt marker.
    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.prompt)
    }

    /// Style for de-emphasized chrome.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Style for a location tab label.
    pub fn location_tab_style(&self, theme: Theme, active: bool, necro: bool) -> Style {
        if active {
            Style::default()
                .fg(self.accent(theme, necro))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for a view tab label.
    pub fn view_tab_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.title_float)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.muted)
        }
    }
}
