//! Status and hotkey bar widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use rotfield_core::{Location, ViewTab};

use crate::app::InputMode;
use crate::ui::theme::SwampTheme;

const FOOTER_MOTTO: &str = "necromancy::active • mycelium::thriving • decay::fertile";

/// Status bar showing mode, location, and transient messages
pub struct StatusBarWidget<'a> {
    location: &'a Location,
    tab: ViewTab,
    input_mode: InputMode,
    necro: bool,
    theme: &'a SwampTheme,
    message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(
        location: &'a Location,
        tab: ViewTab,
        input_mode: InputMode,
        theme: &'a SwampTheme,
    ) -> Self {
        Self {
            location,
            tab,
            input_mode,
            necro: false,
            theme,
            message: None,
        }
    }

    pub fn necro(mut self, necro: bool) -> Self {
        self.necro = necro;
        self
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (mode_text, mode_style) = match self.input_mode {
            InputMode::Normal => (
                "NORMAL",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            InputMode::Insert => (
                "INSERT",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        let location_style =
            Style::default().fg(self.theme.accent(self.location.theme, self.necro));

        let mut spans = vec![
            Span::styled(format!("-- {mode_text} --"), mode_style),
            Span::raw(" | "),
            Span::styled(self.location.name.clone(), location_style),
            Span::raw(" | "),
            Span::styled(self.tab.title(), self.theme.muted_style()),
        ];

        if self.necro {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "NECROMANTIC SIGHT",
                Style::default().fg(self.theme.necro),
            ));
        }

        if let Some(msg) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                msg,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        paragraph.render(area, buf);
    }
}

/// Hotkey hint bar with the swamp motto on the right edge
pub struct HotkeyBarWidget<'a> {
    input_mode: InputMode,
    theme: &'a SwampTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(input_mode: InputMode, theme: &'a SwampTheme) -> Self {
        Self { input_mode, theme }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = match self.input_mode {
            InputMode::Normal => {
                "i command  m/t/a views  Tab cycle  1-5 visit  n sight  ? help  q quit"
            }
            InputMode::Insert => "Enter submit  Esc back  ↑/↓ history",
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(
            hints,
            self.theme.muted_style(),
        )));
        paragraph.render(area, buf);

        // Motto hugs the right edge when there is room for both
        let motto_len = FOOTER_MOTTO.chars().count() as u16;
        if area.width > hints.chars().count() as u16 + motto_len + 4 {
            let x = area.x + area.width - motto_len;
            let style = Style::default()
                .fg(self.theme.necro_dim)
                .add_modifier(Modifier::DIM);
            for (i, ch) in FOOTER_MOTTO.chars().enumerate() {
                buf[(x + i as u16, area.y)].set_char(ch).set_style(style);
            }
        }
    }
}
