//! Location detail widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use rotfield_core::{Location, Registry};

use crate::ui::theme::SwampTheme;

/// Read-only panel describing the current location
pub struct LocationDetailWidget<'a> {
    location: &'a Location,
    registry: &'a Registry,
    theme: &'a SwampTheme,
    necro: bool,
}

impl<'a> LocationDetailWidget<'a> {
    pub fn new(location: &'a Location, registry: &'a Registry, theme: &'a SwampTheme) -> Self {
        Self {
            location,
            registry,
            theme,
            necro: false,
        }
    }

    pub fn necro(mut self, necro: bool) -> Self {
        self.necro = necro;
        self
    }
}

impl Widget for LocationDetailWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.theme.accent(self.location.theme, self.necro);

        let block = Block::default()
            .title(" Location ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                self.location.name.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.location.description.clone(),
                Style::default()
                    .fg(self.theme.foreground)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.location.content.clone(),
                Style::default().fg(self.theme.foreground),
            )),
        ];

        // The alternate reading only surfaces under necromantic sight
        if self.necro {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "⦿ Necromantic Insights",
                Style::default()
                    .fg(self.theme.necro)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                self.location.insight.clone(),
                Style::default().fg(self.theme.necro_dim),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Connecting Boardwalks",
            Style::default().fg(accent),
        )));

        for &connection in &self.location.connections {
            if let Some(target) = self.registry.get(connection) {
                let color = self.theme.accent(target.theme, self.necro);
                lines.push(Line::from(Span::styled(
                    format!("↝ {}", target.name),
                    Style::default().fg(color),
                )));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        paragraph.render(inner, buf);
    }
}
