//! FLOAT principles sidebar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::SwampTheme;

const PRINCIPLES: &[(&str, &str, &str, &str)] = &[
    (
        "⊟",
        "RITUAL",
        "STRUCTURE WITHOUT PRESSURE",
        "Rituals provide structure without rigidity. They're adaptable containers \
         for thought and action that reduce cognitive load without imposing \
         constraints.",
    ),
    (
        "≈",
        "RESONANCE",
        "TRUST THE SIGNAL",
        "Resonance is the art of recognizing patterns that matter. It's about \
         trusting intuitive connections and allowing them to guide exploration.",
    ),
    (
        "↻",
        "RECURSION",
        "REFINE BY RETURNING",
        "Recursion embraces the cycle of revisiting and refining. Each return to \
         an idea transforms it, creating depth through iteration.",
    ),
];

const FRAGMENTS: &[&str] = &[
    "\"Boundary ≠ Wall\"",
    "\"Bone Piles Are Sacred\"",
    "\"Living Systems Must Decay\"",
    "\"You don't organize knowledge. You compost it.\"",
];

/// Sidebar with the FLOAT principles and the fragment quotes
pub struct PrinciplesWidget<'a> {
    theme: &'a SwampTheme,
}

impl<'a> PrinciplesWidget<'a> {
    pub fn new(theme: &'a SwampTheme) -> Self {
        Self { theme }
    }
}

impl Widget for PrinciplesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" FLOAT Principles ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let heading = Style::default()
            .fg(self.theme.title_rot)
            .add_modifier(Modifier::BOLD);
        let tagline = Style::default().fg(self.theme.water);
        let body = Style::default().fg(self.theme.foreground);

        let mut lines: Vec<Line> = Vec::new();

        for (glyph, name, motto, text) in PRINCIPLES {
            lines.push(Line::from(vec![
                Span::styled(format!("{glyph} "), heading),
                Span::styled(*name, heading),
            ]));
            lines.push(Line::from(Span::styled(*motto, tagline)));
            lines.push(Line::from(Span::styled(*text, body)));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Fragments & Bones",
            Style::default()
                .fg(self.theme.foreground)
                .add_modifier(Modifier::BOLD),
        )));
        for fragment in FRAGMENTS {
            lines.push(Line::from(Span::styled(
                *fragment,
                Style::default().fg(self.theme.necro),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        paragraph.render(inner, buf);
    }
}
