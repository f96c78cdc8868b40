//! Terminal prompt widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::SwampTheme;

/// The command prompt at the foot of the terminal view
pub struct PromptWidget<'a> {
    content: &'a str,
    cursor_position: usize,
    theme: &'a SwampTheme,
    placeholder: &'a str,
    is_active: bool,
    cursor_visible: bool,
}

impl<'a> PromptWidget<'a> {
    pub fn new(content: &'a str, theme: &'a SwampTheme) -> Self {
        Self {
            content,
            cursor_position: content.len(),
            theme,
            placeholder: "Type a command...",
            is_active: false,
            cursor_visible: true,
        }
    }

    pub fn cursor_position(mut self, pos: usize) -> Self {
        self.cursor_position = pos;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Blink phase; the cursor only renders in the visible half.
    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }
}

impl Widget for PromptWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.is_active));

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.content.is_empty() && !self.is_active {
            Line::from(vec![
                Span::styled("> ", self.theme.prompt_style()),
                Span::styled(
                    self.placeholder,
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ])
        } else {
            // Character-based slicing for unicode safety
            let before_cursor: String = self.content.chars().take(self.cursor_position).collect();
            let at_cursor = self
                .content
                .chars()
                .nth(self.cursor_position)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let char_count = self.content.chars().count();
            let after_cursor = if self.cursor_position < char_count {
                self.content
                    .chars()
                    .skip(self.cursor_position + 1)
                    .collect::<String>()
            } else {
                String::new()
            };

            let cursor_style = if self.is_active && self.cursor_visible {
                Style::default()
                    .add_modifier(Modifier::REVERSED)
                    .fg(self.theme.output)
            } else {
                self.theme.output_style()
            };

            Line::from(vec![
                Span::styled("> ", self.theme.prompt_style()),
                Span::styled(before_cursor, self.theme.output_style()),
                Span::styled(at_cursor, cursor_style),
                Span::styled(after_cursor, self.theme.output_style()),
            ])
        };

        let paragraph = Paragraph::new(line);
        paragraph.render(inner, buf);
    }
}
