//! Main application state and logic

use std::collections::VecDeque;

use rotfield_core::{ExplorerSession, LocationId, ViewTab};

use crate::ui::theme::SwampTheme;

/// Input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - navigation and hotkeys (default)
    #[default]
    Normal,
    /// Insert mode - typing into the terminal prompt
    Insert,
}

/// Main application state
pub struct App {
    pub session: ExplorerSession,

    // UI state
    pub theme: SwampTheme,
    pub necro_sight: bool,
    pub show_help: bool,

    // Transcript display
    pub transcript_scroll: usize,
    pub scroll_locked_to_bottom: bool,

    // Input state
    pub input_mode: InputMode,
    input_buffer: String,
    cursor_position: usize,
    pub input_history: VecDeque<String>,
    pub history_index: Option<usize>,
    pub saved_input: Option<String>,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,

    // Animation (cosmetic cursor blink only)
    animation_frame: u8,
}

impl App {
    pub fn new(session: ExplorerSession) -> Self {
        Self {
            session,
            theme: SwampTheme::default(),
            necro_sight: false,
            show_help: false,
            transcript_scroll: 0,
            scroll_locked_to_bottom: true,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            input_history: VecDeque::with_capacity(100),
            history_index: None,
            saved_input: None,
            status_message: None,
            should_quit: false,
            animation_frame: 0,
        }
    }

    /// Run a submitted terminal line through the session and follow the
    /// transcript to its new bottom.
    pub fn run_command(&mut self, input: &str) {
        self.session.submit(input);
        if self.scroll_locked_to_bottom {
            self.scroll_to_bottom();
        }
    }

    /// Switch the active view tab.
    pub fn select_tab(&mut self, tab: ViewTab) {
        self.session.select_tab(tab);
    }

    /// Jump to a location by its position in the tab row (0-based).
    pub fn select_location(&mut self, index: usize) {
        if let Some(&id) = LocationId::ALL.get(index) {
            self.session.visit(id);
            let name = self.session.current_location().name.clone();
            self.set_status(name);
        } else {
            self.set_status(format!("No location at position {}", index + 1));
        }
    }

    /// Cycle to the next location in registration order.
    pub fn cycle_location(&mut self) {
        let current = self.session.location();
        let position = LocationId::ALL
            .iter()
            .position(|&id| id == current)
            .unwrap_or(0);
        let next = LocationId::ALL[(position + 1) % LocationId::ALL.len()];
        self.session.visit(next);
    }

    /// Cycle to the previous location in registration order.
    pub fn cycle_location_reverse(&mut self) {
        let current = self.session.location();
        let position = LocationId::ALL
            .iter()
            .position(|&id| id == current)
            .unwrap_or(0);
        let previous =
            LocationId::ALL[(position + LocationId::ALL.len() - 1) % LocationId::ALL.len()];
        self.session.visit(previous);
    }

    /// Toggle necromantic sight.
    pub fn toggle_sight(&mut self) {
        self.necro_sight = !self.necro_sight;
        if self.necro_sight {
            self.set_status("NECROMANTIC SIGHT ACTIVE");
        } else {
            self.clear_status();
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Scroll transcript to bottom and lock to bottom
    pub fn scroll_to_bottom(&mut self) {
        // Set to max value - the widget caps it to the actual max scroll
        self.transcript_scroll = usize::MAX / 2;
        self.scroll_locked_to_bottom = true;
    }

    /// Estimate max scroll from transcript content, assuming ~60 char
    /// effective width for wrapping
    fn estimate_max_scroll(&self) -> usize {
        const ESTIMATED_WIDTH: usize = 60;
        const ESTIMATED_VISIBLE_HEIGHT: usize = 16;

        let estimated_lines: usize = self
            .session
            .transcript()
            .lines()
            .iter()
            .map(|line| (line.text.len() / ESTIMATED_WIDTH).max(1))
            .sum();

        estimated_lines.saturating_sub(ESTIMATED_VISIBLE_HEIGHT)
    }

    /// Scroll transcript up (unlocks from bottom)
    pub fn scroll_up(&mut self, lines: usize) {
        let max_scroll = self.estimate_max_scroll();
        if self.transcript_scroll > max_scroll {
            self.transcript_scroll = max_scroll;
        }
        self.transcript_scroll = self.transcript_scroll.saturating_sub(lines);
        self.scroll_locked_to_bottom = false;
    }

    /// Scroll transcript down
    pub fn scroll_down(&mut self, lines: usize) {
        self.transcript_scroll = self.transcript_scroll.saturating_add(lines);
        let max_scroll = self.estimate_max_scroll();
        self.transcript_scroll = self.transcript_scroll.min(max_scroll + 100);
    }

    /// Scroll transcript to the top
    pub fn scroll_to_top(&mut self) {
        self.transcript_scroll = 0;
        self.scroll_locked_to_bottom = false;
    }

    /// Submit current input
    pub fn submit_input(&mut self) -> Option<String> {
        if self.input_buffer.is_empty() {
            return None;
        }

        let input = std::mem::take(&mut self.input_buffer);
        self.cursor_position = 0;

        self.input_history.push_front(input.clone());
        if self.input_history.len() > 100 {
            self.input_history.pop_back();
        }
        self.history_index = None;
        self.saved_input = None;

        Some(input)
    }

    /// Handle a typed character (unicode-safe)
    pub fn type_char(&mut self, c: char) {
        let byte_pos = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Handle backspace (unicode-safe)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position)
            {
                self.input_buffer
                    .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
            }
        }
    }

    /// Handle delete (unicode-safe)
    pub fn delete(&mut self) {
        let char_count = self.input_buffer.chars().count();
        if self.cursor_position < char_count {
            if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position)
            {
                self.input_buffer
                    .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
            }
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        self.cursor_position = (self.cursor_position + 1).min(char_count);
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to end (unicode-safe)
    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    /// Navigate to previous input in history
    pub fn history_prev(&mut self) {
        if self.input_history.is_empty() {
            return;
        }

        if self.history_index.is_none() && !self.input_buffer.is_empty() {
            self.saved_input = Some(self.input_buffer.clone());
        }

        let new_index = match self.history_index {
            None => Some(0),
            Some(i) if i + 1 < self.input_history.len() => Some(i + 1),
            Some(i) => Some(i),
        };

        if let Some(idx) = new_index {
            if let Some(entry) = self.input_history.get(idx) {
                self.input_buffer = entry.clone();
                self.cursor_position = self.input_buffer.chars().count();
                self.history_index = new_index;
            }
        }
    }

    /// Navigate to next input in history
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.input_buffer = self.saved_input.take().unwrap_or_default();
                self.cursor_position = self.input_buffer.chars().count();
                self.history_index = None;
            }
            Some(i) => {
                if let Some(entry) = self.input_history.get(i - 1) {
                    self.input_buffer = entry.clone();
                    self.cursor_position = self.input_buffer.chars().count();
                    self.history_index = Some(i - 1);
                }
            }
        }
    }

    /// Tick the blink animation. Carries no state-machine meaning.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Whether the prompt cursor is in the visible half of its blink
    /// (roughly half a second per phase at the 100ms poll cadence).
    pub fn cursor_visible(&self) -> bool {
        (self.animation_frame / 5) % 2 == 0
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // =========================================================================
    // Getters for private fields
    // =========================================================================

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Get the current input buffer
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Get the current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }
}
