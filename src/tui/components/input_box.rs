//! # InputBox Component
//!
//! Single-line worry entry field for the Idle screen.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, cursor movement)
//! - Handle submission (Enter)
//! - Display the buffer in the current theme accent
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. The accent color is a prop
//! synced from the application state before each draw.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed
    ContentChanged,
}

/// Worry entry field.
///
/// # Props
///
/// - `accent`: current theme color (from App state)
///
/// # State
///
/// - `buffer`: current text being typed
/// - `cursor_pos`: byte offset of the cursor within the buffer
pub struct InputBox {
    pub buffer: String,
    pub accent: Color,
    cursor_pos: usize,
}

impl InputBox {
    pub fn new(accent: Color) -> Self {
        Self {
            buffer: String::new(),
            accent,
            cursor_pos: 0,
        }
    }

    fn prev_char_boundary(&self) -> usize {
        self.buffer[..self.cursor_pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_char_boundary(&self) -> usize {
        self.buffer[self.cursor_pos..]
            .chars()
            .next()
            .map(|c| self.cursor_pos + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(self.accent);
        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title("worry://input")
            .border_style(style);

        let input = Paragraph::new(self.buffer.as_str()).block(block).style(style);
        frame.render_widget(input, area);

        // Cursor sits after the glyphs left of cursor_pos (one cell each).
        let cursor_col = self.buffer[..self.cursor_pos].chars().count() as u16;
        frame.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor_pos, *c);
                self.cursor_pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = self.prev_char_boundary();
                    self.buffer.drain(prev..self.cursor_pos);
                    self.cursor_pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = self.prev_char_boundary();
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor_pos < self.buffer.len() {
                    self.cursor_pos = self.next_char_boundary();
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor_pos != 0).then(|| {
                self.cursor_pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor_pos != self.buffer.len()).then(|| {
                self.cursor_pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor_pos = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new(Color::Green);
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor_pos, 0);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new(Color::Green);

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_cursor_movement_and_insert() {
        let mut input = InputBox::new(Color::Green);
        for c in "worry".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(input.buffer, "!worry");

        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::InputChar('?'));
        assert_eq!(input.buffer, "!worry?");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputBox::new(Color::Green);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_submit() {
        let mut input = InputBox::new(Color::Green);
        input.buffer = "hello".to_string();
        input.cursor_pos = 5;

        let res = input.handle_event(&TuiEvent::Submit);
        match res {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "hello"),
            _ => panic!("Expected Submit event"),
        }

        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
        assert_eq!(input.cursor_pos, 0);
    }

    #[test]
    fn test_submit_whitespace_only_is_noop() {
        let mut input = InputBox::new(Color::Green);
        input.buffer = "   ".to_string();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "   ");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputBox::new(Color::Green);
        input.handle_event(&TuiEvent::InputChar('é'));
        input.handle_event(&TuiEvent::InputChar('x'));
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorRight);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "x");
    }

    #[test]
    fn test_render_shows_buffer() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new(Color::Green);
        input.buffer = "exam stress".to_string();

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("exam stress"));
        assert!(text.contains("worry://input"));
    }
}
