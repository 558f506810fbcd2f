//! # Result Screen Component
//!
//! Shown in the Purged phase: the detected load, the patch sentence, and
//! the reboot hint. Purely presentational: the diagnostic arrives as a
//! prop and the reboot key is handled by the event loop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::generation::Diagnostic;
use crate::tui::component::Component;

pub struct ResultScreen<'a> {
    pub diagnostic: &'a Diagnostic,
    pub accent: ratatui::style::Color,
}

impl<'a> ResultScreen<'a> {
    pub fn new(diagnostic: &'a Diagnostic, accent: ratatui::style::Color) -> Self {
        Self { diagnostic, accent }
    }
}

impl Component for ResultScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(self.accent);
        let dim = style.add_modifier(Modifier::DIM);

        let lines = vec![
            Line::from(Span::styled(
                format!("> SYSTEM LOAD DETECTED: {}", self.diagnostic.load),
                style,
            )),
            Line::default(),
            Line::from(Span::styled("PATCH APPLIED:", style.add_modifier(Modifier::BOLD))),
            Line::default(),
            Line::from(Span::styled(
                self.diagnostic.patch.clone(),
                style.add_modifier(Modifier::BOLD | Modifier::ITALIC),
            )),
            Line::default(),
            Line::from(Span::styled("> MEMORY SEGMENT CLEARED.", dim)),
            Line::from(Span::styled("> RAM OPTIMIZED.", dim)),
            Line::default(),
            Line::from(Span::styled("[ ENTER TO REBOOT SYSTEM ]", style)),
        ];

        // Height budget: fixed lines plus wrap room for a long patch.
        let height = (lines.len() as u16 + 2).min(area.height);
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    #[test]
    fn test_render_shows_diagnostic_fields() {
        let diagnostic = Diagnostic {
            load: "78%".to_string(),
            patch: "The exam is a single data point.".to_string(),
            color: "#aa55ff".to_string(),
        };
        let backend = TestBackend::new(70, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut screen = ResultScreen::new(&diagnostic, Color::Green);

        terminal
            .draw(|f| {
                screen.render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("SYSTEM LOAD DETECTED: 78%"));
        assert!(text.contains("PATCH APPLIED:"));
        assert!(text.contains("The exam is a single data point."));
        assert!(text.contains("REBOOT SYSTEM"));
    }
}
