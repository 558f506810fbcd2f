//! # Processing Screen Component
//!
//! Indeterminate multi-line status indicator shown while the generation
//! request is in flight. Lines appear one by one and the last visible line
//! carries a spinner, driven by the frame index from the event loop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const STATUS_LINES: [&str; 3] = [
    "> ANALYZING SYSTEM LOAD...",
    "> DEFRAGMENTING EMOTIONS...",
    "> CONNECTING TO CORE...",
];

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// How many animation frames each status line stays "current" before the
/// next one appears.
const FRAMES_PER_LINE: usize = 8;

pub struct ProcessingScreen {
    pub accent: ratatui::style::Color,
    pub frame_index: usize,
}

impl ProcessingScreen {
    pub fn new(accent: ratatui::style::Color, frame_index: usize) -> Self {
        Self { accent, frame_index }
    }
}

impl Component for ProcessingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(self.accent);
        let revealed = (self.frame_index / FRAMES_PER_LINE + 1).min(STATUS_LINES.len());
        let spinner = SPINNER[self.frame_index % SPINNER.len()];

        let mut lines: Vec<Line> = Vec::with_capacity(STATUS_LINES.len());
        for (i, text) in STATUS_LINES.iter().enumerate().take(revealed) {
            let is_current = i == revealed - 1;
            if is_current {
                lines.push(Line::from(vec![
                    Span::styled(*text, style.add_modifier(Modifier::BOLD)),
                    Span::styled(format!(" {spinner}"), style),
                ]));
            } else {
                lines.push(Line::from(Span::styled(*text, style)));
            }
        }

        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}
