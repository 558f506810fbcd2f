//! Per-phase screen dispatch and shared chrome.
//!
//! One bordered "terminal" block owns the whole frame; which body renders
//! inside it depends on the phase. Every style flows from the current
//! theme accent.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::{App, Phase};
use crate::core::theme;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ProcessingScreen, ResultScreen};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, frame_index: usize) {
    use Constraint::{Length, Min};

    let accent = theme::accent_color(&app.theme_color);
    let style = Style::default().fg(accent);

    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    // Title bar
    let title_text = format!(
        "purgecache (model: {}) | {}",
        app.model_name,
        phase_label(app.phase)
    );
    frame.render_widget(Span::styled(title_text, style), title_area);

    // Outer terminal frame
    let block = Block::bordered()
        .title("// PURGE_CACHE")
        .border_style(style)
        .title_style(style.add_modifier(Modifier::BOLD));
    let inner = block.inner(main_area);
    frame.render_widget(block, main_area);

    match app.phase {
        Phase::Idle => draw_idle(frame, inner, style, tui),
        Phase::Processing => {
            ProcessingScreen::new(accent, frame_index).render(frame, inner);
        }
        Phase::Purged => {
            // Purged without a result only exists transiently; render the
            // frame chrome and nothing else.
            if let Some(diagnostic) = &app.result {
                ResultScreen::new(diagnostic, accent).render(frame, inner);
            }
        }
    }
}

fn draw_idle(frame: &mut Frame, area: Rect, style: Style, tui: &mut TuiState) {
    use Constraint::Length;

    let [centered] = Layout::vertical([Length(7)]).flex(Flex::Center).areas(area);
    let [header, prompt, input, hint] = Layout::vertical([
        Length(1),
        Length(1),
        Length(3),
        Length(2),
    ])
    .areas(centered);

    frame.render_widget(
        Paragraph::new("system@mind:~$ ./init_purge_sequence").style(style.add_modifier(Modifier::DIM)),
        header,
    );
    frame.render_widget(
        Paragraph::new("Identify corrupted memory segment:").style(style),
        prompt,
    );
    tui.input_box.render(frame, input);
    frame.render_widget(
        Paragraph::new("[ ENTER TO EXECUTE DELETE ]")
            .style(style.add_modifier(Modifier::DIM))
            .alignment(ratatui::layout::Alignment::Center),
        hint,
    );
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "IDLE",
        Phase::Processing => "PROCESSING",
        Phase::Purged => "PURGED",
    }
}
