use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::types::Screen;
use crate::ui::common::*;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match app.screen() {
        Screen::Home => &[
            ("Tab", "Focus"),
            ("\u{2190}/\u{2192}", "Select"),
            ("Enter", "Search"),
            ("Esc", "Quit"),
        ],
        Screen::Results => &[("h/Esc", "Home"), ("q", "Quit")],
        Screen::Error => &[("Enter", "Home"), ("q", "Quit")],
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{} ", action),
            Style::default().fg(COLOR_MUTED),
        ));

        if i < hints.len() - 1 {
            spans.push(Span::styled("\u{2502}", Style::default().fg(COLOR_BORDER)));
        }
    }

    // Right-align help hint
    let hints_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(hints_len + 8);
    if remaining > 0 {
        spans.push(Span::raw(" ".repeat(remaining)));
    }
    spans.push(Span::styled(" ? Help ", Style::default().fg(COLOR_DIM)));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
