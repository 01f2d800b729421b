use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::types::Screen;
use crate::ui::common::*;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = " POV \u{2014} Public Opinion Viewer";

    // Screen badge
    let badge_bg = match app.screen() {
        Screen::Home => COLOR_GOOD,
        Screen::Results => COLOR_INFO,
        Screen::Error => COLOR_CRIT,
    };

    // Right side: screen badge + clock
    let now = clock_time();
    let badge_text = format!(" {} ", app.screen().label());
    let clock_text = format!("  {}", now);
    let left_len = title.chars().count();
    let right_len = badge_text.chars().count() + clock_text.chars().count();
    let pad_len = (area.width as usize).saturating_sub(left_len + right_len);

    let title_line = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad_len)),
        Span::styled(
            badge_text,
            Style::default()
                .fg(Color::Rgb(20, 20, 20))
                .bg(badge_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(clock_text, Style::default().fg(COLOR_MUTED)),
    ]);

    let separator_line = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(COLOR_BORDER),
    ));

    let paragraph = Paragraph::new(vec![title_line, separator_line]);
    frame.render_widget(paragraph, area);
}

/// Get current time as HH:MM:SS (without chrono dependency)
fn clock_time() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let secs_of_day = secs % 86400;
    let h = secs_of_day / 3600;
    let m = (secs_of_day % 3600) / 60;
    let s = secs_of_day % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}
