use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame, area: Rect) {
    let [center_y] = Layout::vertical([Constraint::Length(20)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(50)])
        .flex(Flex::Center)
        .areas(center_y);

    // Clear the area behind the overlay
    frame.render_widget(Clear, center);

    let block = Block::default()
        .title(" Help \u{2014} Keybindings ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Home",
            Style::default().fg(Color::Yellow),
        )),
        help_line("Tab", "Cycle focus (search / category / trending)"),
        help_line("type", "Edit the search term"),
        help_line("\u{2190} / \u{2192}", "Pick category or trending card"),
        help_line("Enter", "Search"),
        help_line("Esc", "Leave search bar, or quit"),
        Line::from(""),
        Line::from(Span::styled(
            " Results",
            Style::default().fg(Color::Yellow),
        )),
        help_line("h / Esc", "Back to Home"),
        Line::from(""),
        Line::from(Span::styled(
            " Error",
            Style::default().fg(Color::Yellow),
        )),
        help_line("Enter", "Return Home"),
        Line::from(""),
        help_line("q", "Quit"),
        help_line("Ctrl+C", "Quit to shell"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, center);
}

fn help_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:>9}  ", key),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
