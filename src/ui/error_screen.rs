use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::common::{COLOR_CRIT, COLOR_DIM};

pub fn render(frame: &mut Frame, area: Rect) {
    // Center the notice box
    let [center_y] = Layout::vertical([Constraint::Length(11)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(58)])
        .flex(Flex::Center)
        .areas(center_y);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_CRIT))
        .title_alignment(Alignment::Center);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "SOMETHING WENT WRONG",
            Style::default()
                .fg(COLOR_CRIT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "POV couldn't fetch opinions for that search.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "The service may be unreachable, or the category had no data.",
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to return Home.", Style::default().fg(COLOR_DIM)),
        ]),
        Line::from(Span::styled("q to quit.", Style::default().fg(COLOR_DIM))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, center);
}
