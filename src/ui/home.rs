use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::data::TRENDING;
use crate::types::Category;
use crate::ui::common::*;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Length(3), // Search bar
            Constraint::Length(3), // Category row
            Constraint::Min(7),    // Trending carousel
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_search_bar(frame, app, chunks[1]);
    render_categories(frame, app, chunks[2]);
    render_trending(frame, app, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "P  O  V",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "What does the internet really think?",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER)
    }
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.home.focus == Focus::Search;

    let [centered] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_border(focused))
        .title(" Search ");

    let mut spans = vec![Span::styled(
        format!(" {}", app.home.query),
        Style::default().fg(Color::White),
    )];
    if focused {
        spans.push(Span::styled("\u{258c}", Style::default().fg(COLOR_ACCENT)));
    } else if app.home.query.is_empty() {
        spans.push(Span::styled(
            " type a product, movie, or topic",
            Style::default().fg(COLOR_DIM),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, centered);
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.home.focus == Focus::Categories;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_border(focused))
        .title(" Category ");

    let mut spans = Vec::new();
    for (i, category) in Category::ALL.iter().enumerate() {
        let selected = app.home.category_index == Some(i);

        let style = if selected {
            Style::default()
                .fg(COLOR_ACCENT)
                .bg(COLOR_HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        spans.push(Span::styled(format!(" {} ", category.label()), style));

        if i < Category::ALL.len() - 1 {
            spans.push(Span::styled("\u{2502}", Style::default().fg(COLOR_BORDER)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_trending(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.home.focus == Focus::Trending;
    let item = &TRENDING[app.home.trending_index % TRENDING.len()];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_border(focused))
        .title(" Trending ");

    let arrow_style = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("\u{25c0}   ", arrow_style),
            Span::styled(
                item.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   \u{25b6}", arrow_style),
        ]),
        Line::from(Span::styled(
            item.category.label(),
            Style::default().fg(item.accent),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}/{}  \u{2022}  Enter to view opinions",
                (app.home.trending_index % TRENDING.len()) + 1,
                TRENDING.len()
            ),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Blocking validation alert, drawn over the whole screen
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let [center_y] = Layout::vertical([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(56)])
        .flex(Flex::Center)
        .areas(center_y);

    frame.render_widget(Clear, center);

    let block = Block::default()
        .title(" Search Error! ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_WARN));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(COLOR_WARN)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, center);
}
