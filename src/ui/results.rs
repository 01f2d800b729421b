use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::api::model::{Opinion, Stats};
use crate::app::{App, Phase, ResultsState};
use crate::types::SearchRequest;
use crate::ui::common::*;
use crate::ui::{wheel, word_cloud};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(results) = &app.results else {
        return;
    };

    match &results.phase {
        Phase::Loading => render_loading(frame, results, area),
        Phase::Ready(opinion) => render_ready(frame, results, opinion, area),
    }
}

fn render_loading(frame: &mut Frame, results: &ResultsState, area: Rect) {
    let [center_y] = Layout::vertical([Constraint::Length(4)])
        .flex(Flex::Center)
        .areas(area);

    let spinner = SPINNER_FRAMES[results.spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                format!("  Gauging public opinion on \"{}\"", results.request.query),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("category: {}", results.request.category.label()),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_y);
}

fn render_ready(frame: &mut Frame, results: &ResultsState, opinion: &Opinion, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Title
            Constraint::Length(9),  // Wheel + comments
            Constraint::Min(5),     // Stats block (+ word cloud)
        ])
        .split(area);

    render_result_title(frame, &results.request, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(30)])
        .split(chunks[1]);

    wheel::render(frame, opinion.rating, results.wheel_anim, columns[0]);
    render_comments(frame, opinion, columns[1]);
    render_stats(frame, &results.request, opinion, chunks[2]);
}

fn render_result_title(frame: &mut Frame, request: &SearchRequest, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("  {}", request.query),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  \u{2022}  {}", request.category.label()),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        separator(area.width as usize),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_comments(frame: &mut Frame, opinion: &Opinion, area: Rect) {
    let lines = vec![
        section_header("MOST POPULAR COMMENT"),
        Line::from(Span::styled(
            format!("  {}", opinion.popular_comment),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        section_header("MOST RECENT COMMENT"),
        Line::from(Span::styled(
            format!("  {}", opinion.recent_comment),
            Style::default().fg(Color::White),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Stats block dispatch: one variant, one layout
fn render_stats(frame: &mut Frame, request: &SearchRequest, opinion: &Opinion, area: Rect) {
    let source = request.category.source();
    let source_value = format!("{} \u{2014} {}", source.label(), source.site_url());

    match &opinion.stats {
        Stats::Product { total_reviews } => {
            let lines = vec![
                separator(area.width as usize),
                section_header("PRODUCT REVIEWS"),
                stat_line("Reviews analysed", &format_count(*total_reviews)),
                stat_line("Data source", &source_value),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        Stats::Movie { rating_count, peak_rank } => {
            let lines = vec![
                separator(area.width as usize),
                section_header("MOVIE RATINGS"),
                stat_line("Ratings counted", &format_count(*rating_count)),
                stat_line("Peak rank", &format!("#{}", peak_rank)),
                stat_line("Data source", &source_value),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        Stats::Social { total_reviews, cloud } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(2)])
                .split(area);

            let lines = vec![
                separator(area.width as usize),
                section_header("SOCIAL CHATTER"),
                stat_line("Posts analysed", &format_count(*total_reviews)),
                stat_line("Data source", &source_value),
            ];
            frame.render_widget(Paragraph::new(lines), chunks[0]);

            word_cloud::render(frame, cloud, chunks[1]);
        }
    }
}
