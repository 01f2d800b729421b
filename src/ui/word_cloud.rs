use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::api::model::CloudWord;
use crate::ui::common::{cloud_color, COLOR_DIM};

/// Emphasis tier for a keyword relative to the cloud's peak frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Large,
    Medium,
    Small,
}

fn tier(frequency: f64, peak: f64) -> Tier {
    if peak <= 0.0 {
        return Tier::Small;
    }
    let ratio = frequency / peak;
    if ratio >= 0.66 {
        Tier::Large
    } else if ratio >= 0.33 {
        Tier::Medium
    } else {
        Tier::Small
    }
}

/// Flow keywords into rows no wider than `width`, preserving list order.
/// Returns rows of indexes into `cloud`.
fn flow(cloud: &[CloudWord], width: usize) -> Vec<Vec<usize>> {
    let mut rows = Vec::new();
    let mut row: Vec<usize> = Vec::new();
    let mut used = 0usize;

    for (i, word) in cloud.iter().enumerate() {
        let needed = word.keyword.chars().count() + 2;
        if !row.is_empty() && used + needed > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        row.push(i);
        used += needed;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// Render the weighted keyword cloud. Color cycles by list position;
/// emphasis scales with frequency relative to the cloud's peak.
pub fn render(frame: &mut Frame, cloud: &[CloudWord], area: Rect) {
    if cloud.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No trending keywords",
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let peak = cloud.iter().map(|w| w.frequency).fold(0.0_f64, f64::max);
    let width = area.width.saturating_sub(4) as usize;

    let lines: Vec<Line> = flow(cloud, width.max(8))
        .into_iter()
        .map(|row| {
            let mut spans = Vec::new();
            for i in row {
                let word = &cloud[i];
                let style = match tier(word.frequency, peak) {
                    Tier::Large => Style::default()
                        .fg(cloud_color(i))
                        .add_modifier(Modifier::BOLD),
                    Tier::Medium => Style::default().fg(cloud_color(i)),
                    Tier::Small => Style::default().fg(cloud_color(i)).add_modifier(Modifier::DIM),
                };
                spans.push(Span::styled(word.keyword.clone(), style));
                spans.push(Span::raw("  "));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
