//! Radial positivity dial: a semicircular ring of cells swept clockwise from
//! the left, with the rating numeral overlaid in the hollow center.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::common::{rating_color, COLOR_DIM};

/// Dial dimensions in cells
pub const DIAL_WIDTH: usize = 21;
pub const DIAL_HEIGHT: usize = 7;

// Ring band in normalized radius
const RING_INNER: f64 = 0.62;
const RING_OUTER: f64 = 1.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellState {
    /// Not part of the ring
    Outside,
    /// Ring cell beyond the current sweep
    Empty,
    /// Ring cell inside the current sweep
    Filled,
}

/// Sweep fraction shown for a rating mid-animation (ease-out cubic)
fn swept_fraction(rating: f64, anim: f64) -> f64 {
    let t = anim.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t).powi(3);
    (rating / 10.0).clamp(0.0, 1.0) * eased
}

/// Classify one dial cell for a given sweep fraction.
///
/// The dial is a half-annulus over a flat bottom edge. Cells map to polar
/// coordinates around the bottom-center; the sweep runs from the left end
/// (fraction 0) clockwise to the right end (fraction 1).
fn cell_state(col: usize, row: usize, fraction: f64) -> CellState {
    let cx = (DIAL_WIDTH - 1) as f64 / 2.0;
    let cy = (DIAL_HEIGHT - 1) as f64;

    let dx = (col as f64 - cx) / cx;
    let dy = (cy - row as f64) / cy;
    let r = (dx * dx + dy * dy).sqrt();

    if !(RING_INNER..=RING_OUTER).contains(&r) {
        return CellState::Outside;
    }

    let angle = dy.atan2(dx); // [0, pi], pi at the left end
    let swept = (std::f64::consts::PI - angle) / std::f64::consts::PI;

    if fraction > 0.0 && swept <= fraction {
        CellState::Filled
    } else {
        CellState::Empty
    }
}

/// Render the dial with its numeral into `area`.
///
/// `anim` is the sweep progress in 0.0..=1.0; both the ring and the numeral
/// count up with it.
pub fn render(frame: &mut Frame, rating: f64, anim: f64, area: Rect) {
    let fraction = swept_fraction(rating, anim);
    let color = rating_color(rating);

    let mut lines = Vec::with_capacity(DIAL_HEIGHT);
    for row in 0..DIAL_HEIGHT {
        let mut spans = Vec::with_capacity(DIAL_WIDTH);
        for col in 0..DIAL_WIDTH {
            let (glyph, style) = match cell_state(col, row, fraction) {
                CellState::Outside => (" ", Style::default()),
                CellState::Empty => ("\u{2591}", Style::default().fg(COLOR_DIM)),
                CellState::Filled => ("\u{2588}", Style::default().fg(color)),
            };
            spans.push(Span::styled(glyph, style));
        }
        lines.push(Line::from(spans));
    }

    let chunks = Layout::vertical([
        Constraint::Length(DIAL_HEIGHT as u16),
        Constraint::Length(1),
    ])
    .split(area);

    let dial = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(dial, chunks[0]);

    // Numeral overlaid in the hollow center (those cells are blank)
    if chunks[0].height >= 2 {
        let numeral_area = Rect {
            x: chunks[0].x,
            y: chunks[0].y + chunks[0].height - 2,
            width: chunks[0].width,
            height: 1,
        };
        let shown = rating * (1.0 - (1.0 - anim.clamp(0.0, 1.0)).powi(3));
        let numeral = Paragraph::new(Line::from(Span::styled(
            format!("{:.1}", shown),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(numeral, numeral_area);
    }

    let caption = Paragraph::new(Line::from(Span::styled(
        "out of 10",
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(caption, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_filled(fraction: f64) -> usize {
        let mut n = 0;
        for row in 0..DIAL_HEIGHT {
            for col in 0..DIAL_WIDTH {
                if cell_state(col, row, fraction) == CellState::Filled {
                    n += 1;
                }
            }
        }
        n
    }

    fn count_ring() -> usize {
        let mut n = 0;
        for row in 0..DIAL_HEIGHT {
            for col in 0..DIAL_WIDTH {
                if cell_state(col, row, 0.0) != CellState::Outside {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn swept_fraction_completes_at_full_anim() {
        assert!((swept_fraction(7.5, 1.0) - 0.75).abs() < 1e-9);
        assert_eq!(swept_fraction(7.5, 0.0), 0.0);
        assert!((swept_fraction(10.0, 1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_fraction_fills_nothing() {
        assert_eq!(count_filled(0.0), 0);
    }

    #[test]
    fn full_fraction_fills_every_ring_cell() {
        assert_eq!(count_filled(1.0), count_ring());
        assert!(count_ring() > 20);
    }

    #[test]
    fn fill_is_monotonic_in_fraction() {
        assert!(count_filled(0.25) <= count_filled(0.5));
        assert!(count_filled(0.5) <= count_filled(0.75));
        assert!(count_filled(0.75) <= count_filled(1.0));
        assert!(count_filled(0.5) > 0);
    }

    #[test]
    fn sweep_runs_left_to_right() {
        // Bottom-left end of the ring fills almost immediately
        assert_eq!(cell_state(0, DIAL_HEIGHT - 1, 0.05), CellState::Filled);
        // Bottom-right end only fills at the very end
        assert_eq!(cell_state(DIAL_WIDTH - 1, DIAL_HEIGHT - 1, 0.95), CellState::Empty);
        assert_eq!(cell_state(DIAL_WIDTH - 1, DIAL_HEIGHT - 1, 1.0), CellState::Filled);
    }
}
