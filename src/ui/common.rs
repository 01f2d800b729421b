use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

// -- Color Palette --

pub const COLOR_GOOD: Color = Color::Green;
pub const COLOR_WARN: Color = Color::Yellow;
pub const COLOR_CRIT: Color = Color::Red;
pub const COLOR_INFO: Color = Color::Cyan;
pub const COLOR_ACCENT: Color = Color::Cyan;
pub const COLOR_DIM: Color = Color::DarkGray;
pub const COLOR_MUTED: Color = Color::Gray;
pub const COLOR_BORDER: Color = Color::DarkGray;
pub const COLOR_HEADER: Color = Color::Cyan;
pub const COLOR_HIGHLIGHT_BG: Color = Color::Rgb(25, 45, 45);

/// Fixed cycle of word-cloud colors; position in the cloud list picks the entry
pub const CLOUD_PALETTE: [Color; 11] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::LightBlue,
    Color::LightRed,
    Color::LightGreen,
    Color::LightMagenta,
    Color::LightYellow,
    Color::Blue,
    Color::Red,
];

pub fn cloud_color(position: usize) -> Color {
    CLOUD_PALETTE[position % CLOUD_PALETTE.len()]
}

/// Color for a 0-10 positivity rating
pub fn rating_color(rating: f64) -> Color {
    if rating >= 7.0 {
        COLOR_GOOD
    } else if rating >= 4.0 {
        COLOR_WARN
    } else {
        COLOR_CRIT
    }
}

/// Spinner frames for the loading state
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// -- Formatters --

/// Format a count with thousands separators (e.g., "12,345")
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn truncate_str(s: &str, max: usize) -> String {
    if max < 3 {
        return s.chars().take(max).collect();
    }
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 2).collect();
        format!("{}..", truncated)
    }
}

/// Section header line
pub fn section_header<'a>(title: &str) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Separator line
pub fn separator(width: usize) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", "\u{2500}".repeat(width.saturating_sub(4))),
        Style::default().fg(COLOR_DIM),
    ))
}

/// Labelled key/value stat line
pub fn stat_line<'a>(label: &str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloud_palette_cycles_by_position() {
        assert_eq!(cloud_color(0), CLOUD_PALETTE[0]);
        assert_eq!(cloud_color(10), CLOUD_PALETTE[10]);
        assert_eq!(cloud_color(11), CLOUD_PALETTE[0]);
        assert_eq!(cloud_color(23), CLOUD_PALETTE[1]);
    }

    #[test]
    fn format_count_inserts_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a very long name", 10), "a very l..");
        assert_eq!(truncate_str("abc", 2), "ab");
    }

    #[test]
    fn rating_color_tiers() {
        assert_eq!(rating_color(9.0), COLOR_GOOD);
        assert_eq!(rating_color(7.0), COLOR_GOOD);
        assert_eq!(rating_color(5.5), COLOR_WARN);
        assert_eq!(rating_color(2.0), COLOR_CRIT);
    }
}
