use ratatui::style::Color;

use crate::types::Category;

/// A preset search shortcut surfaced on the Home carousel
#[derive(Debug, Clone, Copy)]
pub struct TrendingItem {
    pub title: &'static str,
    pub category: Category,
    /// Card accent color, standing in for the splash image
    pub accent: Color,
}

/// Trending shortcuts, loaded once and never mutated
pub const TRENDING: [TrendingItem; 7] = [
    TrendingItem {
        title: "PlayStation 5",
        category: Category::Product,
        accent: Color::Blue,
    },
    TrendingItem {
        title: "Dune",
        category: Category::Movie,
        accent: Color::Yellow,
    },
    TrendingItem {
        title: "Fine Gael",
        category: Category::Politics,
        accent: Color::Green,
    },
    TrendingItem {
        title: "Pokemon",
        category: Category::Game,
        accent: Color::Red,
    },
    TrendingItem {
        title: "Adele",
        category: Category::Music,
        accent: Color::Magenta,
    },
    TrendingItem {
        title: "Australian Open",
        category: Category::Sport,
        accent: Color::Cyan,
    },
    TrendingItem {
        title: "Italy",
        category: Category::Travel,
        accent: Color::LightGreen,
    },
];
