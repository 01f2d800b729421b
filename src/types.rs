/// The navigable screens, kept as a stack (Home is always the root)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Results,
    Error,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Results => "Results",
            Self::Error => "Error",
        }
    }
}

/// The 8 fixed search categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Celebrity,
    Game,
    Movie,
    Music,
    Politics,
    Product,
    Sport,
    Travel,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Celebrity,
        Self::Game,
        Self::Movie,
        Self::Music,
        Self::Politics,
        Self::Product,
        Self::Sport,
        Self::Travel,
    ];

    /// Parse user input. Trims and lowercases before matching.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "celebrity" => Some(Self::Celebrity),
            "game" => Some(Self::Game),
            "movie" => Some(Self::Movie),
            "music" => Some(Self::Music),
            "politics" => Some(Self::Politics),
            "product" => Some(Self::Product),
            "sport" => Some(Self::Sport),
            "travel" => Some(Self::Travel),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Celebrity => "Celebrity",
            Self::Game => "Game",
            Self::Movie => "Movie",
            Self::Music => "Music",
            Self::Politics => "Politics",
            Self::Product => "Product",
            Self::Sport => "Sport",
            Self::Travel => "Travel",
        }
    }

    /// Path segment used in the results URL
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Celebrity => "celebrity",
            Self::Game => "game",
            Self::Movie => "movie",
            Self::Music => "music",
            Self::Politics => "politics",
            Self::Product => "product",
            Self::Sport => "sport",
            Self::Travel => "travel",
        }
    }

    /// The upstream site the backend aggregates for this category
    pub fn source(&self) -> SourceSite {
        match self {
            Self::Product => SourceSite::Amazon,
            Self::Movie => SourceSite::Imdb,
            Self::Game | Self::Music | Self::Sport | Self::Travel => SourceSite::Reddit,
            Self::Celebrity | Self::Politics => SourceSite::Twitter,
        }
    }

}

/// Upstream data source shown in the stats block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSite {
    Amazon,
    Imdb,
    Reddit,
    Twitter,
}

impl SourceSite {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::Imdb => "IMDB",
            Self::Reddit => "Reddit",
            Self::Twitter => "Twitter",
        }
    }

    pub fn site_url(&self) -> &'static str {
        match self {
            Self::Amazon => "https://www.amazon.com",
            Self::Imdb => "https://www.imdb.com",
            Self::Reddit => "https://www.reddit.com",
            Self::Twitter => "https://www.twitter.com",
        }
    }
}

/// A validated, normalized search carried from Home into Results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub category: Category,
}

impl SearchRequest {
    /// Build from raw input. Returns None when the trimmed query is empty.
    pub fn new(query: &str, category: Category) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(Self {
            query: query.to_string(),
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        assert_eq!(Category::parse("  Movie "), Some(Category::Movie));
        assert_eq!(Category::parse("PRODUCT"), Some(Category::Product));
        assert_eq!(Category::parse("sport"), Some(Category::Sport));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Category::parse("books"), None);
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("   "), None);
    }

    #[test]
    fn source_grouping() {
        assert_eq!(Category::Product.source(), SourceSite::Amazon);
        assert_eq!(Category::Movie.source(), SourceSite::Imdb);
        for c in [Category::Game, Category::Music, Category::Sport, Category::Travel] {
            assert_eq!(c.source(), SourceSite::Reddit);
        }
        for c in [Category::Celebrity, Category::Politics] {
            assert_eq!(c.source(), SourceSite::Twitter);
        }
    }

    #[test]
    fn search_request_trims_query() {
        let req = SearchRequest::new("  dune  ", Category::Movie).unwrap();
        assert_eq!(req.query, "dune");
    }

    #[test]
    fn search_request_rejects_blank_query() {
        assert!(SearchRequest::new("", Category::Movie).is_none());
        assert!(SearchRequest::new("   ", Category::Movie).is_none());
    }
}
