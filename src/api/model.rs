use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::types::{Category, SourceSite};

/// Success sentinel in the backend's status field
const STATUS_OK: &str = "200";

/// Position of the popular comment inside the reviews list
const POPULAR_INDEX: usize = 0;
/// Position of the recent comment inside the reviews list
const RECENT_INDEX: usize = 3;

/// Raw response body from the results endpoint.
///
/// Numeric fields arrive as strings; the optional fields are present per
/// category group (see `decode`).
#[derive(Debug, Clone, Deserialize)]
pub struct RawResult {
    pub status: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub reviews: Option<Vec<String>>,
    #[serde(default)]
    pub total_reviews: Option<String>,
    #[serde(default)]
    pub rating_count: Option<String>,
    #[serde(default)]
    pub peak_rank: Option<String>,
    #[serde(default)]
    pub word_bubble: Option<Vec<(String, f64)>>,
}

/// A decoded opinion result, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct Opinion {
    /// Positivity rating on a 0–10 scale
    pub rating: f64,
    pub popular_comment: String,
    pub recent_comment: String,
    pub stats: Stats,
}

/// Category-group statistics, one variant per stats block
#[derive(Debug, Clone, PartialEq)]
pub enum Stats {
    Product {
        total_reviews: u64,
    },
    Movie {
        rating_count: u64,
        peak_rank: u64,
    },
    Social {
        total_reviews: u64,
        cloud: Vec<CloudWord>,
    },
}

/// One weighted keyword in the cloud. Display color is assigned by list
/// position at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudWord {
    pub keyword: String,
    pub frequency: f64,
}

/// Decode a raw body for `category`.
///
/// Checks the status sentinel, then dispatches once on the category group to
/// produce the matching `Stats` variant. Missing or unparseable fields come
/// back as `MalformedPayload`.
pub fn decode(category: Category, raw: &RawResult) -> Result<Opinion> {
    if raw.status != STATUS_OK {
        return Err(AppError::status(raw.status.clone()));
    }

    let rating = parse_f64(raw.rating.as_deref(), "rating")?.clamp(0.0, 10.0);
    let (popular_comment, recent_comment) = extract_comments(raw)?;

    let stats = match category.source() {
        SourceSite::Amazon => Stats::Product {
            total_reviews: parse_u64(raw.total_reviews.as_deref(), "total_reviews")?,
        },
        SourceSite::Imdb => Stats::Movie {
            rating_count: parse_u64(raw.rating_count.as_deref(), "rating_count")?,
            peak_rank: parse_u64(raw.peak_rank.as_deref(), "peak_rank")?,
        },
        SourceSite::Reddit | SourceSite::Twitter => Stats::Social {
            total_reviews: parse_u64(raw.total_reviews.as_deref(), "total_reviews")?,
            cloud: build_cloud(raw)?,
        },
    };

    Ok(Opinion {
        rating,
        popular_comment,
        recent_comment,
        stats,
    })
}

fn extract_comments(raw: &RawResult) -> Result<(String, String)> {
    let reviews = raw
        .reviews
        .as_deref()
        .ok_or(AppError::malformed("reviews"))?;
    let popular = reviews
        .get(POPULAR_INDEX)
        .ok_or(AppError::malformed("reviews[0]"))?;
    let recent = reviews
        .get(RECENT_INDEX)
        .ok_or(AppError::malformed("reviews[3]"))?;
    Ok((capitalize(popular), capitalize(recent)))
}

/// Build the word cloud list in one pass.
///
/// The entry at index 0 is always skipped: the backend emits a placeholder
/// pair there.
fn build_cloud(raw: &RawResult) -> Result<Vec<CloudWord>> {
    let pairs = raw
        .word_bubble
        .as_deref()
        .ok_or(AppError::malformed("word_bubble"))?;
    Ok(pairs
        .iter()
        .skip(1)
        .map(|(keyword, frequency)| CloudWord {
            keyword: keyword.clone(),
            frequency: *frequency,
        })
        .collect())
}

/// Uppercase the first letter, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parse_f64(value: Option<&str>, field: &'static str) -> Result<f64> {
    value
        .ok_or(AppError::malformed(field))?
        .trim()
        .parse()
        .map_err(|_| AppError::malformed(field))
}

fn parse_u64(value: Option<&str>, field: &'static str) -> Result<u64> {
    value
        .ok_or(AppError::malformed(field))?
        .trim()
        .parse()
        .map_err(|_| AppError::malformed(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn decodes_product_result() {
        let raw = raw(json!({
            "status": "200",
            "rating": "7.5",
            "reviews": ["a", "b", "c", "d"],
            "total_reviews": "42",
        }));
        let opinion = decode(Category::Product, &raw).unwrap();
        assert_eq!(opinion.rating, 7.5);
        assert_eq!(opinion.popular_comment, "A");
        assert_eq!(opinion.recent_comment, "D");
        assert_eq!(opinion.stats, Stats::Product { total_reviews: 42 });
    }

    #[test]
    fn decodes_movie_result() {
        let raw = raw(json!({
            "status": "200",
            "rating": "8.1",
            "reviews": ["great film", "ok", "meh", "stunning visuals"],
            "rating_count": "1000",
            "peak_rank": "3",
        }));
        let opinion = decode(Category::Movie, &raw).unwrap();
        assert_eq!(opinion.popular_comment, "Great film");
        assert_eq!(opinion.recent_comment, "Stunning visuals");
        assert_eq!(
            opinion.stats,
            Stats::Movie {
                rating_count: 1000,
                peak_rank: 3
            }
        );
    }

    #[test]
    fn social_cloud_drops_first_pair() {
        let raw = raw(json!({
            "status": "200",
            "rating": "6.0",
            "reviews": ["w", "x", "y", "z"],
            "total_reviews": "15",
            "word_bubble": [["x", 1], ["trend", 9], ["topic", 4]],
        }));
        let opinion = decode(Category::Music, &raw).unwrap();
        let Stats::Social { total_reviews, cloud } = opinion.stats else {
            panic!("expected social stats");
        };
        assert_eq!(total_reviews, 15);
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud[0].keyword, "trend");
        assert_eq!(cloud[0].frequency, 9.0);
        assert_eq!(cloud[1].keyword, "topic");
        assert_eq!(cloud[1].frequency, 4.0);
    }

    #[test]
    fn single_entry_bubble_yields_empty_cloud() {
        let raw = raw(json!({
            "status": "200",
            "rating": "5.0",
            "reviews": ["a", "b", "c", "d"],
            "total_reviews": "1",
            "word_bubble": [["placeholder", 1]],
        }));
        let opinion = decode(Category::Travel, &raw).unwrap();
        let Stats::Social { cloud, .. } = opinion.stats else {
            panic!("expected social stats");
        };
        assert!(cloud.is_empty());
    }

    #[test]
    fn non_success_status_is_rejected() {
        let raw = raw(json!({ "status": "503" }));
        let err = decode(Category::Product, &raw).unwrap_err();
        assert!(matches!(err, AppError::Status { status } if status == "503"));
    }

    #[test]
    fn missing_reviews_is_malformed() {
        let raw = raw(json!({
            "status": "200",
            "rating": "7.0",
            "total_reviews": "9",
        }));
        let err = decode(Category::Product, &raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload { field: "reviews" }));
    }

    #[test]
    fn short_reviews_list_is_malformed() {
        let raw = raw(json!({
            "status": "200",
            "rating": "7.0",
            "reviews": ["only", "three", "entries"],
            "total_reviews": "9",
        }));
        let err = decode(Category::Product, &raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload { field: "reviews[3]" }));
    }

    #[test]
    fn unparseable_rating_is_malformed() {
        let raw = raw(json!({
            "status": "200",
            "rating": "NaN%",
            "reviews": ["a", "b", "c", "d"],
            "total_reviews": "9",
        }));
        let err = decode(Category::Product, &raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload { field: "rating" }));
    }

    #[test]
    fn missing_cloud_fields_are_malformed() {
        let raw = raw(json!({
            "status": "200",
            "rating": "6.0",
            "reviews": ["a", "b", "c", "d"],
            "total_reviews": "15",
        }));
        let err = decode(Category::Politics, &raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload { field: "word_bubble" }));
    }

    #[test]
    fn rating_is_clamped_to_scale() {
        let raw = raw(json!({
            "status": "200",
            "rating": "14.2",
            "reviews": ["a", "b", "c", "d"],
            "total_reviews": "9",
        }));
        let opinion = decode(Category::Product, &raw).unwrap();
        assert_eq!(opinion.rating, 10.0);
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("already Upper"), "Already Upper");
        assert_eq!(capitalize("1st"), "1st");
    }
}
