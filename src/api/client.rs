use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::model::{self, Opinion, RawResult};
use crate::error::{AppError, Result};
use crate::types::SearchRequest;

/// POV results endpoint used when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://louissullivcs.pythonanywhere.com/pov/results";

/// Separator joining query words inside the term path segment
const WORD_SEPARATOR: &str = "+";

/// HTTP client for the POV results endpoint
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client with an explicit request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::config(format!("base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::config(format!(
                "base URL {base_url} cannot carry path segments"
            )));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// URL for one search: query words joined with `+`, then the category,
    /// appended as two percent-encoded path segments.
    pub fn result_url(&self, request: &SearchRequest) -> Url {
        let term = request
            .query
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(WORD_SEPARATOR);

        let mut url = self.base_url.clone();
        // Base is validated in new(), so segments are always available
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&term)
                .push(request.category.slug());
        }
        url
    }

    /// Fetch and decode one result.
    ///
    /// Transport failures, non-success HTTP statuses, JSON failures, and bad
    /// payloads all come back as errors; callers surface them uniformly.
    pub async fn fetch(&self, request: &SearchRequest) -> Result<Opinion> {
        let url = self.result_url(request);
        tracing::debug!(%url, category = request.category.slug(), "fetching result");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let raw: RawResult = response.json().await?;
        let opinion = model::decode(request.category, &raw)?;

        tracing::debug!(rating = opinion.rating, "result decoded");
        Ok(opinion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    fn request(query: &str, category: Category) -> SearchRequest {
        SearchRequest::new(query, category).unwrap()
    }

    #[test]
    fn joins_query_words_with_plus() {
        let url = client("https://example.com/pov/results")
            .result_url(&request("iphone 13 pro", Category::Product));
        assert_eq!(
            url.as_str(),
            "https://example.com/pov/results/iphone+13+pro/product"
        );
    }

    #[test]
    fn single_word_query_is_unchanged() {
        let url = client("https://example.com/pov/results")
            .result_url(&request("dune", Category::Movie));
        assert_eq!(url.as_str(), "https://example.com/pov/results/dune/movie");
    }

    #[test]
    fn trailing_slash_in_base_does_not_double() {
        let url = client("https://example.com/pov/results/")
            .result_url(&request("adele", Category::Music));
        assert_eq!(url.as_str(), "https://example.com/pov/results/adele/music");
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let url = client("https://example.com/pov/results")
            .result_url(&request("ac/dc", Category::Music));
        assert_eq!(url.as_str(), "https://example.com/pov/results/ac%2Fdc/music");
    }

    #[test]
    fn collapses_repeated_whitespace() {
        let url = client("https://example.com/pov/results")
            .result_url(&request("australian   open", Category::Sport));
        assert_eq!(
            url.as_str(),
            "https://example.com/pov/results/australian+open/sport"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(ApiClient::new("not a url", Duration::from_secs(5)).is_err());
        assert!(ApiClient::new("data:text/plain,x", Duration::from_secs(5)).is_err());
    }
}
