// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the TMDB v3 listing endpoints.
//!
//! Every request is bearer-authenticated and asks for the first page only.
//! The client is cheap to clone: the underlying `reqwest::Client` shares its
//! connection pool between clones, so each `Task` can own one.

use super::{ApiError, Category, Listing, MovieSummary};
use reqwest::Url;
use std::time::Duration;

const USER_AGENT: &str = concat!("QuickShow/", env!("CARGO_PKG_VERSION"));

/// Bearer-authenticated client for the movie metadata API.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
    language: String,
}

impl TmdbClient {
    /// Builds a client for `base_url` (e.g. `https://api.themoviedb.org/3`).
    ///
    /// A blank token is treated as missing so requests fail fast instead of
    /// round-tripping to a guaranteed 401.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        access_token: Option<String>,
        language: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.filter(|token| !token.trim().is_empty()),
            language: language.into(),
        }
    }

    /// Whether an access token is available.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// URL of the first page of a fixed category.
    pub fn category_url(&self, category: Category) -> Result<Url, ApiError> {
        let raw = format!("{}/movie/{}", self.base_url, category.path_segment());
        Url::parse_with_params(&raw, [("language", self.language.as_str()), ("page", "1")])
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// URL of the first page of a title search. The query is percent-encoded.
    pub fn search_url(&self, query: &str) -> Result<Url, ApiError> {
        let raw = format!("{}/search/movie", self.base_url);
        Url::parse_with_params(
            &raw,
            [
                ("query", query),
                ("language", self.language.as_str()),
                ("page", "1"),
            ],
        )
        .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Fetches the first page of `category`.
    pub async fn fetch_category(&self, category: Category) -> Result<Vec<MovieSummary>, ApiError> {
        let url = self.category_url(category)?;
        tracing::debug!(category = category.path_segment(), "fetching listing");
        self.get_listing(url).await.map(|listing| listing.results)
    }

    /// Searches movie titles. Callers are expected to skip blank queries.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, ApiError> {
        let url = self.search_url(query)?;
        tracing::debug!(%query, "searching movies");
        self.get_listing(url).await.map(|listing| listing.results)
    }

    /// Downloads raw image bytes. Image hosts do not need the bearer token.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn get_listing(&self, url: Url) -> Result<Listing, ApiError> {
        let token = self.access_token.as_deref().ok_or(ApiError::MissingToken)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        parse_listing(&body)
    }
}

/// Decodes a listing page. A body without `results` yields an empty page.
pub fn parse_listing(body: &str) -> Result<Listing, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> TmdbClient {
        TmdbClient::new(
            "https://api.example.test/3/",
            token.map(String::from),
            "en-US",
            Duration::from_secs(5),
        )
    }

    #[test]
    fn category_url_has_language_and_first_page() {
        let url = client(Some("t")).category_url(Category::Upcoming).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.test/3/movie/upcoming?language=en-US&page=1"
        );
    }

    #[test]
    fn search_url_encodes_query() {
        let url = client(Some("t")).search_url("fast & furious").unwrap();
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(query[0], ("query".into(), "fast & furious".into()));
        assert!(url.as_str().contains("query=fast+%26+furious"));
        assert!(url.path().ends_with("/search/movie"));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        assert!(!client(Some("   ")).has_token());
        assert!(!client(None).has_token());
        assert!(client(Some("abc")).has_token());
    }

    #[tokio::test]
    async fn missing_token_fails_without_network() {
        let result = client(None).fetch_category(Category::NowPlaying).await;
        assert_eq!(result, Err(ApiError::MissingToken));
    }

    #[test]
    fn parse_listing_reads_results() {
        let body = r#"{"page":1,"results":[{"id":1,"title":"A"},{"id":2,"title":"B"}],"total_results":2}"#;
        let listing = parse_listing(body).expect("valid listing");
        assert_eq!(listing.results.len(), 2);
        assert_eq!(listing.results[1].title, "B");
    }

    #[test]
    fn parse_listing_without_results_is_empty() {
        let listing = parse_listing(r#"{"status_message":"nope"}"#).expect("valid json");
        assert!(listing.results.is_empty());
    }

    #[test]
    fn parse_listing_rejects_malformed_json() {
        assert!(matches!(parse_listing("<html>"), Err(ApiError::Decode(_))));
    }
}
