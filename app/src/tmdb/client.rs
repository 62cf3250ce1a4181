//! TMDB API client.
//!
//! Catalogue and detail lookups go through the response cache; searches
//! always hit the network.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use super::types::{
    AggregateCredits, CollectionDetail, Credits, Envelope, ImageSet, MediaSummary, MediaType,
    MovieDetail, Paged, PersonDetail, SeasonDetail, TvDetail, Video,
};
use crate::cache::{CacheKey, ResponseCache};

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Keywords filtered out of discover listings.
const EXCLUDED_KEYWORDS: &str = "softcore|sexy";
const IMAGE_LANGUAGES: &str = "en,null";

const MOVIE_DETAIL_APPENDS: &str =
    "release_dates,alternative_titles,keywords,external_ids,videos,recommendations";
const TV_DETAIL_APPENDS: &str =
    "alternative_titles,content_ratings,external_ids,keywords,videos,recommendations";

#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("Resource not found")]
    NotFound,

    #[error("TMDB responded {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Time window of a trending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Day,
    Week,
}

impl TimeWindow {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "day" => Some(TimeWindow::Day),
            "week" => Some(TimeWindow::Week),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    cache: Arc<dyn ResponseCache>,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    /// Fails before any request is made when the base URL or key is empty.
    pub fn new(
        base_url: &str,
        api_key: &str,
        cache: Arc<dyn ResponseCache>,
    ) -> Result<Self, TmdbError> {
        if base_url.trim().is_empty() {
            return Err(TmdbError::MissingConfig("API_URL"));
        }
        if api_key.trim().is_empty() {
            return Err(TmdbError::MissingConfig("API_SECRET"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            cache,
        })
    }

    fn auth_header(&self) -> String {
        if self.api_key.starts_with("Bearer ") {
            self.api_key.clone()
        } else {
            format!("Bearer {}", self.api_key)
        }
    }

    /// Authenticated GET of `endpoint`, decoded as `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", endpoint);

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("TMDB request to {} failed: {}", endpoint, e);
                TmdbError::Request(e)
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("TMDB has no {}", endpoint);
            return Err(TmdbError::NotFound);
        }
        if !status.is_success() {
            let message = status.canonical_reason().unwrap_or("unknown").to_string();
            error!("TMDB error on {}: {} {}", endpoint, status.as_u16(), message);
            return Err(TmdbError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Like [`TmdbClient::get`], answered from the cache when possible.
    pub async fn get_cached<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let key = CacheKey::new(endpoint, query);
        if let Some(value) = self.cache.get(&key).await {
            debug!("Cache hit: {}", endpoint);
            return Ok(serde_json::from_value(value)?);
        }

        let value: Value = self.get(endpoint, query).await?;
        // Cache only what decodes as `T`.
        let decoded = serde_json::from_value(value.clone())?;
        self.cache.insert(key, value).await;
        Ok(decoded)
    }

    // Search

    /// Multi search; `None` for an empty query.
    pub async fn search_multi(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Option<Paged<MediaSummary>>, TmdbError> {
        if query.trim().is_empty() {
            return Ok(None);
        }
        let results = self
            .get(
                "/search/multi",
                &[("query", query.to_string()), ("page", page.to_string())],
            )
            .await?;
        Ok(Some(results))
    }

    pub async fn search(
        &self,
        media_type: MediaType,
        query: &str,
        page: u32,
    ) -> Result<Paged<MediaSummary>, TmdbError> {
        let endpoint = format!("/search/{}", media_type);
        self.get(
            &endpoint,
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    // Trending

    pub async fn trending_all(&self) -> Result<Paged<MediaSummary>, TmdbError> {
        self.get_cached("/trending/all/day", &[]).await
    }

    pub async fn trending(
        &self,
        media_type: MediaType,
        window: TimeWindow,
    ) -> Result<Paged<MediaSummary>, TmdbError> {
        let endpoint = format!("/trending/{}/{}", media_type, window.as_str());
        self.get_cached(&endpoint, &[]).await
    }

    // Movies

    /// Movies released in theatres in `region` during the last two weeks.
    pub async fn movies_on_cinema(
        &self,
        region: &str,
        page: u32,
    ) -> Result<Paged<MediaSummary>, TmdbError> {
        let now = Utc::now();
        self.get_cached(
            "/discover/movie",
            &[
                ("page", page.to_string()),
                ("watch_region", region.to_string()),
                ("sort_by", "popularity.desc".to_string()),
                ("region", region.to_string()),
                ("with_release_type", "2|3".to_string()),
                ("release_date.gte", format_date(now - TimeDelta::weeks(2))),
                ("release_date.lte", format_date(now + TimeDelta::days(1))),
                ("with_watch_monetization_type", "flatrate".to_string()),
                ("without_keywords", EXCLUDED_KEYWORDS.to_string()),
            ],
        )
        .await
    }

    pub async fn movies_popular(&self, page: u32) -> Result<Paged<MediaSummary>, TmdbError> {
        self.get_cached(
            "/discover/movie",
            &[
                ("page", page.to_string()),
                ("sort_by", "popularity.desc".to_string()),
                ("without_keywords", EXCLUDED_KEYWORDS.to_string()),
            ],
        )
        .await
    }

    /// Movies premiering within the next thirty days.
    pub async fn movies_upcoming(&self, page: u32) -> Result<Paged<MediaSummary>, TmdbError> {
        let now = Utc::now();
        self.get_cached(
            "/discover/movie",
            &[
                ("page", page.to_string()),
                ("sort_by", "popularity.desc".to_string()),
                ("with_release_type", "1|2|3".to_string()),
                ("primary_release_date.gte", format_date(now + TimeDelta::days(1))),
                ("primary_release_date.lte", format_date(now + TimeDelta::days(30))),
                ("without_keywords", EXCLUDED_KEYWORDS.to_string()),
            ],
        )
        .await
    }

    pub async fn movies_top_rated(&self, page: u32) -> Result<Paged<MediaSummary>, TmdbError> {
        self.get_cached(
            "/discover/movie",
            &[
                ("sort_by", "vote_average.desc".to_string()),
                ("without_genres", "99".to_string()),
                ("vote_count.gte", "2000".to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    pub async fn movie(&self, id: i64) -> Result<MovieDetail, TmdbError> {
        self.get_cached(&format!("/movie/{}", id), &[]).await
    }

    pub async fn movie_details(&self, id: i64) -> Result<MovieDetail, TmdbError> {
        self.get_cached(
            &format!("/movie/{}", id),
            &[("append_to_response", MOVIE_DETAIL_APPENDS.to_string())],
        )
        .await
    }

    pub async fn movie_images(&self, id: i64) -> Result<ImageSet, TmdbError> {
        self.get_cached(
            &format!("/movie/{}/images", id),
            &[("include_image_language", IMAGE_LANGUAGES.to_string())],
        )
        .await
    }

    pub async fn movie_videos(&self, id: i64) -> Result<Vec<Video>, TmdbError> {
        let videos: Envelope<Video> = self.get_cached(&format!("/movie/{}/videos", id), &[]).await?;
        Ok(videos.results)
    }

    pub async fn movie_credits(&self, id: i64) -> Result<Credits, TmdbError> {
        self.get_cached(&format!("/movie/{}/credits", id), &[]).await
    }

    // TV shows

    pub async fn tv_top_rated(&self, page: u32) -> Result<Paged<MediaSummary>, TmdbError> {
        self.get_cached(
            "/discover/tv",
            &[
                ("include_adult", "false".to_string()),
                ("include_video", "false".to_string()),
                ("sort_by", "vote_average.desc".to_string()),
                ("vote_count.gte", "1000".to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    pub async fn tv_popular(&self, page: u32) -> Result<Paged<MediaSummary>, TmdbError> {
        self.get_cached(
            "/discover/tv",
            &[
                ("include_adult", "false".to_string()),
                ("sort_by", "popularity.desc".to_string()),
                ("vote_count.gte", "1000".to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    pub async fn tv(&self, id: i64) -> Result<TvDetail, TmdbError> {
        self.get_cached(&format!("/tv/{}", id), &[]).await
    }

    pub async fn tv_details(&self, id: i64) -> Result<TvDetail, TmdbError> {
        self.get_cached(
            &format!("/tv/{}", id),
            &[("append_to_response", TV_DETAIL_APPENDS.to_string())],
        )
        .await
    }

    pub async fn tv_images(&self, id: i64) -> Result<ImageSet, TmdbError> {
        self.get_cached(
            &format!("/tv/{}/images", id),
            &[("include_image_language", IMAGE_LANGUAGES.to_string())],
        )
        .await
    }

    pub async fn tv_videos(&self, id: i64) -> Result<Vec<Video>, TmdbError> {
        let videos: Envelope<Video> = self.get_cached(&format!("/tv/{}/videos", id), &[]).await?;
        Ok(videos.results)
    }

    pub async fn tv_credits(&self, id: i64) -> Result<AggregateCredits, TmdbError> {
        self.get_cached(&format!("/tv/{}/aggregate_credits", id), &[])
            .await
    }

    pub async fn tv_season(&self, id: i64, season: i64) -> Result<SeasonDetail, TmdbError> {
        self.get_cached(
            &format!("/tv/{}/season/{}", id, season),
            &[("append_to_response", "videos,aggregate_credits".to_string())],
        )
        .await
    }

    // People

    pub async fn people_popular(&self, page: u32) -> Result<Paged<MediaSummary>, TmdbError> {
        self.get_cached("/person/popular", &[("page", page.to_string())])
            .await
    }

    pub async fn person_details(&self, id: i64) -> Result<PersonDetail, TmdbError> {
        self.get_cached(
            &format!("/person/{}", id),
            &[(
                "append_to_response",
                "external_ids,combined_credits".to_string(),
            )],
        )
        .await
    }

    // Collections

    pub async fn collection(&self, id: i64) -> Result<CollectionDetail, TmdbError> {
        self.get_cached(&format!("/collection/{}", id), &[]).await
    }

    pub async fn collection_images(&self, id: i64) -> Result<ImageSet, TmdbError> {
        self.get_cached(
            &format!("/collection/{}/images", id),
            &[("include_image_language", IMAGE_LANGUAGES.to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::NoCache;

    #[test]
    fn test_missing_base_url_fails_fast() {
        let err = TmdbClient::new("", "key", Arc::new(NoCache)).unwrap_err();
        assert!(matches!(err, TmdbError::MissingConfig("API_URL")));
    }

    #[test]
    fn test_missing_key_fails_fast() {
        let err = TmdbClient::new(TMDB_BASE_URL, "  ", Arc::new(NoCache)).unwrap_err();
        assert!(matches!(err, TmdbError::MissingConfig("API_SECRET")));
    }

    #[test]
    fn test_auth_header_keeps_existing_bearer() {
        let client = TmdbClient::new(TMDB_BASE_URL, "Bearer abc", Arc::new(NoCache)).unwrap();
        assert_eq!(client.auth_header(), "Bearer abc");

        let client = TmdbClient::new(TMDB_BASE_URL, "abc", Arc::new(NoCache)).unwrap();
        assert_eq!(client.auth_header(), "Bearer abc");
    }

    #[test]
    fn test_time_window_parse() {
        assert_eq!(TimeWindow::parse("day"), Some(TimeWindow::Day));
        assert_eq!(TimeWindow::parse("week"), Some(TimeWindow::Week));
        assert_eq!(TimeWindow::parse("month"), None);
    }

    #[tokio::test]
    async fn test_empty_multi_search_skips_request() {
        let client = TmdbClient::new("http://127.0.0.1:9", "key", Arc::new(NoCache)).unwrap();
        assert!(client.search_multi("  ", 1).await.unwrap().is_none());
    }
}
