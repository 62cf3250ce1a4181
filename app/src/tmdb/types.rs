//! Payload shapes of the TMDB v3 API.
//!
//! Every field tolerates being absent: arrays default to empty, strings to
//! `None` and numbers to zero.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Movie,
    Tv,
    Person,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
            MediaType::Person => "person",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaRef {
    pub id: i64,
    pub media_type: MediaType,
}

// =============================================================================
// Lists
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Paged<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// The `{ "results": [...] }` wrapper TMDB puts around appended lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope<T> {
    pub results: Vec<T>,
}

/// A movie, tv show or person as returned by trending, discover and search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSummary {
    pub id: i64,
    pub media_type: Option<MediaType>,
    pub adult: bool,
    pub popularity: f64,
    pub vote_count: i64,
    pub vote_average: f64,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub profile_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub genre_ids: Vec<i64>,
    pub origin_country: Vec<String>,
    pub original_language: Option<String>,
    pub video: Option<bool>,
    pub known_for_department: Option<String>,
    pub known_for: Vec<MediaSummary>,
}

// =============================================================================
// Shared pieces
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: Option<String>,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpokenLanguage {
    pub iso_639_1: Option<String>,
    pub name: Option<String>,
    pub english_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub id: i64,
    pub name: Option<String>,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionSummary {
    pub id: i64,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
    pub wikidata_id: Option<String>,
    pub freebase_id: Option<String>,
    pub freebase_mid: Option<String>,
    pub tvdb_id: Option<i64>,
    pub tvrage_id: Option<i64>,
    pub facebook_id: Option<String>,
    pub instagram_id: Option<String>,
    pub twitter_id: Option<String>,
    pub tiktok_id: Option<String>,
    pub youtube_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: Option<String>,
    pub iso_639_1: Option<String>,
    pub iso_3166_1: Option<String>,
    pub key: String,
    pub name: Option<String>,
    pub official: bool,
    pub published_at: Option<String>,
    pub site: Option<String>,
    pub size: u32,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeTitle {
    pub iso_3166_1: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeTitles {
    /// Movies list them under `titles`, tv shows under `results`.
    #[serde(alias = "results")]
    pub titles: Vec<AlternativeTitle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieKeywords {
    pub keywords: Vec<Keyword>,
}

// =============================================================================
// Certificates
// =============================================================================

/// One release of a movie in one country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDate {
    pub certification: Option<String>,
    pub iso_639_1: Option<String>,
    pub release_date: Option<String>,
    #[serde(rename = "type")]
    pub kind: i64,
    pub note: Option<String>,
}

/// All releases of a movie in one country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDates {
    pub iso_3166_1: Option<String>,
    pub release_dates: Vec<ReleaseDate>,
}

/// The rating of a tv show in one country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRating {
    pub iso_3166_1: String,
    pub rating: String,
    pub descriptors: Vec<String>,
}

// =============================================================================
// Images
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseImage {
    pub aspect_ratio: f64,
    pub file_path: Option<String>,
    pub height: i64,
    pub width: i64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub iso_639_1: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSet {
    pub id: Option<i64>,
    pub backdrops: Vec<BaseImage>,
    pub posters: Vec<BaseImage>,
    pub logos: Vec<BaseImage>,
}

// =============================================================================
// Credits of a title
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cast {
    pub id: i64,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
    pub popularity: f64,
    pub adult: bool,
    pub gender: i64,
    pub cast_id: Option<i64>,
    pub character: Option<String>,
    pub credit_id: Option<String>,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crew {
    pub id: i64,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
    pub popularity: f64,
    pub adult: bool,
    pub gender: i64,
    pub credit_id: Option<String>,
    pub department: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credits {
    pub id: Option<i64>,
    pub cast: Vec<Cast>,
    pub crew: Vec<Crew>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateRole {
    pub credit_id: Option<String>,
    pub character: Option<String>,
    pub episode_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateJob {
    pub credit_id: Option<String>,
    pub job: Option<String>,
    pub episode_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateCast {
    pub id: i64,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
    pub popularity: f64,
    pub adult: bool,
    pub gender: i64,
    pub order: i64,
    pub roles: Vec<AggregateRole>,
    pub total_episode_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateCrew {
    pub id: i64,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
    pub popularity: f64,
    pub adult: bool,
    pub gender: i64,
    pub department: Option<String>,
    pub jobs: Vec<AggregateJob>,
    pub total_episode_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateCredits {
    pub id: Option<i64>,
    pub cast: Vec<AggregateCast>,
    pub crew: Vec<AggregateCrew>,
}

// =============================================================================
// Movies
// =============================================================================

/// Movie detail fields kept as they are in the composed view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieInfo {
    pub id: i64,
    pub adult: bool,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<i64>,
    pub budget: i64,
    pub revenue: i64,
    pub status: Option<String>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    pub popularity: f64,
    pub vote_count: i64,
    pub vote_average: f64,
    pub video: Option<bool>,
    pub genres: Vec<Genre>,
    pub belongs_to_collection: Option<CollectionSummary>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub videos: Option<Envelope<Video>>,
    pub credits: Option<Credits>,
    pub alternative_titles: Option<AlternativeTitles>,
    pub external_ids: Option<ExternalIds>,
    pub recommendations: Option<Envelope<MediaSummary>>,
    pub keywords: Option<MovieKeywords>,
    pub images: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub info: MovieInfo,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub release_dates: Envelope<ReleaseDates>,
}

// =============================================================================
// TV shows
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplePerson {
    pub id: i64,
    pub credit_id: Option<String>,
    pub name: Option<String>,
    pub profile_path: Option<String>,
    pub gender: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEpisode {
    pub id: i64,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub episode_number: i64,
    pub episode_type: Option<String>,
    pub production_code: Option<String>,
    pub runtime: Option<i64>,
    pub season_number: i64,
    pub show_id: i64,
    pub still_path: Option<String>,
    pub vote_average: f64,
    pub vote_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleSeason {
    pub id: i64,
    pub air_date: Option<String>,
    pub episode_count: i64,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub season_number: i64,
    pub vote_average: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TvKeywords {
    pub results: Vec<Keyword>,
}

/// Tv detail fields kept as they are in the composed view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TvInfo {
    pub id: i64,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub homepage: Option<String>,
    pub in_production: bool,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub popularity: f64,
    pub vote_count: i64,
    pub vote_average: f64,
    pub number_of_episodes: i64,
    pub number_of_seasons: i64,
    pub episode_run_time: Vec<i64>,
    pub languages: Vec<String>,
    pub created_by: Vec<SimplePerson>,
    pub genres: Vec<Genre>,
    pub networks: Vec<Network>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub seasons: Vec<SimpleSeason>,
    pub last_episode_to_air: Option<SimpleEpisode>,
    pub next_episode_to_air: Option<SimpleEpisode>,
    pub videos: Option<Envelope<Video>>,
    pub aggregate_credits: Option<AggregateCredits>,
    pub alternative_titles: Option<AlternativeTitles>,
    pub external_ids: Option<ExternalIds>,
    pub recommendations: Option<Envelope<MediaSummary>>,
    pub keywords: Option<TvKeywords>,
    pub images: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TvDetail {
    #[serde(flatten)]
    pub info: TvInfo,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub content_ratings: Envelope<ContentRating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
    #[serde(flatten)]
    pub episode: SimpleEpisode,
    pub crew: Vec<Crew>,
    pub guest_stars: Vec<Cast>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonDetail {
    #[serde(flatten)]
    pub season: SimpleSeason,
    pub episodes: Vec<Episode>,
    pub videos: Option<Envelope<Video>>,
    pub aggregate_credits: Option<AggregateCredits>,
}

// =============================================================================
// People
// =============================================================================

/// The title side of a person's credit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditedWork {
    pub id: i64,
    pub media_type: MediaType,
    pub adult: bool,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genre_ids: Vec<i64>,
    pub origin_country: Vec<String>,
    pub original_language: Option<String>,
    pub popularity: f64,
    pub vote_count: i64,
    pub vote_average: f64,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
}

impl CreditedWork {
    pub fn media_ref(&self) -> MediaRef {
        MediaRef {
            id: self.id,
            media_type: self.media_type,
        }
    }
}

/// One acting credit of a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastCredit {
    #[serde(flatten)]
    pub work: CreditedWork,
    #[serde(default)]
    pub credit_id: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub episode_count: Option<i64>,
    #[serde(default)]
    pub order: Option<i64>,
}

/// One crew credit of a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrewCredit {
    #[serde(flatten)]
    pub work: CreditedWork,
    #[serde(default)]
    pub credit_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub episode_count: Option<i64>,
    #[serde(default)]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonCredits {
    pub cast: Vec<CastCredit>,
    pub crew: Vec<CrewCredit>,
}

/// Person fields kept as they are in the composed view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonInfo {
    pub id: i64,
    pub adult: bool,
    pub name: Option<String>,
    pub also_known_as: Vec<String>,
    pub biography: Option<String>,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub gender: i64,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    pub known_for_department: Option<String>,
    pub place_of_birth: Option<String>,
    pub popularity: f64,
    pub profile_path: Option<String>,
    pub external_ids: Option<ExternalIds>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonDetail {
    #[serde(flatten)]
    pub info: PersonInfo,
    #[serde(default)]
    pub combined_credits: PersonCredits,
}

// =============================================================================
// Collections
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionDetail {
    pub id: i64,
    pub name: Option<String>,
    pub original_language: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub parts: Vec<MediaSummary>,
}
