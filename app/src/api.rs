use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::{
    details::{
        CollectionDetails, MovieCredits, MovieDetails, PersonDetails, SummaryPage, TvCredits,
        TvDetails,
    },
    error::AppError,
    normalize::{combine_images, random, CombinedImage},
    preference::Preference,
    tmdb::{
        types::{MediaSummary, MediaType, Paged, SeasonDetail, Video},
        TimeWindow, TmdbClient,
    },
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub tmdb: TmdbClient,
    pub default_region: String,
    pub default_language: String,
}

/// The whole service: JSON routes under `/api` with tracing and CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/trending", get(get_trending_all))
        .route("/trending/:media_type/:time_window", get(get_trending))
        .route("/movie/on-cinema", get(get_movies_on_cinema))
        .route("/movie/popular", get(get_popular_movies))
        .route("/movie/upcoming", get(get_upcoming_movies))
        .route("/movie/top-rated", get(get_top_rated_movies))
        .route("/movie/featured", get(get_featured_movie))
        .route("/movie/:id", get(get_movie_detail))
        .route("/movie/:id/images", get(get_movie_images))
        .route("/movie/:id/videos", get(get_movie_videos))
        .route("/movie/:id/credits", get(get_movie_credits))
        .route("/tv/popular", get(get_popular_tv))
        .route("/tv/top-rated", get(get_top_rated_tv))
        .route("/tv/featured", get(get_featured_tv))
        .route("/tv/:id", get(get_tv_detail))
        .route("/tv/:id/images", get(get_tv_images))
        .route("/tv/:id/videos", get(get_tv_videos))
        .route("/tv/:id/credits", get(get_tv_credits))
        .route("/tv/:id/season/:season", get(get_tv_season))
        .route("/person/popular", get(get_popular_people))
        .route("/person/:id", get(get_person_detail))
        .route("/collection/:id", get(get_collection))
        .route("/collection/:id/images", get(get_collection_images))
        .route("/search", get(search))
        .route("/search/:kind", get(search_kind))
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default = "default_page")]
    page: u32,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
    #[serde(default = "default_page")]
    page: u32,
}

fn default_page() -> u32 {
    1
}

fn parse_media_type(value: &str) -> Result<MediaType, AppError> {
    match value {
        "movie" => Ok(MediaType::Movie),
        "tv" => Ok(MediaType::Tv),
        "person" => Ok(MediaType::Person),
        other => Err(AppError::BadRequest(format!("Unknown media type: {}", other))),
    }
}

/// Id of a random title out of a trending list.
fn featured_id(titles: &[MediaSummary]) -> Option<i64> {
    random::pick(titles, &mut rand::rng()).map(|title| title.id)
}

// Trending

async fn get_trending_all(State(state): State<AppState>) -> Result<Json<SummaryPage>, AppError> {
    let trending = state.tmdb.trending_all().await?;
    Ok(Json(trending.into()))
}

async fn get_trending(
    State(state): State<AppState>,
    Path((media_type, time_window)): Path<(String, String)>,
) -> Result<Json<SummaryPage>, AppError> {
    let media_type = parse_media_type(&media_type)?;
    let window = TimeWindow::parse(&time_window)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown time window: {}", time_window)))?;
    let trending = state.tmdb.trending(media_type, window).await?;
    Ok(Json(trending.into()))
}

// Movies

async fn get_movies_on_cinema(
    State(state): State<AppState>,
    preference: Preference,
    Query(params): Query<PageQuery>,
) -> Result<Json<SummaryPage>, AppError> {
    let movies = state
        .tmdb
        .movies_on_cinema(&preference.region, params.page)
        .await?;
    Ok(Json(movies.into()))
}

async fn get_popular_movies(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<SummaryPage>, AppError> {
    let movies = state.tmdb.movies_popular(params.page).await?;
    Ok(Json(movies.into()))
}

async fn get_upcoming_movies(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<SummaryPage>, AppError> {
    let movies = state.tmdb.movies_upcoming(params.page).await?;
    Ok(Json(movies.into()))
}

async fn get_top_rated_movies(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<SummaryPage>, AppError> {
    let movies = state.tmdb.movies_top_rated(params.page).await?;
    Ok(Json(movies.into()))
}

async fn get_featured_movie(
    State(state): State<AppState>,
    preference: Preference,
) -> Result<Json<MovieDetails>, AppError> {
    let trending = state
        .tmdb
        .trending(MediaType::Movie, TimeWindow::Day)
        .await?;
    let id = featured_id(&trending.results).ok_or(AppError::NotFound)?;
    debug!("Featured movie: {}", id);

    let movie = state.tmdb.movie_details(id).await?;
    Ok(Json(MovieDetails::compose(movie, &preference.region)))
}

async fn get_movie_detail(
    State(state): State<AppState>,
    preference: Preference,
    Path(id): Path<i64>,
) -> Result<Json<MovieDetails>, AppError> {
    let movie = state.tmdb.movie_details(id).await?;
    Ok(Json(MovieDetails::compose(movie, &preference.region)))
}

async fn get_movie_images(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<CombinedImage>>, AppError> {
    let images = state.tmdb.movie_images(id).await?;
    Ok(Json(combine_images(images)))
}

async fn get_movie_videos(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Video>>, AppError> {
    Ok(Json(state.tmdb.movie_videos(id).await?))
}

async fn get_movie_credits(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MovieCredits>, AppError> {
    let credits = state.tmdb.movie_credits(id).await?;
    Ok(Json(MovieCredits::compose(credits)))
}

// TV shows

async fn get_popular_tv(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<SummaryPage>, AppError> {
    let shows = state.tmdb.tv_popular(params.page).await?;
    Ok(Json(shows.into()))
}

async fn get_top_rated_tv(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<SummaryPage>, AppError> {
    let shows = state.tmdb.tv_top_rated(params.page).await?;
    Ok(Json(shows.into()))
}

async fn get_featured_tv(
    State(state): State<AppState>,
    preference: Preference,
) -> Result<Json<TvDetails>, AppError> {
    let trending = state.tmdb.trending(MediaType::Tv, TimeWindow::Day).await?;
    let id = featured_id(&trending.results).ok_or(AppError::NotFound)?;
    debug!("Featured tv show: {}", id);

    let show = state.tmdb.tv_details(id).await?;
    Ok(Json(TvDetails::compose(show, &preference.region)))
}

async fn get_tv_detail(
    State(state): State<AppState>,
    preference: Preference,
    Path(id): Path<i64>,
) -> Result<Json<TvDetails>, AppError> {
    let show = state.tmdb.tv_details(id).await?;
    Ok(Json(TvDetails::compose(show, &preference.region)))
}

async fn get_tv_images(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<CombinedImage>>, AppError> {
    let images = state.tmdb.tv_images(id).await?;
    Ok(Json(combine_images(images)))
}

async fn get_tv_videos(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Video>>, AppError> {
    Ok(Json(state.tmdb.tv_videos(id).await?))
}

async fn get_tv_credits(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TvCredits>, AppError> {
    let credits = state.tmdb.tv_credits(id).await?;
    Ok(Json(TvCredits::compose(credits)))
}

async fn get_tv_season(
    State(state): State<AppState>,
    Path((id, season)): Path<(i64, i64)>,
) -> Result<Json<SeasonDetail>, AppError> {
    Ok(Json(state.tmdb.tv_season(id, season).await?))
}

// People

async fn get_popular_people(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<SummaryPage>, AppError> {
    let people = state.tmdb.people_popular(params.page).await?;
    Ok(Json(people.into()))
}

async fn get_person_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PersonDetails>, AppError> {
    let person = state.tmdb.person_details(id).await?;
    Ok(Json(PersonDetails::compose(person, chrono::Utc::now())))
}

// Collections

async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CollectionDetails>, AppError> {
    let collection = state.tmdb.collection(id).await?;
    Ok(Json(CollectionDetails::compose(collection)))
}

async fn get_collection_images(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<CombinedImage>>, AppError> {
    let images = state.tmdb.collection_images(id).await?;
    Ok(Json(combine_images(images)))
}

// Search

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SummaryPage>, AppError> {
    let results = state
        .tmdb
        .search_multi(&params.q, params.page)
        .await?
        .unwrap_or_default();
    Ok(Json(results.into()))
}

async fn search_kind(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SummaryPage>, AppError> {
    let media_type = parse_media_type(&kind)?;
    if params.q.trim().is_empty() {
        return Ok(Json(Paged::<MediaSummary>::default().into()));
    }
    let results = state.tmdb.search(media_type, &params.q, params.page).await?;
    Ok(Json(results.into()))
}
