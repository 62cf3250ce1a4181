//! TMDB metadata normalization served as a JSON API.

pub mod api;
pub mod cache;
pub mod config;
pub mod details;
pub mod error;
pub mod normalize;
pub mod preference;
pub mod tmdb;

pub use api::{router, AppState};
pub use config::Config;
pub use error::AppError;
