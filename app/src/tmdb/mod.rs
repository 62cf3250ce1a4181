//! TMDB access: payload types and the HTTP client.

pub mod client;
pub mod types;

pub use client::{TimeWindow, TmdbClient, TmdbError, TMDB_BASE_URL};
