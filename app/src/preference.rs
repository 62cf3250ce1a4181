//! Viewer language and region.
//!
//! Read from the `preference` cookie holding `{"lang": .., "region": ..}`.
//! Without a usable cookie the region comes from the `X-Vercel-IP-Country`
//! header and then from configuration.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::debug;

use crate::api::AppState;

pub const PREFERENCE_COOKIE: &str = "preference";
pub const COUNTRY_HEADER: &str = "x-vercel-ip-country";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub lang: String,
    pub region: String,
}

impl Preference {
    pub fn from_headers(headers: &HeaderMap, default_lang: &str, default_region: &str) -> Self {
        if let Some(preference) = cookie_value(headers, PREFERENCE_COOKIE).and_then(|raw| parse(&raw)) {
            return preference;
        }

        let region = headers
            .get(COUNTRY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(default_region);

        Self {
            lang: default_lang.to_string(),
            region: region.to_uppercase(),
        }
    }
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

fn parse(raw: &str) -> Option<Preference> {
    let decoded = urlencoding::decode(raw).ok()?;
    match serde_json::from_str::<Preference>(&decoded) {
        Ok(preference) if !preference.region.is_empty() => Some(preference),
        Ok(_) => None,
        Err(e) => {
            debug!("Ignoring malformed preference cookie: {}", e);
            None
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Preference {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Preference::from_headers(
            &parts.headers,
            &state.default_language,
            &state.default_region,
        ))
    }
}
