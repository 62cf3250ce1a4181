use serde::{Deserialize, Serialize};

use crate::tmdb::types::{ContentRating, ReleaseDates};

/// Region used when the viewer has no preference.
pub const DEFAULT_REGION: &str = "US";

/// The single content classification picked for a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCertificate {
    pub iso_3166_1: String,
    pub certificate: String,
}

impl ResolvedCertificate {
    fn new(country: &str, label: &str) -> Self {
        Self {
            iso_3166_1: country.to_string(),
            certificate: label.to_string(),
        }
    }
}

fn first_certification(entry: &ReleaseDates) -> Option<&str> {
    entry
        .release_dates
        .iter()
        .filter_map(|release| release.certification.as_deref())
        .find(|label| !label.is_empty())
}

/// Pick a movie certificate out of its per-country release records.
///
/// Origin countries are walked in order and, for each of them, every release
/// record. A record from the viewer `region` with a certification ends the
/// search. A record from the current origin country overwrites whatever was
/// picked before, so a later origin country wins over an earlier one. Any
/// other record with a certification is only taken while nothing has been
/// picked yet.
///
/// With no origin countries nothing is ever looked at and `None` comes back.
pub fn resolve_certificate(
    release_dates: &[ReleaseDates],
    origin_countries: &[String],
    region: &str,
) -> Option<ResolvedCertificate> {
    let mut picked: Option<ResolvedCertificate> = None;

    for origin in origin_countries {
        for entry in release_dates {
            let country = entry.iso_3166_1.as_deref().unwrap_or_default();

            if country == region {
                if let Some(label) = first_certification(entry) {
                    return Some(ResolvedCertificate::new(country, label));
                }
            }

            if country == origin {
                if let Some(label) = first_certification(entry) {
                    picked = Some(ResolvedCertificate::new(country, label));
                    // No early exit: a later origin match replaces this one.
                    continue;
                }
            }

            if picked.is_none() {
                if let Some(label) = first_certification(entry) {
                    picked = Some(ResolvedCertificate::new(country, label));
                }
            }
        }
    }

    picked
}

/// Pick a tv rating out of its per-country content ratings.
///
/// Same walk as [`resolve_certificate`] with one rating per country, except
/// that an origin match only counts when the origin country is not `"US"`.
/// Empty ratings are skipped everywhere, a viewer-region match included, so
/// an empty regional rating never ends the search. The result uses the same
/// `{iso_3166_1, certificate}` shape as movies rather than a `rating` field.
pub fn resolve_rating(
    ratings: &[ContentRating],
    origin_countries: &[String],
    region: &str,
) -> Option<ResolvedCertificate> {
    let mut picked: Option<ResolvedCertificate> = None;

    for origin in origin_countries {
        for rating in ratings {
            if rating.rating.is_empty() {
                continue;
            }

            if rating.iso_3166_1 == region {
                return Some(ResolvedCertificate::new(&rating.iso_3166_1, &rating.rating));
            }

            if rating.iso_3166_1 == *origin && origin != DEFAULT_REGION {
                // Overwrites an earlier pick, same as for movies.
                picked = Some(ResolvedCertificate::new(&rating.iso_3166_1, &rating.rating));
            }

            if picked.is_none() {
                picked = Some(ResolvedCertificate::new(&rating.iso_3166_1, &rating.rating));
            }
        }
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::types::ReleaseDate;

    fn releases(country: &str, labels: &[&str]) -> ReleaseDates {
        ReleaseDates {
            iso_3166_1: Some(country.to_string()),
            release_dates: labels
                .iter()
                .map(|label| ReleaseDate {
                    certification: Some(label.to_string()),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn rating(country: &str, label: &str) -> ContentRating {
        ContentRating {
            iso_3166_1: country.to_string(),
            rating: label.to_string(),
            ..Default::default()
        }
    }

    fn origins(countries: &[&str]) -> Vec<String> {
        countries.iter().map(|c| c.to_string()).collect()
    }

    fn cert(country: &str, label: &str) -> Option<ResolvedCertificate> {
        Some(ResolvedCertificate::new(country, label))
    }

    #[test]
    fn test_empty_region_label_then_two_origins() {
        // Walk for origin FR picks FR, then the walk for origin GB overwrites it with GB.
        let entries = vec![
            releases("US", &[""]),
            releases("FR", &["PG-13"]),
            releases("GB", &["15"]),
        ];
        let result = resolve_certificate(&entries, &origins(&["FR", "GB"]), "US");
        assert_eq!(result, cert("GB", "15"));
    }

    #[test]
    fn test_single_origin_keeps_origin_match() {
        let entries = vec![
            releases("US", &[""]),
            releases("FR", &["PG-13"]),
            releases("GB", &["15"]),
        ];
        let result = resolve_certificate(&entries, &origins(&["FR"]), "US");
        assert_eq!(result, cert("FR", "PG-13"));
    }

    #[test]
    fn test_viewer_region_wins_outright() {
        let entries = vec![
            releases("FR", &["12"]),
            releases("DE", &["", "16"]),
            releases("GB", &["15"]),
        ];
        let result = resolve_certificate(&entries, &origins(&["FR"]), "DE");
        assert_eq!(result, cert("DE", "16"));
    }

    #[test]
    fn test_first_labelled_entry_is_fallback() {
        let entries = vec![
            releases("JP", &[""]),
            releases("BR", &["", "14"]),
            releases("IT", &["T"]),
        ];
        let result = resolve_certificate(&entries, &origins(&["KR"]), "US");
        assert_eq!(result, cert("BR", "14"));
    }

    #[test]
    fn test_origin_match_replaces_fallback() {
        let entries = vec![releases("IT", &["T"]), releases("KR", &["15"])];
        let result = resolve_certificate(&entries, &origins(&["KR"]), "US");
        assert_eq!(result, cert("KR", "15"));
    }

    #[test]
    fn test_no_origin_countries_returns_none() {
        let entries = vec![releases("US", &["R"])];
        assert_eq!(resolve_certificate(&entries, &[], "US"), None);
    }

    #[test]
    fn test_no_labels_anywhere_returns_none() {
        let entries = vec![releases("US", &["", ""]), releases("FR", &[])];
        assert_eq!(resolve_certificate(&entries, &origins(&["FR"]), "US"), None);
    }

    #[test]
    fn test_missing_country_code_is_only_a_fallback() {
        let entries = vec![ReleaseDates {
            iso_3166_1: None,
            release_dates: vec![ReleaseDate {
                certification: Some("G".to_string()),
                ..Default::default()
            }],
        }];
        assert_eq!(
            resolve_certificate(&entries, &origins(&["US"]), "US"),
            cert("", "G")
        );
    }

    #[test]
    fn test_rating_region_wins() {
        let ratings = vec![rating("DE", "12"), rating("KR", "15"), rating("US", "TV-14")];
        assert_eq!(
            resolve_rating(&ratings, &origins(&["KR"]), "US"),
            cert("US", "TV-14")
        );
    }

    #[test]
    fn test_rating_us_origin_does_not_count() {
        let ratings = vec![rating("DE", "12"), rating("US", "TV-MA")];
        assert_eq!(
            resolve_rating(&ratings, &origins(&["US"]), "ID"),
            cert("DE", "12")
        );
    }

    #[test]
    fn test_rating_origin_overwrites_fallback() {
        let ratings = vec![rating("DE", "12"), rating("KR", "15"), rating("BR", "16")];
        assert_eq!(
            resolve_rating(&ratings, &origins(&["KR"]), "ID"),
            cert("KR", "15")
        );
    }

    #[test]
    fn test_rating_empty_region_label_does_not_short_circuit() {
        let ratings = vec![rating("US", ""), rating("GB", "15")];
        assert_eq!(
            resolve_rating(&ratings, &origins(&["GB"]), "US"),
            cert("GB", "15")
        );
    }

    #[test]
    fn test_rating_without_origins() {
        let ratings = vec![rating("US", "TV-PG")];
        assert_eq!(resolve_rating(&ratings, &[], "US"), None);
    }

    #[test]
    fn test_rating_serializes_as_certificate() {
        let ratings = vec![rating("GB", "15")];
        let resolved = resolve_rating(&ratings, &origins(&["GB"]), "US").unwrap();
        assert_eq!(
            serde_json::to_value(resolved).unwrap(),
            serde_json::json!({ "iso_3166_1": "GB", "certificate": "15" })
        );
    }
}
