//! View models handed to the rendering layer.
//!
//! Each one strips the raw wrapper fields of a TMDB payload and adds what was
//! derived from them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::normalize::credits::{CombinedCast, CombinedCredits, CombinedCrew};
use crate::normalize::grouping::{department_key, Group, Grouping};
use crate::normalize::pagination::Pagination;
use crate::normalize::{resolve_certificate, resolve_rating, ResolvedCertificate};
use crate::tmdb::types::{
    AggregateCast, AggregateCredits, AggregateCrew, Cast, CollectionDetail, ContentRating, Credits,
    Crew, MediaSummary, MovieDetail, MovieInfo, Paged, PersonDetail, PersonInfo, ReleaseDates,
    TvDetail, TvInfo,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: MovieInfo,
    pub release_dates: Vec<ReleaseDates>,
    pub certificate: Option<ResolvedCertificate>,
}

impl MovieDetails {
    pub fn compose(detail: MovieDetail, region: &str) -> Self {
        let MovieDetail {
            info,
            origin_country,
            release_dates,
        } = detail;
        let certificate = resolve_certificate(&release_dates.results, &origin_country, region);

        Self {
            movie: info,
            release_dates: release_dates.results,
            certificate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TvDetails {
    #[serde(flatten)]
    pub show: TvInfo,
    pub content_ratings: Vec<ContentRating>,
    pub certificate: Option<ResolvedCertificate>,
}

impl TvDetails {
    pub fn compose(detail: TvDetail, region: &str) -> Self {
        let TvDetail {
            info,
            origin_country,
            content_ratings,
        } = detail;
        let certificate = resolve_rating(&content_ratings.results, &origin_country, region);

        Self {
            show: info,
            content_ratings: content_ratings.results,
            certificate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonDetails {
    #[serde(flatten)]
    pub person: PersonInfo,
    pub combine_cast: Vec<CombinedCast>,
    pub combine_crew: Vec<CombinedCrew>,
    pub popular_cast: Vec<CombinedCast>,
    pub popular_crew: Vec<CombinedCrew>,
    /// `combine_crew` grouped by department, in first-seen department order.
    pub crew_by_department: Vec<Group<String, CombinedCrew>>,
}

impl PersonDetails {
    pub fn compose(detail: PersonDetail, now: DateTime<Utc>) -> Self {
        let PersonDetail {
            info,
            combined_credits,
        } = detail;
        let credits = CombinedCredits::build(combined_credits.cast, combined_credits.crew, now);
        let crew_by_department = Grouping::new(credits.crew.iter().cloned(), |c| {
            department_key(c.department.as_deref())
        })
        .into_groups();

        Self {
            person: info,
            combine_cast: credits.cast,
            combine_crew: credits.crew,
            popular_cast: credits.popular_cast,
            popular_crew: credits.popular_crew,
            crew_by_department,
        }
    }
}

/// Credits of a movie with the crew grouped by department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCredits {
    pub id: Option<i64>,
    pub cast: Vec<Cast>,
    pub crew: Vec<Group<String, Crew>>,
}

impl MovieCredits {
    pub fn compose(credits: Credits) -> Self {
        Self {
            id: credits.id,
            cast: credits.cast,
            crew: Grouping::new(credits.crew, |c| department_key(c.department.as_deref()))
                .into_groups(),
        }
    }
}

/// Aggregate credits of a tv show with the crew grouped by department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TvCredits {
    pub id: Option<i64>,
    pub cast: Vec<AggregateCast>,
    pub crew: Vec<Group<String, AggregateCrew>>,
}

impl TvCredits {
    pub fn compose(credits: AggregateCredits) -> Self {
        Self {
            id: credits.id,
            cast: credits.cast,
            crew: Grouping::new(credits.crew, |c| department_key(c.department.as_deref()))
                .into_groups(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionDetails {
    #[serde(flatten)]
    pub collection: CollectionDetail,
    pub vote_average: Option<f64>,
    pub vote_count: Option<f64>,
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let count = values.len();
    if count == 0 {
        return None;
    }
    Some(values.sum::<f64>() / count as f64)
}

impl CollectionDetails {
    pub fn compose(collection: CollectionDetail) -> Self {
        let vote_average = mean(collection.parts.iter().map(|p| p.vote_average));
        let vote_count = mean(collection.parts.iter().map(|p| p.vote_count as f64));

        Self {
            collection,
            vote_average,
            vote_count,
        }
    }
}

/// A page of results plus the pagination control for it.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<T> {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub results: Vec<T>,
    pub pagination: Pagination,
}

impl<T> From<Paged<T>> for PageView<T> {
    fn from(paged: Paged<T>) -> Self {
        let page = paged.page.max(1);
        Self {
            page,
            total_pages: paged.total_pages,
            total_results: paged.total_results,
            pagination: Pagination::new(page, paged.total_pages),
            results: paged.results,
        }
    }
}

pub type SummaryPage = PageView<MediaSummary>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::pagination::PageItem;
    use crate::tmdb::types::{CastCredit, CreditedWork, CrewCredit, MediaType, PersonCredits};

    fn now() -> DateTime<Utc> {
        "2026-10-17T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_movie_details_resolve_certificate() {
        let detail: MovieDetail = serde_json::from_value(serde_json::json!({
            "id": 27205,
            "title": "Inception",
            "origin_country": ["US", "GB"],
            "release_dates": { "results": [
                { "iso_3166_1": "GB", "release_dates": [{ "certification": "12A", "type": 3 }] },
                { "iso_3166_1": "US", "release_dates": [{ "certification": "", "type": 1 }, { "certification": "PG-13", "type": 3 }] }
            ]}
        }))
        .unwrap();

        let details = MovieDetails::compose(detail, "US");
        assert_eq!(
            details.certificate,
            Some(ResolvedCertificate {
                iso_3166_1: "US".into(),
                certificate: "PG-13".into()
            })
        );
        assert_eq!(details.release_dates.len(), 2);

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["title"], "Inception");
        assert_eq!(json["certificate"]["certificate"], "PG-13");
        assert!(json.get("origin_country").is_none());
        assert!(json["release_dates"].is_array());
    }

    #[test]
    fn test_tv_details_resolve_rating() {
        let detail: TvDetail = serde_json::from_value(serde_json::json!({
            "id": 1396,
            "name": "Breaking Bad",
            "origin_country": ["US"],
            "content_ratings": { "results": [
                { "iso_3166_1": "DE", "rating": "16" },
                { "iso_3166_1": "US", "rating": "TV-MA" }
            ]}
        }))
        .unwrap();

        let details = TvDetails::compose(detail.clone(), "US");
        assert_eq!(details.certificate.as_ref().unwrap().certificate, "TV-MA");

        let details = TvDetails::compose(detail, "FR");
        assert_eq!(details.certificate.as_ref().unwrap().iso_3166_1, "DE");
        assert_eq!(details.content_ratings.len(), 2);
    }

    fn work(id: i64, popularity: f64, vote_count: i64, release: &str) -> CreditedWork {
        CreditedWork {
            id,
            media_type: MediaType::Movie,
            popularity,
            vote_count,
            vote_average: 7.0,
            release_date: Some(release.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_person_details_combine_credits() {
        let detail = PersonDetail {
            info: PersonInfo {
                id: 6193,
                name: Some("Leonardo DiCaprio".into()),
                ..Default::default()
            },
            combined_credits: PersonCredits {
                cast: vec![
                    CastCredit {
                        work: work(1, 10.0, 100, "2010-07-15"),
                        character: Some("Cobb".into()),
                        ..Default::default()
                    },
                    CastCredit {
                        work: work(2, 10.0, 900, "1997-11-18"),
                        character: Some("Jack".into()),
                        ..Default::default()
                    },
                    CastCredit {
                        work: work(1, 10.0, 100, "2010-07-15"),
                        character: Some("Dom".into()),
                        ..Default::default()
                    },
                ],
                crew: vec![
                    CrewCredit {
                        work: work(3, 5.0, 10, "2015-12-25"),
                        job: Some("Producer".into()),
                        department: Some("Production".into()),
                        ..Default::default()
                    },
                    CrewCredit {
                        work: work(4, 5.0, 10, "2019-01-01"),
                        job: Some("Thanks".into()),
                        ..Default::default()
                    },
                ],
            },
        };

        let details = PersonDetails::compose(detail, now());
        assert_eq!(details.combine_cast.len(), 2);
        assert_eq!(details.combine_cast[0].work.id, 1);
        assert_eq!(details.combine_cast[0].roles.len(), 2);
        assert_eq!(details.popular_cast[0].work.id, 2);

        let keys: Vec<_> = details
            .crew_by_department
            .iter()
            .map(|g| g.key.as_str())
            .collect();
        assert_eq!(keys, vec!["crew", "Production"]);

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["name"], "Leonardo DiCaprio");
        assert!(json.get("combined_credits").is_none());
        assert_eq!(json["combine_cast"][0]["roles"][1]["character"], "Dom");
    }

    #[test]
    fn test_movie_credits_group_crew() {
        let credits = Credits {
            id: Some(1),
            cast: vec![],
            crew: vec![
                Crew {
                    id: 1,
                    department: Some("Directing".into()),
                    ..Default::default()
                },
                Crew {
                    id: 2,
                    department: None,
                    ..Default::default()
                },
                Crew {
                    id: 3,
                    department: Some("Directing".into()),
                    ..Default::default()
                },
            ],
        };
        let view = MovieCredits::compose(credits);
        assert_eq!(view.crew.len(), 2);
        assert_eq!(view.crew[0].key, "Directing");
        assert_eq!(view.crew[0].items.len(), 2);
        assert_eq!(view.crew[1].key, "crew");
    }

    #[test]
    fn test_collection_means() {
        let collection = CollectionDetail {
            id: 10,
            parts: vec![
                MediaSummary {
                    vote_average: 8.0,
                    vote_count: 100,
                    ..Default::default()
                },
                MediaSummary {
                    vote_average: 6.0,
                    vote_count: 300,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let details = CollectionDetails::compose(collection);
        assert_eq!(details.vote_average, Some(7.0));
        assert_eq!(details.vote_count, Some(200.0));

        let empty = CollectionDetails::compose(CollectionDetail::default());
        assert_eq!(empty.vote_average, None);
    }

    #[test]
    fn test_page_view_adds_pagination() {
        let paged = Paged {
            page: 1,
            results: vec![MediaSummary::default()],
            total_pages: 10,
            total_results: 200,
        };
        let view = PageView::from(paged);
        assert_eq!(view.pagination.next, Some(2));
        assert_eq!(view.pagination.items[3], PageItem::Ellipsis);
    }
}
