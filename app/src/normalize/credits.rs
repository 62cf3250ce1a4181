use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::tmdb::types::{CastCredit, CreditedWork, CrewCredit, MediaRef};

/// Size of the "popular" rankings.
pub const POPULAR_LIMIT: usize = 10;

/// One character played by a person in a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastRole {
    pub credit_id: Option<String>,
    pub character: Option<String>,
    pub episode_count: Option<i64>,
    pub order: Option<i64>,
}

/// One job done by a person on a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewJob {
    pub credit_id: Option<String>,
    pub job: Option<String>,
    pub episode_count: Option<i64>,
    pub order: Option<i64>,
}

/// All cast appearances of a person in one title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedCast {
    #[serde(flatten)]
    pub work: CreditedWork,
    pub roles: Vec<CastRole>,
}

/// All crew appearances of a person in one title. `department` is the one of
/// the first appearance seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedCrew {
    #[serde(flatten)]
    pub work: CreditedWork,
    pub department: Option<String>,
    pub jobs: Vec<CrewJob>,
}

/// A raw per-role credit that can be folded into a per-title entry.
pub trait Appearance {
    type Entry;
    type Combined: Credited;

    fn media_ref(&self) -> MediaRef;
    fn entry(&self) -> Self::Entry;
    fn into_combined(self) -> Self::Combined;
}

/// A per-title credit entry.
pub trait Credited {
    type Entry;

    fn work(&self) -> &CreditedWork;
    fn push(&mut self, entry: Self::Entry);
}

impl Appearance for CastCredit {
    type Entry = CastRole;
    type Combined = CombinedCast;

    fn media_ref(&self) -> MediaRef {
        self.work.media_ref()
    }

    fn entry(&self) -> CastRole {
        CastRole {
            credit_id: self.credit_id.clone(),
            character: self.character.clone(),
            episode_count: self.episode_count,
            order: self.order,
        }
    }

    fn into_combined(self) -> CombinedCast {
        let role = self.entry();
        CombinedCast {
            work: self.work,
            roles: vec![role],
        }
    }
}

impl Credited for CombinedCast {
    type Entry = CastRole;

    fn work(&self) -> &CreditedWork {
        &self.work
    }

    fn push(&mut self, entry: CastRole) {
        self.roles.push(entry);
    }
}

impl Appearance for CrewCredit {
    type Entry = CrewJob;
    type Combined = CombinedCrew;

    fn media_ref(&self) -> MediaRef {
        self.work.media_ref()
    }

    fn entry(&self) -> CrewJob {
        CrewJob {
            credit_id: self.credit_id.clone(),
            job: self.job.clone(),
            episode_count: self.episode_count,
            order: self.order,
        }
    }

    fn into_combined(self) -> CombinedCrew {
        let job = self.entry();
        CombinedCrew {
            work: self.work,
            department: self.department,
            jobs: vec![job],
        }
    }
}

impl Credited for CombinedCrew {
    type Entry = CrewJob;

    fn work(&self) -> &CreditedWork {
        &self.work
    }

    fn push(&mut self, entry: CrewJob) {
        self.jobs.push(entry);
    }
}

/// Fold per-role credits into one entry per (title id, media type).
///
/// Entries come out in the order their title was first seen. Later credits for
/// an already seen title only contribute their role/job, appended in arrival
/// order; their shared title fields are dropped.
pub fn combine<A>(credits: Vec<A>) -> Vec<A::Combined>
where
    A: Appearance,
    A::Combined: Credited<Entry = A::Entry>,
{
    let mut index: HashMap<MediaRef, usize> = HashMap::with_capacity(credits.len());
    let mut combined: Vec<A::Combined> = Vec::new();

    for credit in credits {
        let key = credit.media_ref();
        match index.get(&key) {
            Some(&slot) => combined[slot].push(credit.entry()),
            None => {
                index.insert(key, combined.len());
                combined.push(credit.into_combined());
            }
        }
    }

    combined
}

/// `vote_count * vote_average / popularity`.
///
/// A zero popularity gives positive infinity when there are votes, so such a
/// title ranks first. A title with no votes and no popularity scores zero.
pub fn popularity_score(work: &CreditedWork) -> f64 {
    let score = work.vote_count as f64 * work.vote_average / work.popularity;
    if score.is_nan() {
        0.0
    } else {
        score
    }
}

/// The [`POPULAR_LIMIT`] best scoring credits, highest score first. Equal
/// scores keep their input order.
pub fn popular<T: Credited + Clone>(credits: &[T]) -> Vec<T> {
    let mut ranked = credits.to_vec();
    ranked.sort_by(|a, b| popularity_score(b.work()).total_cmp(&popularity_score(a.work())));
    ranked.truncate(POPULAR_LIMIT);
    ranked
}

fn parse_date(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?.trim();
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Date a credit is ordered by: release date, then first air date, then `now`.
pub fn credit_date(work: &CreditedWork, now: DateTime<Utc>) -> DateTime<Utc> {
    parse_date(work.release_date.as_deref())
        .or_else(|| parse_date(work.first_air_date.as_deref()))
        .unwrap_or(now)
}

/// All credits, most recent first. Undated credits count as released `now`,
/// so they come before anything already out.
pub fn chronological<T: Credited>(mut credits: Vec<T>, now: DateTime<Utc>) -> Vec<T> {
    credits.sort_by_key(|credit| Reverse(credit_date(credit.work(), now)));
    credits
}

/// A person's credits merged per title and ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedCredits {
    pub cast: Vec<CombinedCast>,
    pub crew: Vec<CombinedCrew>,
    pub popular_cast: Vec<CombinedCast>,
    pub popular_crew: Vec<CombinedCrew>,
}

impl CombinedCredits {
    pub fn build(cast: Vec<CastCredit>, crew: Vec<CrewCredit>, now: DateTime<Utc>) -> Self {
        let cast = combine(cast);
        let crew = combine(crew);
        let popular_cast = popular(&cast);
        let popular_crew = popular(&crew);

        Self {
            cast: chronological(cast, now),
            crew: chronological(crew, now),
            popular_cast,
            popular_crew,
        }
    }
}
