use crate::response::{SteamReview, VoteScore};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric Steam application identifier (e.g. `730` for Counter-Strike).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub u32);

#[derive(Debug, Error, PartialEq)]
#[error("invalid app id '{0}': expected a non-negative integer")]
pub struct ParseAppIdError(pub String);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppId {
    type Err = ParseAppIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(AppId)
            .map_err(|_| ParseAppIdError(s.to_string()))
    }
}

impl From<u32> for AppId {
    fn from(id: u32) -> Self {
        AppId(id)
    }
}

/// The stored subset of one review.
///
/// Both fields are always written; a value the API left out becomes `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub review: Option<String>,
    pub weighted_vote_score: Option<VoteScore>,
}

impl From<SteamReview> for ReviewRecord {
    fn from(review: SteamReview) -> Self {
        Self {
            review: review.review,
            weighted_vote_score: review.weighted_vote_score,
        }
    }
}

/// Reviews per app, in the order apps were first inserted.
///
/// Serializes as a JSON object keyed by the decimal app id. Re-inserting an
/// app replaces its records but keeps its original position, so output
/// order only ever depends on input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewCollection {
    entries: Vec<(AppId, Vec<ReviewRecord>)>,
}

impl ReviewCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `records` under `app_id`, returning the records it replaced.
    pub fn insert(&mut self, app_id: AppId, records: Vec<ReviewRecord>) -> Option<Vec<ReviewRecord>> {
        match self.entries.iter_mut().find(|(id, _)| *id == app_id) {
            Some((_, existing)) => Some(std::mem::replace(existing, records)),
            None => {
                self.entries.push((app_id, records));
                None
            }
        }
    }

    pub fn get(&self, app_id: AppId) -> Option<&[ReviewRecord]> {
        self.entries
            .iter()
            .find(|(id, _)| *id == app_id)
            .map(|(_, records)| records.as_slice())
    }

    pub fn contains(&self, app_id: AppId) -> bool {
        self.get(app_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn app_ids(&self) -> impl Iterator<Item = AppId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AppId, &[ReviewRecord])> {
        self.entries.iter().map(|(id, records)| (*id, records.as_slice()))
    }

    /// Total number of records across all apps.
    pub fn review_count(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }
}

impl Serialize for ReviewCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (app_id, records) in &self.entries {
            map.serialize_entry(&app_id.to_string(), records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ReviewCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ReviewCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of app id to review records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut collection = ReviewCollection::new();
                while let Some((key, records)) =
                    access.next_entry::<String, Vec<ReviewRecord>>()?
                {
                    let app_id = key.parse().map_err(serde::de::Error::custom)?;
                    collection.insert(app_id, records);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
