//! One-time startup load of the JSON feeds.
//!
//! The five feeds are fetched concurrently. Roster, profiles and metadata are
//! mandatory: any fetch or parse failure aborts the load with a single
//! [`LoadError`]. Donor and disclosure feeds are optional: a failure is logged
//! and the dependent panel degrades to its empty state.

pub(crate) mod de;
mod source;

pub use source::{DocumentSource, FileSource, MemorySource, SourceError};

use crate::disclosures::DisclosureDataset;
use crate::donors::DonorDataset;
use crate::roster::{Official, ProfileMap};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

pub const ROSTER_DOCUMENT: &str = "politicians.json";
pub const PROFILES_DOCUMENT: &str = "profiles.json";
pub const META_DOCUMENT: &str = "meta.json";
pub const DONORS_DOCUMENT: &str = "donors.json";
pub const DISCLOSURES_DOCUMENT: &str = "disclosures.json";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to retrieve {source_name}: {source}")]
    Fetch {
        source_name: &'static str,
        #[source]
        source: SourceError,
    },
    #[error("failed to parse {source_name}: {source}")]
    Parse {
        source_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// `meta.json`; only the generation timestamp is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DatasetMeta {
    #[serde(default, deserialize_with = "de::lenient_timestamp")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl DatasetMeta {
    pub fn freshness(&self) -> Option<NaiveDate> {
        self.generated_at.map(|timestamp| timestamp.date_naive())
    }
}

/// Every feed, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub roster: Vec<Official>,
    pub profiles: ProfileMap,
    pub meta: DatasetMeta,
    pub donors: Option<DonorDataset>,
    pub disclosures: Option<DisclosureDataset>,
}

impl Dataset {
    pub async fn load<S: DocumentSource>(source: &S) -> Result<Self, LoadError> {
        let (roster, profiles, meta, donors, disclosures) = tokio::join!(
            fetch_json::<_, Vec<Official>>(source, ROSTER_DOCUMENT),
            fetch_json::<_, ProfileMap>(source, PROFILES_DOCUMENT),
            fetch_json::<_, DatasetMeta>(source, META_DOCUMENT),
            fetch_json::<_, DonorDataset>(source, DONORS_DOCUMENT),
            fetch_json::<_, DisclosureDataset>(source, DISCLOSURES_DOCUMENT),
        );

        let dataset = Self {
            roster: roster?,
            profiles: profiles?,
            meta: meta?,
            donors: optional(donors),
            disclosures: optional(disclosures),
        };

        info!(
            officials = dataset.roster.len(),
            profiles = dataset.profiles.len(),
            donor_parties = dataset.donors.as_ref().map_or(0, |d| d.parties.len()),
            disclosures_loaded = dataset.disclosures.is_some(),
            "dataset loaded"
        );

        Ok(dataset)
    }
}

async fn fetch_json<S, T>(source: &S, name: &'static str) -> Result<T, LoadError>
where
    S: DocumentSource,
    T: DeserializeOwned,
{
    let body = source
        .fetch(name)
        .await
        .map_err(|source| LoadError::Fetch {
            source_name: name,
            source,
        })?;
    serde_json::from_slice(&body).map_err(|source| LoadError::Parse {
        source_name: name,
        source,
    })
}

fn optional<T>(result: Result<T, LoadError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(%error, "optional source unavailable; panel degrades to empty");
            None
        }
    }
}
