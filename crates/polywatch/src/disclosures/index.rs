use super::domain::{DisclosureDataset, DisclosureDocument};
use super::normalizer::surname_key;
use crate::roster::{Chamber, Official};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Read-only lookup from an official to candidate disclosure filings.
///
/// House filings are a multimap on the normalized surname key; officials sharing a
/// surname all receive every filing under that key. Senate filings are not
/// attributed per member in the feed, so every Senate official receives the whole
/// chamber-wide list.
#[derive(Debug, Clone, Default)]
pub struct DisclosureIndex {
    house: HashMap<String, Vec<DisclosureDocument>>,
    senate: Vec<DisclosureDocument>,
}

/// Candidate filings for one official.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisclosureMatches<'a> {
    pub house_docs: &'a [DisclosureDocument],
    pub senate_docs: &'a [DisclosureDocument],
}

impl<'a> DisclosureMatches<'a> {
    pub const EMPTY: DisclosureMatches<'static> = DisclosureMatches {
        house_docs: &[],
        senate_docs: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.house_docs.is_empty() && self.senate_docs.is_empty()
    }

    pub fn first_house_url(&self) -> Option<&'a str> {
        self.house_docs.first().map(|doc| doc.url.as_str())
    }
}

impl DisclosureIndex {
    /// Builds the index, re-keying House entries through the same surname pipeline
    /// used for lookups. Entries whose keys collapse together are merged in order.
    pub fn new(dataset: DisclosureDataset) -> Self {
        let mut house: HashMap<String, Vec<DisclosureDocument>> = HashMap::new();
        let mut merged = 0usize;

        for (raw_key, documents) in dataset.house {
            let key = surname_key(&raw_key);
            if key.is_empty() {
                debug!(%raw_key, "skipping disclosure entry without a usable surname");
                continue;
            }
            let bucket = house.entry(key).or_default();
            if !bucket.is_empty() {
                merged += 1;
            }
            bucket.extend(documents);
        }

        debug!(
            house_keys = house.len(),
            merged_keys = merged,
            senate_documents = dataset.senate.len(),
            "disclosure index built"
        );

        Self {
            house,
            senate: dataset.senate,
        }
    }

    pub fn documents_for(&self, official: &Official) -> DisclosureMatches<'_> {
        match official.chamber {
            Chamber::House => DisclosureMatches {
                house_docs: self.house_documents(&surname_key(&official.name)),
                senate_docs: &[],
            },
            Chamber::Senate => DisclosureMatches {
                house_docs: &[],
                senate_docs: &self.senate,
            },
            Chamber::Unrecognized(_) => DisclosureMatches::EMPTY,
        }
    }

    pub fn house_documents(&self, key: &str) -> &[DisclosureDocument] {
        self.house.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn senate_documents(&self) -> &[DisclosureDocument] {
        &self.senate
    }

    pub fn house_key_count(&self) -> usize {
        self.house.len()
    }
}
