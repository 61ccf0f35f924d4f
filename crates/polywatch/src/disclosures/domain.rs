use crate::dataset::de::map_of_one_or_many;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A published financial-interest filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureDocument {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// `disclosures.json`: House filings keyed by surname, Senate filings chamber-wide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DisclosureDataset {
    #[serde(default, deserialize_with = "map_of_one_or_many")]
    pub house: BTreeMap<String, Vec<DisclosureDocument>>,
    #[serde(default)]
    pub senate: Vec<DisclosureDocument>,
}
