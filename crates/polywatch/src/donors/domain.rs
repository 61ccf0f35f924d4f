use crate::dataset::de::{null_as_empty, string_or_number};
use serde::{Deserialize, Serialize};

/// One contributor line. `amount` is `None` when undisclosed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTotal {
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Contributions received by one party; `top_donors` arrives sorted by the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyDonorProfile {
    pub party: String,
    #[serde(default)]
    pub top_donors: Vec<DonorRecord>,
    #[serde(default)]
    pub yearly_totals: Vec<YearlyTotal>,
}

/// `donors.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DonorDataset {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub financial_year: String,
    #[serde(default)]
    pub parties: Vec<PartyDonorProfile>,
}

impl DonorDataset {
    pub fn party(&self, name: &str) -> Option<&PartyDonorProfile> {
        self.parties.iter().find(|profile| profile.party == name)
    }

    pub fn party_names(&self) -> Vec<&str> {
        self.parties
            .iter()
            .map(|profile| profile.party.as_str())
            .collect()
    }

    pub fn meta_line(&self) -> String {
        format!(
            "Source: {} · Financial year: {}",
            self.source, self.financial_year
        )
    }
}
