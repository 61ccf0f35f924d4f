use crate::dataset::de::{null_as_default, null_as_empty, string_or_number};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Legislative chamber as stored in the roster feed.
///
/// Values other than `House` and `Senate` are kept verbatim so that filtering can
/// compare against the literal stored value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Chamber {
    House,
    Senate,
    Unrecognized(String),
}

impl Chamber {
    pub fn parse(value: &str) -> Self {
        match value {
            "House" => Self::House,
            "Senate" => Self::Senate,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::House => "House",
            Self::Senate => "Senate",
            Self::Unrecognized(value) => value,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Display label; an empty stored value reads as `Unknown`.
    pub fn label(&self) -> &str {
        match self.as_str() {
            "" => "Unknown",
            value => value,
        }
    }
}

impl Default for Chamber {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<Option<String>> for Chamber {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::parse).unwrap_or_default()
    }
}

impl From<Chamber> for String {
    fn from(value: Chamber) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const INDEPENDENT_LABEL: &str = "Independent";

/// One elected official from the roster feed. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Official {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub chamber: Chamber,
    #[serde(default)]
    pub electorate: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

impl Official {
    /// Party, treating an empty string the same as an absent one.
    pub fn party(&self) -> Option<&str> {
        self.party.as_deref().filter(|party| !party.is_empty())
    }

    pub fn party_label(&self) -> &str {
        self.party().unwrap_or(INDEPENDENT_LABEL)
    }

    pub fn electorate_label(&self) -> &str {
        self.electorate.as_deref().unwrap_or_default()
    }

    /// Lower-cased `name party electorate`, joined with single spaces.
    pub fn search_blob(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.party.as_deref().unwrap_or_default(),
            self.electorate_label()
        )
        .to_lowercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investment {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub asset: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEvent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correlation {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub policy: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub asset: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub details: String,
}

/// Disclosed interests for one official, keyed by official id in [`ProfileMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub policies: Vec<PolicyEvent>,
    #[serde(default)]
    pub correlations: Vec<Correlation>,
}

pub type ProfileMap = HashMap<String, Profile>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chamber_keeps_unrecognized_literal() {
        let official: Official = serde_json::from_value(json!({
            "id": 7,
            "name": "Pat Doe",
            "chamber": "house"
        }))
        .expect("official decodes");
        assert_eq!(official.id, "7");
        assert_eq!(official.chamber, Chamber::Unrecognized("house".to_string()));
        assert_eq!(official.chamber.as_str(), "house");
        assert!(!official.chamber.is_recognized());
    }

    #[test]
    fn missing_or_null_chamber_reads_as_unknown() {
        let missing: Official =
            serde_json::from_value(json!({ "id": "a", "name": "A" })).expect("decodes");
        let null: Official =
            serde_json::from_value(json!({ "id": "b", "name": "B", "chamber": null }))
                .expect("decodes");
        assert_eq!(missing.chamber.label(), "Unknown");
        assert_eq!(null.chamber, Chamber::default());
        assert!(!missing.featured);
    }

    #[test]
    fn null_featured_flag_reads_as_not_featured() {
        let official: Official = serde_json::from_value(json!({
            "id": "c",
            "name": "C",
            "chamber": "Senate",
            "featured": null
        }))
        .expect("decodes");
        assert!(!official.featured);
    }

    #[test]
    fn chamber_serializes_as_plain_string() {
        let value = serde_json::to_value(Chamber::Senate).expect("serializes");
        assert_eq!(value, json!("Senate"));
    }

    #[test]
    fn empty_party_is_independent() {
        let official: Official = serde_json::from_value(json!({
            "id": "x",
            "name": "Sam Lee",
            "party": "",
            "chamber": "House"
        }))
        .expect("decodes");
        assert_eq!(official.party(), None);
        assert_eq!(official.party_label(), INDEPENDENT_LABEL);
    }

    #[test]
    fn search_blob_joins_fields_with_spaces() {
        let official = Official {
            id: "1".to_string(),
            name: "Jane SMITH".to_string(),
            party: Some("Greens".to_string()),
            chamber: Chamber::House,
            electorate: None,
            featured: false,
        };
        assert_eq!(official.search_blob(), "jane smith greens ");
    }

    #[test]
    fn profile_defaults_missing_collections() {
        let profile: Profile =
            serde_json::from_value(json!({ "investments": [{ "asset": "BHP", "date": null }] }))
                .expect("decodes");
        assert_eq!(profile.investments.len(), 1);
        assert_eq!(profile.investments[0].date, "");
        assert!(profile.policies.is_empty());
        assert!(profile.correlations.is_empty());
    }
}
