use crate::disclosures::DisclosureMatches;
use crate::roster::{Correlation, Investment, PolicyEvent};
use serde::Serialize;

pub const EMPTY_TABLE_MESSAGE: &str = "No records disclosed yet.";
pub const NO_DOCUMENT_MESSAGE: &str = "No disclosure document found for this name.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub id: String,
    pub name: String,
    pub party: String,
    pub electorate: String,
    pub chamber: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProfileCounts {
    pub investments: usize,
    pub policies: usize,
    pub flags: usize,
}

/// Rows of one profile table, or the empty-state message when there are none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileTable<T> {
    pub rows: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<&'static str>,
}

impl<T: Clone> ProfileTable<T> {
    pub fn from_rows(rows: &[T]) -> Self {
        Self {
            rows: rows.to_vec(),
            empty_state: rows.is_empty().then_some(EMPTY_TABLE_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisclosureLink {
    pub chamber: &'static str,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DisclosurePanel {
    /// The disclosure feed is unavailable.
    Hidden,
    NotFound { message: &'static str },
    Links { links: Vec<DisclosureLink> },
}

impl DisclosurePanel {
    pub fn from_matches(matches: Option<DisclosureMatches<'_>>) -> Self {
        let Some(matches) = matches else {
            return Self::Hidden;
        };
        if matches.is_empty() {
            return Self::NotFound {
                message: NO_DOCUMENT_MESSAGE,
            };
        }

        let house = matches.house_docs.iter().map(|doc| DisclosureLink {
            chamber: "House",
            label: format!("{} (House)", doc.label.as_deref().unwrap_or("Disclosure")),
            url: doc.url.clone(),
        });
        let senate = matches
            .senate_docs
            .iter()
            .enumerate()
            .map(|(index, doc)| DisclosureLink {
                chamber: "Senate",
                label: format!("Senate Register PDF {}", index + 1),
                url: doc.url.clone(),
            });

        Self::Links {
            links: house.chain(senate).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub summary: ProfileSummary,
    pub counts: ProfileCounts,
    pub investments: ProfileTable<Investment>,
    pub policies: ProfileTable<PolicyEvent>,
    pub correlations: ProfileTable<Correlation>,
    pub disclosures: DisclosurePanel,
}
