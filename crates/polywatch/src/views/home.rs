use crate::donors::{DonorPanelState, DonorPanelView};
use crate::roster::{Chamber, FilterPredicate, Official};
use chrono::NaiveDate;
use serde::Serialize;

pub const FEATURED_LIMIT: usize = 5;
pub const POPULAR_LIMIT: usize = 6;
pub const PARTY_BREAKDOWN_LIMIT: usize = 8;
pub const PROFILE_ROUTE: &str = "profile.html?id=";

/// Mutable inputs of the home screen: roster filter and donor panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeViewState {
    pub filter: FilterPredicate,
    pub donors: DonorPanelState,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChamberCounts {
    pub total: usize,
    pub house: usize,
    pub senate: usize,
}

impl ChamberCounts {
    pub fn tally(roster: &[Official]) -> Self {
        roster.iter().fold(
            Self {
                total: roster.len(),
                ..Self::default()
            },
            |mut counts, official| {
                match official.chamber {
                    Chamber::House => counts.house += 1,
                    Chamber::Senate => counts.senate += 1,
                    Chamber::Unrecognized(_) => {}
                }
                counts
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyCount {
    pub party: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub href: String,
    pub external: bool,
}

impl CardLink {
    pub fn disclosure(url: &str) -> Self {
        Self {
            href: url.to_string(),
            external: url.ends_with(".pdf"),
        }
    }

    pub fn profile(id: &str) -> Self {
        Self {
            href: format!("{PROFILE_ROUTE}{id}"),
            external: false,
        }
    }
}

/// Display-ready roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficialCard {
    pub id: String,
    pub name: String,
    pub party: String,
    pub chamber: String,
    pub electorate: String,
    pub featured: bool,
    pub link: CardLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterView {
    pub count: usize,
    pub officials: Vec<OfficialCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub totals: ChamberCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freshness: Option<NaiveDate>,
    pub parties: Vec<String>,
    pub featured: Vec<OfficialCard>,
    pub popular: Vec<OfficialCard>,
    pub party_breakdown: Vec<PartyCount>,
    pub results: RosterView,
    /// `None` when the donor feed is unavailable; the panel is hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donors: Option<DonorPanelView>,
}
