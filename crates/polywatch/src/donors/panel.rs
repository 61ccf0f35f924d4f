use super::aggregator::{DonorAggregator, TrendSeries};
use super::currency::format_currency;
use super::domain::{DonorDataset, DonorRecord};
use serde::{Deserialize, Serialize};

pub const NO_DONOR_DATA_MESSAGE: &str = "Select a party to see the top disclosed donors.";

/// Whether the overflow donors are revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reveal {
    #[default]
    Collapsed,
    Expanded,
}

impl Reveal {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// Label of the control that flips to the other state.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Collapsed => "Show more",
            Self::Expanded => "Show less",
        }
    }

    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

impl From<bool> for Reveal {
    fn from(expanded: bool) -> Self {
        if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }
}

/// Party selection and reveal flag owned by the donor panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorPanelState {
    selected_party: Option<String>,
    reveal: Reveal,
}

impl DonorPanelState {
    pub fn new(selected_party: Option<String>, reveal: Reveal) -> Self {
        Self {
            selected_party: selected_party.filter(|party| !party.is_empty()),
            reveal,
        }
    }

    /// Any selection collapses the overflow. An empty name clears the selection.
    pub fn select_party(&mut self, party: impl Into<String>) {
        let party = party.into();
        self.selected_party = (!party.is_empty()).then_some(party);
        self.reveal = Reveal::Collapsed;
    }

    pub fn expand(&mut self) {
        self.reveal = Reveal::Expanded;
    }

    pub fn collapse(&mut self) {
        self.reveal = Reveal::Collapsed;
    }

    pub fn toggle(&mut self) {
        self.reveal = self.reveal.toggled();
    }

    pub fn selected_party(&self) -> Option<&str> {
        self.selected_party.as_deref()
    }

    pub fn reveal(&self) -> Reveal {
        self.reveal
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonorCard {
    pub name: String,
    pub amount: Option<f64>,
    pub amount_label: String,
    pub overflow: bool,
}

impl DonorCard {
    fn from_record(record: &DonorRecord, overflow: bool) -> Self {
        Self {
            name: record.name.clone(),
            amount: record.amount,
            amount_label: format_currency(record.amount),
            overflow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealToggle {
    pub reveal: Reveal,
    pub label: &'static str,
    pub hidden_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DonorPanelContent {
    NoData {
        message: &'static str,
    },
    Populated {
        donors: Vec<DonorCard>,
        #[serde(skip_serializing_if = "Option::is_none")]
        toggle: Option<RevealToggle>,
        trend: TrendSeries,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonorPanelView {
    pub meta: String,
    pub party_options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_party: Option<String>,
    pub content: DonorPanelContent,
}

impl DonorPanelView {
    pub fn build(dataset: &DonorDataset, state: &DonorPanelState) -> Self {
        let breakdown = state
            .selected_party()
            .and_then(|party| dataset.party(party))
            .map(DonorAggregator::aggregate)
            .filter(|breakdown| breakdown.has_data());

        let content = match breakdown {
            None => DonorPanelContent::NoData {
                message: NO_DONOR_DATA_MESSAGE,
            },
            Some(breakdown) => {
                let reveal = state.reveal();
                let mut donors: Vec<DonorCard> = breakdown
                    .primary
                    .iter()
                    .map(|record| DonorCard::from_record(record, false))
                    .collect();
                if reveal.is_expanded() {
                    donors.extend(
                        breakdown
                            .overflow
                            .iter()
                            .map(|record| DonorCard::from_record(record, true)),
                    );
                }
                let toggle = (!breakdown.overflow.is_empty()).then(|| RevealToggle {
                    reveal,
                    label: reveal.toggle_label(),
                    hidden_count: if reveal.is_expanded() {
                        0
                    } else {
                        breakdown.overflow.len()
                    },
                });
                DonorPanelContent::Populated {
                    donors,
                    toggle,
                    trend: breakdown.trend,
                }
            }
        };

        Self {
            meta: dataset.meta_line(),
            party_options: dataset
                .party_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            selected_party: state.selected_party().map(str::to_string),
            content,
        }
    }

    pub fn has_data(&self) -> bool {
        matches!(self.content, DonorPanelContent::Populated { .. })
    }
}
