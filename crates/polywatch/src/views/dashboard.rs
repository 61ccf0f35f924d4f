use super::home::{
    CardLink, ChamberCounts, HomeView, HomeViewState, OfficialCard, PartyCount, RosterView,
    FEATURED_LIMIT, PARTY_BREAKDOWN_LIMIT, POPULAR_LIMIT,
};
use super::profile::{DisclosurePanel, ProfileCounts, ProfileSummary, ProfileTable, ProfileView};
use crate::dataset::{Dataset, DatasetMeta};
use crate::disclosures::{DisclosureIndex, DisclosureMatches};
use crate::donors::{DonorDataset, DonorPanelState, DonorPanelView};
use crate::roster::{FilterPredicate, Official, Profile, ProfileMap, RosterFilter};
use std::collections::BTreeSet;

/// Composition root: owns the loaded feeds and derives both screens.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    roster: Vec<Official>,
    profiles: ProfileMap,
    meta: DatasetMeta,
    donors: Option<DonorDataset>,
    disclosures: Option<DisclosureIndex>,
}

impl Dashboard {
    pub fn new(dataset: Dataset) -> Self {
        let Dataset {
            roster,
            profiles,
            meta,
            donors,
            disclosures,
        } = dataset;

        Self {
            roster,
            profiles,
            meta,
            donors,
            disclosures: disclosures.map(DisclosureIndex::new),
        }
    }

    pub fn roster(&self) -> &[Official] {
        &self.roster
    }

    pub fn official(&self, id: &str) -> Option<&Official> {
        self.roster.iter().find(|official| official.id == id)
    }

    pub fn profile_for(&self, id: &str) -> Option<&Profile> {
        self.profiles.get(id)
    }

    pub fn donors(&self) -> Option<&DonorDataset> {
        self.donors.as_ref()
    }

    /// `None` when the disclosure feed is unavailable.
    pub fn documents_for(&self, official: &Official) -> Option<DisclosureMatches<'_>> {
        self.disclosures
            .as_ref()
            .map(|index| index.documents_for(official))
    }

    pub fn card(&self, official: &Official) -> OfficialCard {
        let link = self
            .documents_for(official)
            .and_then(|matches| matches.first_house_url())
            .map(CardLink::disclosure)
            .unwrap_or_else(|| CardLink::profile(&official.id));

        OfficialCard {
            id: official.id.clone(),
            name: official.name.clone(),
            party: official.party_label().to_string(),
            chamber: official.chamber.as_str().to_string(),
            electorate: official.electorate_label().to_string(),
            featured: official.featured,
            link,
        }
    }

    pub fn roster_view(&self, predicate: &FilterPredicate) -> RosterView {
        let filtered = RosterFilter::apply(&self.roster, predicate);
        RosterView {
            count: filtered.count(),
            officials: filtered.iter().map(|official| self.card(official)).collect(),
        }
    }

    /// Distinct non-empty party names, sorted.
    pub fn parties(&self) -> Vec<String> {
        self.roster
            .iter()
            .filter_map(Official::party)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Featured officials in roster order, capped at `limit`.
    pub fn featured(&self, limit: usize) -> Vec<OfficialCard> {
        self.roster
            .iter()
            .filter(|official| official.featured)
            .take(limit)
            .map(|official| self.card(official))
            .collect()
    }

    /// Officials per party label in first-seen order.
    pub fn party_breakdown(&self) -> Vec<PartyCount> {
        let mut counts: Vec<PartyCount> = Vec::new();
        for official in &self.roster {
            let label = official.party_label();
            match counts.iter_mut().find(|entry| entry.party == label) {
                Some(entry) => entry.count += 1,
                None => counts.push(PartyCount {
                    party: label.to_string(),
                    count: 1,
                }),
            }
        }
        counts.truncate(PARTY_BREAKDOWN_LIMIT);
        counts
    }

    pub fn donor_panel(&self, state: &DonorPanelState) -> Option<DonorPanelView> {
        self.donors
            .as_ref()
            .map(|dataset| DonorPanelView::build(dataset, state))
    }

    pub fn home(&self, state: &HomeViewState) -> HomeView {
        HomeView {
            totals: ChamberCounts::tally(&self.roster),
            freshness: self.meta.freshness(),
            parties: self.parties(),
            featured: self.featured(FEATURED_LIMIT),
            popular: self.featured(POPULAR_LIMIT),
            party_breakdown: self.party_breakdown(),
            results: self.roster_view(&state.filter),
            donors: self.donor_panel(&state.donors),
        }
    }

    /// `None` for an unknown id; nothing is rendered in that case.
    pub fn profile(&self, id: &str) -> Option<ProfileView> {
        let official = self.official(id)?;
        let empty = Profile::default();
        let profile = self.profile_for(id).unwrap_or(&empty);

        Some(ProfileView {
            summary: ProfileSummary {
                id: official.id.clone(),
                name: official.name.clone(),
                party: official.party_label().to_string(),
                electorate: official.electorate_label().to_string(),
                chamber: official.chamber.label().to_string(),
            },
            counts: ProfileCounts {
                investments: profile.investments.len(),
                policies: profile.policies.len(),
                flags: profile.correlations.len(),
            },
            investments: ProfileTable::from_rows(&profile.investments),
            policies: ProfileTable::from_rows(&profile.policies),
            correlations: ProfileTable::from_rows(&profile.correlations),
            disclosures: DisclosurePanel::from_matches(self.documents_for(official)),
        })
    }
}
