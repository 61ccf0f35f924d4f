use super::domain::Official;
use serde::{Deserialize, Serialize};

/// Combined roster predicate. Empty fields place no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPredicate {
    pub text: String,
    pub party: String,
    pub chamber: String,
}

/// A single user input change driving a recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterInput {
    Text(String),
    Party(String),
    Chamber(String),
}

impl FilterPredicate {
    pub fn new(
        text: impl Into<String>,
        party: impl Into<String>,
        chamber: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            party: party.into(),
            chamber: chamber.into(),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.text.is_empty() && self.party.is_empty() && self.chamber.is_empty()
    }

    pub fn apply_input(&mut self, input: FilterInput) {
        match input {
            FilterInput::Text(text) => self.text = text,
            FilterInput::Party(party) => self.party = party,
            FilterInput::Chamber(chamber) => self.chamber = chamber,
        }
    }

    pub fn matches(&self, official: &Official) -> bool {
        self.matches_with_term(official, &self.text.to_lowercase())
    }

    fn matches_with_term(&self, official: &Official, term: &str) -> bool {
        (term.is_empty() || official.search_blob().contains(term))
            && (self.party.is_empty() || official.party.as_deref() == Some(self.party.as_str()))
            && (self.chamber.is_empty() || official.chamber.as_str() == self.chamber)
    }
}

/// Evaluates a [`FilterPredicate`] against a roster, preserving roster order.
pub struct RosterFilter;

impl RosterFilter {
    pub fn apply<'a>(roster: &'a [Official], predicate: &FilterPredicate) -> FilteredRoster<'a> {
        let term = predicate.text.to_lowercase();
        let officials = roster
            .iter()
            .filter(|official| predicate.matches_with_term(official, &term))
            .collect();
        FilteredRoster { officials }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredRoster<'a> {
    officials: Vec<&'a Official>,
}

impl<'a> FilteredRoster<'a> {
    pub fn count(&self) -> usize {
        self.officials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.officials.is_empty()
    }

    pub fn officials(&self) -> &[&'a Official] {
        &self.officials
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Official> + '_ {
        self.officials.iter().copied()
    }
}

/// Owns the predicate for one screen and replaces the result set on every input.
#[derive(Debug, Clone)]
pub struct LiveRoster<'a> {
    roster: &'a [Official],
    predicate: FilterPredicate,
    result: FilteredRoster<'a>,
}

impl<'a> LiveRoster<'a> {
    pub fn new(roster: &'a [Official]) -> Self {
        Self::with_predicate(roster, FilterPredicate::default())
    }

    pub fn with_predicate(roster: &'a [Official], predicate: FilterPredicate) -> Self {
        let result = RosterFilter::apply(roster, &predicate);
        Self {
            roster,
            predicate,
            result,
        }
    }

    pub fn update(&mut self, input: FilterInput) -> &FilteredRoster<'a> {
        self.predicate.apply_input(input);
        self.result = RosterFilter::apply(self.roster, &self.predicate);
        &self.result
    }

    pub fn predicate(&self) -> &FilterPredicate {
        &self.predicate
    }

    pub fn result(&self) -> &FilteredRoster<'a> {
        &self.result
    }

    pub fn count(&self) -> usize {
        self.result.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::domain::Chamber;

    fn official(id: &str, name: &str, party: Option<&str>, chamber: Chamber) -> Official {
        Official {
            id: id.to_string(),
            name: name.to_string(),
            party: party.map(str::to_string),
            chamber,
            electorate: None,
            featured: false,
        }
    }

    fn roster() -> Vec<Official> {
        let mut items = vec![
            official("1", "Jane Smith", Some("Green"), Chamber::House),
            official("2", "Tom Brown", Some("Labor"), Chamber::Senate),
            official("3", "Ann Green", Some("Liberal"), Chamber::House),
            official("4", "Lee Wong", None, Chamber::Senate),
        ];
        items[1].electorate = Some("Victoria".to_string());
        items
    }

    #[test]
    fn empty_predicate_is_identity() {
        let roster = roster();
        let result = RosterFilter::apply(&roster, &FilterPredicate::default());
        let ids: Vec<_> = result.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(result.count(), roster.len());
    }

    #[test]
    fn chamber_mismatch_excludes_text_match() {
        let roster = vec![official("1", "Hon Jane O'Brien MP", Some("Green"), Chamber::House)];
        let predicate = FilterPredicate::new("green", "", "Senate");
        assert!(RosterFilter::apply(&roster, &predicate).is_empty());
    }

    #[test]
    fn text_is_case_insensitive_and_keeps_roster_order() {
        let roster = roster();
        let result = RosterFilter::apply(&roster, &FilterPredicate::new("GREEN", "", ""));
        let ids: Vec<_> = result.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn text_can_match_across_the_field_join() {
        let roster = roster();
        let result = RosterFilter::apply(&roster, &FilterPredicate::new("brown labor", "", ""));
        assert_eq!(result.count(), 1);
        assert_eq!(result.officials()[0].id, "2");
    }

    #[test]
    fn party_and_chamber_are_exact_and_case_sensitive() {
        let roster = roster();
        assert!(RosterFilter::apply(&roster, &FilterPredicate::new("", "green", "")).is_empty());
        assert!(RosterFilter::apply(&roster, &FilterPredicate::new("", "", "senate")).is_empty());

        let result = RosterFilter::apply(&roster, &FilterPredicate::new("", "Labor", "Senate"));
        assert_eq!(result.count(), 1);
    }

    #[test]
    fn every_result_satisfies_the_predicate() {
        let roster = roster();
        let predicate = FilterPredicate::new("e", "", "House");
        let result = RosterFilter::apply(&roster, &predicate);
        assert_eq!(result.count(), result.officials().len());
        assert!(result.iter().all(|official| predicate.matches(official)));
    }

    #[test]
    fn live_roster_replaces_results_on_each_input() {
        let roster = roster();
        let mut live = LiveRoster::new(&roster);
        assert_eq!(live.count(), 4);

        let labor = live.update(FilterInput::Party("Labor".to_string()));
        assert_eq!(labor.count(), 1);
        assert_eq!(labor.officials()[0].id, "2");
        assert_eq!(live.update(FilterInput::Party("Green".to_string())).count(), 1);
        assert_eq!(live.update(FilterInput::Chamber("Senate".to_string())).count(), 0);
        assert_eq!(live.update(FilterInput::Party(String::new())).count(), 2);
        assert_eq!(live.update(FilterInput::Text("wong".to_string())).count(), 1);
        assert_eq!(live.update(FilterInput::Chamber(String::new())).count(), 1);
        assert_eq!(live.update(FilterInput::Text(String::new())).count(), 4);
        assert!(live.predicate().is_unconstrained());
    }
}
