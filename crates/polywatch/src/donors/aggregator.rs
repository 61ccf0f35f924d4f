use super::domain::{DonorRecord, PartyDonorProfile};
use serde::Serialize;

/// Donors always visible before the reveal toggle.
pub const PRIMARY_DONOR_COUNT: usize = 5;

/// Parallel year/amount arrays for charting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendSeries {
    pub years: Vec<String>,
    pub amounts: Vec<Option<f64>>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// A party's donors split at [`PRIMARY_DONOR_COUNT`], in feed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DonorBreakdown<'a> {
    pub primary: &'a [DonorRecord],
    pub overflow: &'a [DonorRecord],
    pub trend: TrendSeries,
}

impl DonorBreakdown<'_> {
    pub fn has_data(&self) -> bool {
        !self.primary.is_empty()
    }
}

pub struct DonorAggregator;

impl DonorAggregator {
    /// Splits without re-sorting: amounts may be undisclosed, so the feed order
    /// is the only ranking available. A party without donors yields an empty
    /// breakdown, trend included.
    pub fn aggregate(profile: &PartyDonorProfile) -> DonorBreakdown<'_> {
        if profile.top_donors.is_empty() {
            return DonorBreakdown::default();
        }

        let split = profile.top_donors.len().min(PRIMARY_DONOR_COUNT);
        let (primary, overflow) = profile.top_donors.split_at(split);

        let (years, amounts) = profile
            .yearly_totals
            .iter()
            .map(|total| (total.year.clone(), total.amount))
            .unzip();

        DonorBreakdown {
            primary,
            overflow,
            trend: TrendSeries { years, amounts },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::donors::domain::YearlyTotal;

    fn donor(name: &str, amount: Option<f64>) -> DonorRecord {
        DonorRecord {
            name: name.to_string(),
            amount,
        }
    }

    fn profile(donor_count: usize) -> PartyDonorProfile {
        PartyDonorProfile {
            party: "Greens".to_string(),
            top_donors: (1..=donor_count)
                .map(|n| donor(&format!("d{n}"), Some(1000.0 / n as f64)))
                .collect(),
            yearly_totals: vec![
                YearlyTotal {
                    year: "2021-22".to_string(),
                    amount: Some(1200.0),
                },
                YearlyTotal {
                    year: "2022-23".to_string(),
                    amount: None,
                },
            ],
        }
    }

    #[test]
    fn splits_seven_donors_into_five_and_two() {
        let profile = profile(7);
        let breakdown = DonorAggregator::aggregate(&profile);
        let primary: Vec<_> = breakdown.primary.iter().map(|d| d.name.as_str()).collect();
        let overflow: Vec<_> = breakdown.overflow.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(primary, vec!["d1", "d2", "d3", "d4", "d5"]);
        assert_eq!(overflow, vec!["d6", "d7"]);
    }

    #[test]
    fn overflow_empty_at_or_below_five() {
        for count in 1..=PRIMARY_DONOR_COUNT {
            let profile = profile(count);
            let breakdown = DonorAggregator::aggregate(&profile);
            assert_eq!(breakdown.primary.len(), count);
            assert!(breakdown.overflow.is_empty());
        }
        let profile = profile(6);
        assert_eq!(DonorAggregator::aggregate(&profile).overflow.len(), 1);
    }

    #[test]
    fn keeps_feed_order_with_undisclosed_amounts() {
        let profile = PartyDonorProfile {
            party: "Labor".to_string(),
            top_donors: vec![donor("small", Some(5.0)), donor("hidden", None), donor("big", Some(900.0))],
            yearly_totals: Vec::new(),
        };
        let breakdown = DonorAggregator::aggregate(&profile);
        let names: Vec<_> = breakdown.primary.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["small", "hidden", "big"]);
        assert_eq!(breakdown.primary[1].amount, None);
    }

    #[test]
    fn trend_projects_into_parallel_arrays() {
        let profile = profile(2);
        let breakdown = DonorAggregator::aggregate(&profile);
        assert_eq!(breakdown.trend.years, vec!["2021-22", "2022-23"]);
        assert_eq!(breakdown.trend.amounts, vec![Some(1200.0), None]);
    }

    #[test]
    fn party_without_donors_is_empty_throughout() {
        let profile = profile(0);
        let breakdown = DonorAggregator::aggregate(&profile);
        assert!(!breakdown.has_data());
        assert!(breakdown.overflow.is_empty());
        assert!(breakdown.trend.is_empty());
    }
}
