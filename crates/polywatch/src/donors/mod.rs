pub mod aggregator;
pub mod currency;
pub mod domain;
pub mod panel;

pub use aggregator::{DonorAggregator, DonorBreakdown, TrendSeries, PRIMARY_DONOR_COUNT};
pub use currency::{format_currency, AMOUNT_PLACEHOLDER};
pub use domain::{DonorDataset, DonorRecord, PartyDonorProfile, YearlyTotal};
pub use panel::{
    DonorCard, DonorPanelContent, DonorPanelState, DonorPanelView, Reveal, RevealToggle,
    NO_DONOR_DATA_MESSAGE,
};
