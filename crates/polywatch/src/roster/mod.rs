pub mod domain;
pub mod filter;

pub use domain::{
    Chamber, Correlation, Investment, Official, PolicyEvent, Profile, ProfileMap,
    INDEPENDENT_LABEL,
};
pub use filter::{FilterInput, FilterPredicate, FilteredRoster, LiveRoster, RosterFilter};
