mod dashboard;
pub mod home;
pub mod profile;

pub use dashboard::Dashboard;
pub use home::{
    CardLink, ChamberCounts, HomeView, HomeViewState, OfficialCard, PartyCount, RosterView,
};
pub use profile::{
    DisclosureLink, DisclosurePanel, ProfileCounts, ProfileSummary, ProfileTable, ProfileView,
};
