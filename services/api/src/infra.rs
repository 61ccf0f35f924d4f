use metrics_exporter_prometheus::PrometheusHandle;
use polywatch::config::DataConfig;
use polywatch::dataset::{Dataset, FileSource, LoadError};
use polywatch::donors::{DonorPanelState, Reveal};
use polywatch::roster::FilterPredicate;
use polywatch::views::{Dashboard, HomeViewState};
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dashboard: Arc<Dashboard>,
}

pub(crate) async fn load_dashboard(data: &DataConfig) -> Result<Dashboard, LoadError> {
    let source = FileSource::new(&data.data_dir);
    let dataset = Dataset::load(&source).await?;
    info!(data_dir = %source.root().display(), "feeds loaded");
    Ok(Dashboard::new(dataset))
}

/// Roster filter carried in query parameters; absent fields are unconstrained.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FilterQuery {
    pub(crate) text: String,
    pub(crate) party: String,
    pub(crate) chamber: String,
}

impl FilterQuery {
    pub(crate) fn into_predicate(self) -> FilterPredicate {
        FilterPredicate::new(self.text, self.party, self.chamber)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DonorQuery {
    pub(crate) party: Option<String>,
    pub(crate) expanded: bool,
}

impl DonorQuery {
    pub(crate) fn into_state(self) -> DonorPanelState {
        DonorPanelState::new(self.party, Reveal::from(self.expanded))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct HomeQuery {
    pub(crate) text: String,
    pub(crate) party: String,
    pub(crate) chamber: String,
    pub(crate) donor_party: Option<String>,
    pub(crate) expanded: bool,
}

impl HomeQuery {
    pub(crate) fn into_state(self) -> HomeViewState {
        HomeViewState {
            filter: FilterPredicate::new(self.text, self.party, self.chamber),
            donors: DonorPanelState::new(self.donor_party, Reveal::from(self.expanded)),
        }
    }
}
