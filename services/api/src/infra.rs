use metrics_exporter_prometheus::PrometheusHandle;
use postcode_eligibility::classification::{JsonFileStore, SharedSnapshot, UpdatePipeline};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) snapshot: SharedSnapshot,
    pub(crate) pipeline: Arc<UpdatePipeline<JsonFileStore>>,
    /// Held for the duration of an on-demand update; one run at a time.
    pub(crate) update_lock: Arc<Mutex<()>>,
}
