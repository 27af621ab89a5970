use super::audit::ReconcileAudit;
use super::contribution::Contribution;
use super::merge::{MergeEngine, MergeStats};
use super::reconcile::Reconciler;
use super::record::Dataset;
use super::sources::{ContributionSource, CsvTableSource, OfficialTableSource, TextScanSource};
use super::stats::DatasetStats;
use super::store::{JsonFileStore, LoadError, SaveError, SaveReceipt, SnapshotStore};
use super::update_log::{UpdateLog, UpdateLogEntry};
use crate::config::AppConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// A run failed before a new snapshot was written; the previous snapshot is
/// still authoritative.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// Verification needs an existing snapshot and never writes over one it
    /// could not read.
    #[error("nothing to verify: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// What one source produced during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub label: String,
    pub contributions: usize,
    pub postcodes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Records in the snapshot before the run.
    pub loaded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
    pub sources: Vec<SourceSummary>,
    pub merges: Vec<MergeStats>,
    pub seeded: usize,
    pub audit: ReconcileAudit,
    pub stats: DatasetStats,
    pub saved: SaveReceipt,
}

/// A successful run: its report and the dataset that was persisted.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub report: UpdateReport,
    pub dataset: Dataset,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub loaded: usize,
    pub audit: ReconcileAudit,
    pub stats: DatasetStats,
    pub changed: bool,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<SaveReceipt>,
}

#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    pub report: VerifyReport,
    pub dataset: Dataset,
}

/// Load, merge every source, seed, reconcile, save, and log the outcome.
pub struct UpdatePipeline<S> {
    store: S,
    sources: Vec<Box<dyn ContributionSource>>,
    engine: MergeEngine,
    reconciler: Reconciler,
    update_log: Option<UpdateLog>,
}

impl UpdatePipeline<JsonFileStore> {
    /// Wires the file store, update log and configured sources. Official
    /// tables come first, then CSV tables, then the text scan.
    pub fn from_config(config: &AppConfig) -> Self {
        let storage = &config.storage;
        let store = JsonFileStore::new(&storage.data_path, &storage.backup_dir);
        let mut pipeline = Self::new(store)
            .with_merge_engine(MergeEngine::new(storage.minimum_dataset_size))
            .with_update_log(UpdateLog::new(
                &storage.update_log_path,
                storage.update_log_limit,
            ));

        let sources = &config.sources;
        if sources.include_official_tables {
            pipeline = pipeline.with_source(OfficialTableSource::standard());
        }
        if let Some(path) = &sources.csv_tables {
            pipeline = pipeline.with_source(CsvTableSource::new(path));
        }
        if let Some(path) = &sources.text_document {
            pipeline = pipeline.with_source(TextScanSource::new(path));
        }
        pipeline
    }
}

impl<S: SnapshotStore> UpdatePipeline<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            sources: Vec::new(),
            engine: MergeEngine::default(),
            reconciler: Reconciler::standard(),
            update_log: None,
        }
    }

    pub fn with_source(mut self, source: impl ContributionSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn with_merge_engine(mut self, engine: MergeEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_update_log(mut self, update_log: UpdateLog) -> Self {
        self.update_log = Some(update_log);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn run(&self) -> Result<UpdateOutcome, UpdateError> {
        let started_at = Utc::now();
        info!(sources = self.sources.len(), "starting postcode update");

        let (mut dataset, load_error) = match self.store.load() {
            Ok(dataset) => (dataset, None),
            Err(error) => {
                warn!(%error, "no usable snapshot, starting from an empty dataset");
                (Dataset::new(), Some(error.to_string()))
            }
        };
        let loaded = dataset.len();

        let (contributions, sources) = self.collect_sources();
        let merges = self.engine.merge_all(&mut dataset, &contributions);
        let seeded = self.engine.seed_if_sparse(&mut dataset);
        let audit = self.reconciler.reconcile(&mut dataset);
        let stats = DatasetStats::compute(&dataset);

        let saved = match self.store.save(&dataset) {
            Ok(receipt) => receipt,
            Err(error) => {
                warn!(%error, "update run failed, previous snapshot kept");
                self.record(UpdateLogEntry::failure(format!("Update failed: {error}")));
                return Err(UpdateError::Save(error));
            }
        };

        self.record(UpdateLogEntry::success(format!(
            "Updated {} postcodes ({} fixes applied)",
            stats.total, audit.total_fixes
        )));
        info!(
            postcodes = stats.total,
            regional = stats.regional,
            remote = stats.remote,
            northern = stats.northern,
            fixes = audit.total_fixes,
            "postcode update complete"
        );

        Ok(UpdateOutcome {
            report: UpdateReport {
                started_at,
                finished_at: Utc::now(),
                loaded,
                load_error,
                sources,
                merges,
                seeded,
                audit,
                stats,
                saved,
            },
            dataset,
        })
    }

    /// Reconciles the stored snapshot without consulting any source, saving
    /// only when the pass changed something and `dry_run` is off. A missing or
    /// unreadable snapshot is an error and is left untouched.
    pub fn verify(&self, dry_run: bool) -> Result<VerifyOutcome, UpdateError> {
        let mut dataset = self.store.load().map_err(|error| {
            warn!(%error, "no usable snapshot, nothing verified");
            UpdateError::Load(error)
        })?;
        let loaded = dataset.len();
        let before = dataset.clone();

        let audit = self.reconciler.reconcile(&mut dataset);
        let changed = dataset != before;
        let stats = DatasetStats::compute(&dataset);

        let saved = if changed && !dry_run {
            Some(self.store.save(&dataset)?)
        } else {
            None
        };
        info!(
            postcodes = stats.total,
            fixes = audit.total_fixes,
            changed,
            dry_run,
            "verification complete"
        );

        Ok(VerifyOutcome {
            report: VerifyReport {
                loaded,
                audit,
                stats,
                changed,
                dry_run,
                saved,
            },
            dataset,
        })
    }

    fn collect_sources(&self) -> (Vec<Contribution>, Vec<SourceSummary>) {
        let mut contributions = Vec::new();
        let mut summaries = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let label = source.label().to_string();
            match source.collect() {
                Ok(collected) => {
                    let postcodes = collected.iter().map(Contribution::len).sum();
                    info!(source = %label, contributions = collected.len(), postcodes, "source collected");
                    summaries.push(SourceSummary {
                        label,
                        contributions: collected.len(),
                        postcodes,
                        error: None,
                    });
                    contributions.extend(collected);
                }
                Err(error) => {
                    warn!(source = %label, %error, "source failed, contributing nothing");
                    summaries.push(SourceSummary {
                        label,
                        contributions: 0,
                        postcodes: 0,
                        error: Some(error.to_string()),
                    });
                }
            }
        }
        (contributions, summaries)
    }

    fn record(&self, entry: UpdateLogEntry) {
        if let Some(log) = &self.update_log {
            if let Err(error) = log.append(entry) {
                warn!(%error, "failed to append update log entry");
            }
        }
    }
}
