//! Postcode classification: contributions in, one reconciled snapshot out.

pub mod audit;
pub mod contribution;
pub mod jurisdiction;
pub mod lookup;
pub mod merge;
pub mod pipeline;
pub mod postcode;
pub mod ranges;
pub mod reconcile;
pub mod record;
pub mod sources;
pub mod stats;
pub mod store;
pub mod tables;
pub mod update_log;

pub use audit::{ReconcileAudit, Violation, ViolationCounts};
pub use contribution::{Confidence, Contribution, ContributionKind, FlagSet};
pub use jurisdiction::{Jurisdiction, TableEntry};
pub use lookup::{lookup, lookup_router, SharedSnapshot};
pub use merge::{merge_contribution, MergeEngine, MergeStats};
pub use pipeline::{
    SourceSummary, UpdateError, UpdateOutcome, UpdatePipeline, UpdateReport, VerifyOutcome,
    VerifyReport,
};
pub use postcode::{Postcode, PostcodeError};
pub use ranges::{expand_list, expand_range};
pub use reconcile::Reconciler;
pub use record::{ClassificationRecord, Dataset, Flag, StoredRecord};
pub use sources::{ContributionSource, FetchError};
pub use stats::DatasetStats;
pub use store::{load_or_empty, JsonFileStore, LoadError, SaveError, SaveReceipt, SnapshotStore};
pub use tables::{CriticalOverrideTable, VisaSubclass};
pub use update_log::{UpdateLog, UpdateLogEntry, UpdateLogError};
