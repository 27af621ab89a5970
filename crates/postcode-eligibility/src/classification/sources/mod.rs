//! Origins of contributions. Each source yields zero or more contributions
//! per run; a failing source is reported and contributes nothing.

mod csv_table;
mod official;
mod text_scan;

pub use csv_table::CsvTableSource;
pub use official::OfficialTableSource;
pub use text_scan::{scan_text, TextScanSource};

use super::contribution::Contribution;
use std::path::PathBuf;

pub trait ContributionSource: Send + Sync {
    fn label(&self) -> &str;
    fn collect(&self) -> Result<Vec<Contribution>, FetchError>;
}

/// A source could not be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
