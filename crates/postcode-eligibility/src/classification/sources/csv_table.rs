use super::{ContributionSource, FetchError};
use crate::classification::contribution::{Confidence, Contribution};
use crate::classification::jurisdiction::Jurisdiction;
use crate::classification::record::Flag;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::warn;

/// A CSV file of `jurisdiction,category,postcodes` rows, one contribution per
/// category. `postcodes` takes the same list syntax as the published tables,
/// including "all".
#[derive(Debug, Clone)]
pub struct CsvTableSource {
    path: PathBuf,
    label: String,
}

#[derive(Debug, Deserialize)]
struct TableRow {
    jurisdiction: String,
    category: String,
    postcodes: String,
}

impl CsvTableSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = format!("csv:{}", path.display());
        Self { path, label }
    }

    fn parse<R: Read>(&self, reader: R) -> Result<Vec<Contribution>, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows: Vec<(Flag, Jurisdiction, String)> = Vec::new();
        for (index, record) in csv_reader.deserialize::<TableRow>().enumerate() {
            let row = record?;
            let Some(jurisdiction) = Jurisdiction::from_code(&row.jurisdiction) else {
                warn!(source = %self.label, row = index + 1, jurisdiction = %row.jurisdiction, "unknown jurisdiction, row skipped");
                continue;
            };
            let Some(flag) = Flag::from_key(&row.category) else {
                warn!(source = %self.label, row = index + 1, category = %row.category, "unknown category, row skipped");
                continue;
            };
            rows.push((flag, jurisdiction, row.postcodes));
        }

        let contributions = Flag::ALL
            .into_iter()
            .filter_map(|flag| {
                let table: Vec<(Jurisdiction, &str)> = rows
                    .iter()
                    .filter(|(row_flag, _, _)| *row_flag == flag)
                    .map(|(_, jurisdiction, postcodes)| (*jurisdiction, postcodes.as_str()))
                    .collect();
                if table.is_empty() {
                    return None;
                }
                Some(Contribution::from_jurisdiction_table(
                    format!("{}:{}", self.label, flag.key()),
                    Confidence::Official,
                    &[flag],
                    &table,
                ))
            })
            .collect();
        Ok(contributions)
    }
}

impl ContributionSource for CsvTableSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn collect(&self) -> Result<Vec<Contribution>, FetchError> {
        let file = std::fs::File::open(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.parse(file).map_err(|source| FetchError::Csv {
            path: self.path.clone(),
            source,
        })
    }
}
