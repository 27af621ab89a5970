use super::{ContributionSource, FetchError};
use crate::classification::contribution::Contribution;
use crate::classification::tables::{official_tables, OfficialTable};

/// The published regional, remote, northern and declared-area tables.
#[derive(Debug, Clone)]
pub struct OfficialTableSource {
    tables: Vec<OfficialTable>,
}

impl OfficialTableSource {
    pub fn new(tables: Vec<OfficialTable>) -> Self {
        Self { tables }
    }

    pub fn standard() -> Self {
        Self::new(official_tables())
    }
}

impl Default for OfficialTableSource {
    fn default() -> Self {
        Self::standard()
    }
}

impl ContributionSource for OfficialTableSource {
    fn label(&self) -> &str {
        "official_tables"
    }

    fn collect(&self) -> Result<Vec<Contribution>, FetchError> {
        Ok(self.tables.iter().map(OfficialTable::contribution).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::contribution::Confidence;
    use crate::classification::postcode::Postcode;
    use crate::classification::record::Flag;

    #[test]
    fn yields_one_official_contribution_per_table() {
        let contributions = OfficialTableSource::standard()
            .collect()
            .expect("static tables never fail");
        assert_eq!(contributions.len(), 8);
        assert!(contributions
            .iter()
            .all(|c| c.confidence() == Confidence::Official));
    }

    #[test]
    fn remote_tables_only_assert_remote() {
        let contributions = OfficialTableSource::standard()
            .collect()
            .expect("static tables never fail");
        let remote = contributions
            .iter()
            .find(|c| c.label() == "417_remote_very_remote")
            .expect("remote table present");
        let rottnest = remote.get(Postcode::literal(6161)).expect("6161 listed");
        assert_eq!(rottnest.get(Flag::Remote), Some(true));
        assert_eq!(rottnest.get(Flag::Regional), None);
        assert!(remote.get(Postcode::literal(850)).is_some(), "NT resolves to its block");
    }
}
