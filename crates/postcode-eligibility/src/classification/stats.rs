use super::record::{Dataset, Flag};
use serde::Serialize;

/// Aggregate flag counts over a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub total: usize,
    pub regional: usize,
    pub remote: usize,
    pub northern: usize,
    pub bushfire: usize,
    pub disaster: usize,
}

impl DatasetStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let mut stats = Self {
            total: dataset.len(),
            ..Self::default()
        };
        for (_, record) in dataset {
            for flag in Flag::ALL {
                if record.is_set(flag) {
                    *stats.counter_mut(flag) += 1;
                }
            }
        }
        stats
    }

    pub fn count(&self, flag: Flag) -> usize {
        match flag {
            Flag::Regional => self.regional,
            Flag::Remote => self.remote,
            Flag::Northern => self.northern,
            Flag::Bushfire => self.bushfire,
            Flag::Disaster => self.disaster,
        }
    }

    fn counter_mut(&mut self, flag: Flag) -> &mut usize {
        match flag {
            Flag::Regional => &mut self.regional,
            Flag::Remote => &mut self.remote,
            Flag::Northern => &mut self.northern,
            Flag::Bushfire => &mut self.bushfire,
            Flag::Disaster => &mut self.disaster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::postcode::Postcode;
    use crate::classification::record::{ClassificationRecord, StoredRecord};

    #[test]
    fn counts_each_flag_and_reads_legacy_flood() {
        let dataset: Dataset = [
            (
                Postcode::literal(800),
                StoredRecord::from(ClassificationRecord::new(true, true, true, false, false)),
            ),
            (
                Postcode::literal(4550),
                StoredRecord::from(ClassificationRecord::new(true, false, false, true, true)),
            ),
            (
                Postcode::literal(2000),
                StoredRecord {
                    flood: Some(true),
                    ..StoredRecord::default()
                },
            ),
        ]
        .into_iter()
        .collect();

        let stats = DatasetStats::compute(&dataset);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.regional, 2);
        assert_eq!(stats.remote, 1);
        assert_eq!(stats.northern, 1);
        assert_eq!(stats.bushfire, 1);
        assert_eq!(stats.count(Flag::Disaster), 2);
    }
}
