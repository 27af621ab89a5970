use super::contribution::{Contribution, ContributionKind};
use super::record::{Dataset, Flag, StoredRecord};
use super::tables::FALLBACK_SEEDS;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Default floor below which a merged dataset is considered implausible.
pub const DEFAULT_MINIMUM_DATASET_SIZE: usize = 10;

/// What a single contribution changed in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    pub label: String,
    pub kind: ContributionKind,
    /// Postcodes that did not exist before this contribution.
    pub created: usize,
    /// Individual flag values that changed.
    pub flags_changed: usize,
}

/// Folds one contribution into the dataset.
///
/// Additive contributions only ever raise flags: an asserted `true` sets the
/// flag, an asserted `false` is ignored. Override contributions write every
/// asserted value exactly. Postcodes new to the dataset start from an all-false
/// record.
pub fn merge_contribution(dataset: &mut Dataset, contribution: &Contribution) -> MergeStats {
    let mut stats = MergeStats {
        label: contribution.label().to_string(),
        kind: contribution.kind(),
        created: 0,
        flags_changed: 0,
    };

    for (postcode, flags) in contribution.iter() {
        let record = dataset.entry(*postcode).or_insert_with(|| {
            stats.created += 1;
            StoredRecord::materialized_default()
        });

        for (flag, value) in flags.asserted() {
            match contribution.kind() {
                ContributionKind::Additive => {
                    if value && !record.is_set(flag) {
                        record.set(flag, true);
                        stats.flags_changed += 1;
                    }
                }
                ContributionKind::Override => {
                    let legacy = flag == Flag::Disaster && record.has_legacy_flood();
                    if legacy || record.flag(flag) != Some(value) {
                        record.set(flag, value);
                        stats.flags_changed += 1;
                    }
                }
            }
        }
    }

    debug!(
        contribution = %stats.label,
        created = stats.created,
        flags_changed = stats.flags_changed,
        "merged contribution"
    );
    stats
}

/// Applies contributions in order and guarantees a minimally populated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEngine {
    minimum_dataset_size: usize,
}

impl Default for MergeEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_DATASET_SIZE)
    }
}

impl MergeEngine {
    pub fn new(minimum_dataset_size: usize) -> Self {
        Self {
            minimum_dataset_size,
        }
    }

    pub fn minimum_dataset_size(&self) -> usize {
        self.minimum_dataset_size
    }

    /// Merges every contribution in the order given.
    pub fn merge_all<'a, I>(&self, dataset: &mut Dataset, contributions: I) -> Vec<MergeStats>
    where
        I: IntoIterator<Item = &'a Contribution>,
    {
        contributions
            .into_iter()
            .map(|contribution| merge_contribution(dataset, contribution))
            .collect()
    }

    /// Writes the fallback seed postcodes when the dataset is smaller than the
    /// configured minimum. Returns how many seed records were written.
    pub fn seed_if_sparse(&self, dataset: &mut Dataset) -> usize {
        if dataset.len() >= self.minimum_dataset_size {
            return 0;
        }

        warn!(
            postcodes = dataset.len(),
            minimum = self.minimum_dataset_size,
            "dataset below minimum size, seeding fallback postcodes"
        );
        for (postcode, record) in FALLBACK_SEEDS {
            dataset.insert(*postcode, StoredRecord::from(*record));
        }
        info!(seeded = FALLBACK_SEEDS.len(), "fallback postcodes seeded");
        FALLBACK_SEEDS.len()
    }
}
