use super::audit::{ReconcileAudit, Violation};
use super::merge::merge_contribution;
use super::postcode::Postcode;
use super::record::{Dataset, Flag, StoredRecord};
use super::tables::{CriticalOverrideTable, REMOTE_ONLY_EXCEPTIONS};
use tracing::{debug, info, warn};

/// Repairs invariant violations and applies the critical override table.
///
/// Per record, in order: materialize missing flags as false, migrate the
/// legacy `flood` key, force NT-block postcodes to northern, remote and
/// regional, then raise regional for remote and northern postcodes. The
/// critical table is applied once after every record has been repaired and
/// wins over all of the above. Running the pass twice yields an empty second
/// audit.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler {
    critical: CriticalOverrideTable,
    remote_only_exceptions: &'static [Postcode],
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::standard()
    }
}

impl Reconciler {
    pub const fn new(
        critical: CriticalOverrideTable,
        remote_only_exceptions: &'static [Postcode],
    ) -> Self {
        Self {
            critical,
            remote_only_exceptions,
        }
    }

    pub const fn standard() -> Self {
        Self::new(CriticalOverrideTable::standard(), REMOTE_ONLY_EXCEPTIONS)
    }

    pub fn is_remote_only_exception(&self, postcode: Postcode) -> bool {
        self.remote_only_exceptions.contains(&postcode)
    }

    pub fn reconcile(&self, dataset: &mut Dataset) -> ReconcileAudit {
        let mut audit = ReconcileAudit::new();

        for (postcode, record) in dataset.iter_mut() {
            self.repair(*postcode, record, &mut audit);
        }
        self.apply_critical(dataset, &mut audit);

        if audit.is_clean() {
            info!(postcodes = dataset.len(), "dataset already consistent");
        } else {
            info!(
                postcodes = dataset.len(),
                fixes = audit.total_fixes,
                "reconciled dataset"
            );
        }
        audit
    }

    fn repair(&self, postcode: Postcode, record: &mut StoredRecord, audit: &mut ReconcileAudit) {
        let missing = record.missing_flags();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|flag| flag.key()).collect();
            for flag in &missing {
                record.set(*flag, false);
            }
            audit.record(
                Violation::MissingFields,
                format!("{postcode}: missing {}", names.join(", ")),
                format!("{postcode}: set {} to false", names.join(", ")),
            );
        }

        if record.has_legacy_flood() {
            let disaster = record.is_set(Flag::Disaster);
            record.set(Flag::Disaster, disaster);
            audit.record(
                Violation::LegacyFlood,
                format!("{postcode}: carries legacy flood key"),
                format!("{postcode}: migrated flood to disaster={disaster}"),
            );
        }

        if postcode.is_northern_territory() {
            let compliant = [Flag::Northern, Flag::Remote, Flag::Regional]
                .into_iter()
                .all(|flag| record.is_set(flag));
            if !compliant {
                record.set(Flag::Northern, true);
                record.set(Flag::Remote, true);
                record.set(Flag::Regional, true);
                audit.record(
                    Violation::InconsistentNt,
                    format!("{postcode}: NT postcode not northern, remote and regional"),
                    format!("{postcode}: set northern, remote and regional"),
                );
            }
        }

        if record.is_set(Flag::Remote)
            && !record.is_set(Flag::Regional)
            && !self.is_remote_only_exception(postcode)
        {
            record.set(Flag::Regional, true);
            audit.record(
                Violation::RemoteNotRegional,
                format!("{postcode}: remote but not regional"),
                format!("{postcode}: set regional"),
            );
        }

        if record.is_set(Flag::Northern) && !record.is_set(Flag::Regional) {
            record.set(Flag::Regional, true);
            audit.record(
                Violation::NorthernNotRegional,
                format!("{postcode}: northern but not regional"),
                format!("{postcode}: set regional"),
            );
        }
    }

    fn apply_critical(&self, dataset: &mut Dataset, audit: &mut ReconcileAudit) {
        for (postcode, expected) in self.critical.entries() {
            match dataset.classification(*postcode) {
                None => audit.record(
                    Violation::CriticalMismatch,
                    format!("{postcode}: critical postcode absent"),
                    format!("{postcode}: inserted verified classification"),
                ),
                Some(actual) => {
                    let differing = actual.differing_flags(expected);
                    if differing.is_empty() {
                        continue;
                    }
                    let names: Vec<&str> = differing.iter().map(|flag| flag.key()).collect();
                    warn!(
                        postcode = %postcode,
                        flags = %names.join(","),
                        "critical postcode disagrees with verified classification"
                    );
                    audit.record(
                        Violation::CriticalMismatch,
                        format!("{postcode}: {} differ from verified values", names.join(", ")),
                        format!("{postcode}: applied verified classification"),
                    );
                }
            }
        }

        let stats = merge_contribution(dataset, &self.critical.contribution());
        debug!(
            created = stats.created,
            flags_changed = stats.flags_changed,
            "critical overrides applied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::record::ClassificationRecord;

    fn code(value: u16) -> Postcode {
        Postcode::literal(value)
    }

    fn critical_only() -> Dataset {
        CriticalOverrideTable::standard()
            .entries()
            .iter()
            .map(|(postcode, record)| (*postcode, *record))
            .collect()
    }

    #[test]
    fn consistent_dataset_yields_clean_audit() {
        let mut dataset = critical_only();
        dataset.insert(
            code(2650),
            ClassificationRecord::new(true, false, false, false, false).into(),
        );
        let audit = Reconciler::standard().reconcile(&mut dataset);
        assert!(audit.is_clean());
        assert!(audit.inconsistencies.is_empty());
    }

    #[test]
    fn missing_fields_are_materialized() {
        let mut dataset = critical_only();
        dataset.insert(
            code(2650),
            StoredRecord {
                regional: Some(true),
                ..StoredRecord::default()
            },
        );
        let audit = Reconciler::standard().reconcile(&mut dataset);

        assert_eq!(audit.counts.missing_fields, 1);
        let record = dataset.get(code(2650)).expect("present");
        assert!(record.missing_flags().is_empty());
        assert_eq!(
            record.materialized(),
            ClassificationRecord::new(true, false, false, false, false)
        );
    }

    #[test]
    fn legacy_flood_becomes_disaster() {
        let mut dataset = critical_only();
        dataset.insert(
            code(4810),
            StoredRecord {
                regional: Some(true),
                remote: Some(false),
                northern: Some(false),
                bushfire: Some(false),
                disaster: None,
                flood: Some(true),
            },
        );
        let audit = Reconciler::standard().reconcile(&mut dataset);

        assert_eq!(audit.counts.legacy_flood, 1);
        assert_eq!(audit.counts.missing_fields, 0);
        let record = dataset.get(code(4810)).expect("present");
        assert!(!record.has_legacy_flood());
        assert_eq!(record.disaster, Some(true));
    }

    #[test]
    fn nt_block_is_forced_northern_remote_regional() {
        let mut dataset = critical_only();
        dataset.insert(code(870), ClassificationRecord::default().into());
        let audit = Reconciler::standard().reconcile(&mut dataset);

        assert_eq!(audit.counts.inconsistent_nt, 1);
        assert_eq!(
            dataset.classification(code(870)),
            Some(ClassificationRecord::new(true, true, true, false, false))
        );
    }

    #[test]
    fn remote_and_northern_imply_regional() {
        let mut dataset = critical_only();
        dataset.insert(
            code(5440),
            ClassificationRecord::new(false, true, false, false, false).into(),
        );
        dataset.insert(
            code(4880),
            ClassificationRecord::new(false, false, true, false, false).into(),
        );
        let audit = Reconciler::standard().reconcile(&mut dataset);

        assert_eq!(audit.counts.remote_not_regional, 1);
        assert_eq!(audit.counts.northern_not_regional, 1);
        assert!(dataset.classification(code(5440)).is_some_and(|r| r.regional));
        assert!(dataset.classification(code(4880)).is_some_and(|r| r.regional));
    }

    #[test]
    fn rottnest_stays_remote_only() {
        let mut dataset = Dataset::new();
        dataset.insert(
            code(6161),
            ClassificationRecord::new(true, true, false, false, false).into(),
        );
        let audit = Reconciler::standard().reconcile(&mut dataset);

        assert_eq!(audit.counts.remote_not_regional, 0);
        assert_eq!(
            dataset.classification(code(6161)),
            Some(ClassificationRecord::new(false, true, false, false, false))
        );
    }

    #[test]
    fn critical_overrides_win_over_computed_values() {
        let mut dataset = Dataset::new();
        dataset.insert(
            code(4550),
            ClassificationRecord::new(true, true, true, false, false).into(),
        );
        let audit = Reconciler::standard().reconcile(&mut dataset);

        for (postcode, expected) in CriticalOverrideTable::standard().entries() {
            assert_eq!(dataset.classification(*postcode).as_ref(), Some(expected));
        }
        // 4550 disagreed, the other four were absent.
        assert_eq!(audit.counts.critical_mismatch, 5);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut dataset: Dataset = [
            (code(800), StoredRecord::default()),
            (
                code(6721),
                ClassificationRecord::new(false, true, false, false, false).into(),
            ),
            (
                code(2083),
                StoredRecord {
                    bushfire: Some(true),
                    flood: Some(true),
                    ..StoredRecord::default()
                },
            ),
        ]
        .into_iter()
        .collect();
        let reconciler = Reconciler::standard();

        let first = reconciler.reconcile(&mut dataset);
        let once = dataset.clone();
        let second = reconciler.reconcile(&mut dataset);

        assert!(!first.is_clean());
        assert!(second.is_clean());
        assert!(second.fixes.is_empty());
        assert_eq!(dataset, once);
    }
}
