use serde::Serialize;

/// Upper bound on the human-readable samples kept per list.
pub const SAMPLE_LIMIT: usize = 10;

/// The invariant a detected inconsistency broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    MissingFields,
    LegacyFlood,
    InconsistentNt,
    RemoteNotRegional,
    NorthernNotRegional,
    CriticalMismatch,
}

/// Per-violation counters for one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViolationCounts {
    pub missing_fields: usize,
    pub legacy_flood: usize,
    pub inconsistent_nt: usize,
    pub remote_not_regional: usize,
    pub northern_not_regional: usize,
    pub critical_mismatch: usize,
}

impl ViolationCounts {
    pub fn total(&self) -> usize {
        self.missing_fields
            + self.legacy_flood
            + self.inconsistent_nt
            + self.remote_not_regional
            + self.northern_not_regional
            + self.critical_mismatch
    }

    fn bump(&mut self, violation: Violation) {
        let counter = match violation {
            Violation::MissingFields => &mut self.missing_fields,
            Violation::LegacyFlood => &mut self.legacy_flood,
            Violation::InconsistentNt => &mut self.inconsistent_nt,
            Violation::RemoteNotRegional => &mut self.remote_not_regional,
            Violation::NorthernNotRegional => &mut self.northern_not_regional,
            Violation::CriticalMismatch => &mut self.critical_mismatch,
        };
        *counter += 1;
    }
}

/// Structured outcome of a reconciliation pass. An empty audit is a valid,
/// reportable result meaning the dataset already satisfied every invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileAudit {
    pub counts: ViolationCounts,
    pub inconsistencies: Vec<String>,
    pub fixes: Vec<String>,
    pub total_fixes: usize,
}

impl ReconcileAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a detected violation and the repair applied for it.
    pub fn record(
        &mut self,
        violation: Violation,
        inconsistency: impl Into<String>,
        fix: impl Into<String>,
    ) {
        self.counts.bump(violation);
        self.total_fixes += 1;
        push_bounded(&mut self.inconsistencies, inconsistency.into());
        push_bounded(&mut self.fixes, fix.into());
    }

    pub fn is_clean(&self) -> bool {
        self.total_fixes == 0
    }
}

fn push_bounded(samples: &mut Vec<String>, sample: String) {
    if samples.len() < SAMPLE_LIMIT {
        samples.push(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_audit_is_clean() {
        let audit = ReconcileAudit::new();
        assert!(audit.is_clean());
        assert_eq!(audit.counts.total(), 0);
        assert!(audit.fixes.is_empty());
    }

    #[test]
    fn samples_are_bounded_but_counts_are_not() {
        let mut audit = ReconcileAudit::new();
        for index in 0..25 {
            audit.record(
                Violation::RemoteNotRegional,
                format!("{index:04}: remote but not regional"),
                format!("{index:04}: set regional"),
            );
        }
        assert_eq!(audit.counts.remote_not_regional, 25);
        assert_eq!(audit.total_fixes, 25);
        assert_eq!(audit.inconsistencies.len(), SAMPLE_LIMIT);
        assert_eq!(audit.fixes.len(), SAMPLE_LIMIT);
        assert_eq!(audit.fixes[0], "0000: set regional");
    }
}
