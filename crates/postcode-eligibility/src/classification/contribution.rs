use super::jurisdiction::{Jurisdiction, TableEntry};
use super::postcode::Postcode;
use super::record::{ClassificationRecord, Flag};
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};
use tracing::debug;

/// How a contribution combines with the canonical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionKind {
    /// Asserted flags are OR-ed in; a true flag never becomes false.
    Additive,
    /// Asserted flags replace the stored values outright.
    Override,
}

/// How much a contribution's origin is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Heuristic,
    Official,
    Verified,
}

/// A partial set of flag assertions. `None` means "no opinion", never "false".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet {
    regional: Option<bool>,
    remote: Option<bool>,
    northern: Option<bool>,
    bushfire: Option<bool>,
    disaster: Option<bool>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asserts each listed flag as true.
    pub fn asserting(flags: &[Flag]) -> Self {
        let mut set = Self::default();
        for flag in flags {
            set.assert(*flag, true);
        }
        set
    }

    /// Asserts all five flags with the record's exact values.
    pub fn exact(record: &ClassificationRecord) -> Self {
        let mut set = Self::default();
        for flag in Flag::ALL {
            set.assert(flag, record.get(flag));
        }
        set
    }

    pub fn get(&self, flag: Flag) -> Option<bool> {
        match flag {
            Flag::Regional => self.regional,
            Flag::Remote => self.remote,
            Flag::Northern => self.northern,
            Flag::Bushfire => self.bushfire,
            Flag::Disaster => self.disaster,
        }
    }

    /// Repeated assertions of the same flag combine with OR.
    pub fn assert(&mut self, flag: Flag, value: bool) {
        let slot = match flag {
            Flag::Regional => &mut self.regional,
            Flag::Remote => &mut self.remote,
            Flag::Northern => &mut self.northern,
            Flag::Bushfire => &mut self.bushfire,
            Flag::Disaster => &mut self.disaster,
        };
        *slot = Some(slot.unwrap_or(false) || value);
    }

    pub fn union(&mut self, other: &FlagSet) {
        for (flag, value) in other.asserted() {
            self.assert(flag, value);
        }
    }

    /// Asserted flags in [`Flag::ALL`] order.
    pub fn asserted(&self) -> impl Iterator<Item = (Flag, bool)> + '_ {
        Flag::ALL
            .into_iter()
            .filter_map(|flag| self.get(flag).map(|value| (flag, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.asserted().next().is_none()
    }
}

/// One source's assertions for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    label: String,
    kind: ContributionKind,
    confidence: Confidence,
    assertions: BTreeMap<Postcode, FlagSet>,
}

impl Contribution {
    pub fn additive(label: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            label: label.into(),
            kind: ContributionKind::Additive,
            confidence,
            assertions: BTreeMap::new(),
        }
    }

    /// Override contributions are reserved for hand-verified ground truth.
    pub(crate) fn overriding(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ContributionKind::Override,
            confidence: Confidence::Verified,
            assertions: BTreeMap::new(),
        }
    }

    /// Builds an additive contribution asserting `flags` for every postcode a
    /// jurisdiction table lists, resolving "all" markers through the
    /// jurisdiction's numeric blocks.
    pub fn from_jurisdiction_table(
        label: impl Into<String>,
        confidence: Confidence,
        flags: &[Flag],
        table: &[(Jurisdiction, &str)],
    ) -> Self {
        let mut contribution = Self::additive(label, confidence);
        let asserted = FlagSet::asserting(flags);
        for (jurisdiction, raw) in table {
            let entry = TableEntry::parse(raw);
            let postcodes = entry.resolve(*jurisdiction);
            if postcodes.is_empty() {
                debug!(
                    table = %contribution.label,
                    jurisdiction = jurisdiction.code(),
                    "table entry resolved to no postcodes"
                );
            }
            contribution.assert_all(postcodes, asserted);
        }
        contribution
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ContributionKind {
        self.kind
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn assert(&mut self, postcode: Postcode, flag: Flag, value: bool) {
        self.assertions
            .entry(postcode)
            .or_default()
            .assert(flag, value);
    }

    pub fn assert_flags(&mut self, postcode: Postcode, flags: FlagSet) {
        self.assertions.entry(postcode).or_default().union(&flags);
    }

    pub fn assert_all<I>(&mut self, postcodes: I, flags: FlagSet)
    where
        I: IntoIterator<Item = Postcode>,
    {
        for postcode in postcodes {
            self.assert_flags(postcode, flags);
        }
    }

    pub fn get(&self, postcode: Postcode) -> Option<&FlagSet> {
        self.assertions.get(&postcode)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Postcode, FlagSet> {
        self.assertions.iter()
    }

    /// Number of postcodes the contribution has an opinion on.
    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }
}
