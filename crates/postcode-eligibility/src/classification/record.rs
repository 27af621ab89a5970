use super::postcode::Postcode;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::btree_map::{self, BTreeMap};

/// One of the five eligibility categories a postcode can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    Regional,
    Remote,
    Northern,
    Bushfire,
    Disaster,
}

impl Flag {
    pub const ALL: [Flag; 5] = [
        Flag::Regional,
        Flag::Remote,
        Flag::Northern,
        Flag::Bushfire,
        Flag::Disaster,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Flag::Regional => "regional",
            Flag::Remote => "remote",
            Flag::Northern => "northern",
            Flag::Bushfire => "bushfire",
            Flag::Disaster => "disaster",
        }
    }

    /// Parses a category name, accepting the legacy `flood` spelling for disaster.
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "regional" => Some(Flag::Regional),
            "remote" | "remote_very_remote" => Some(Flag::Remote),
            "northern" => Some(Flag::Northern),
            "bushfire" => Some(Flag::Bushfire),
            "disaster" | "natural_disaster" | "flood" => Some(Flag::Disaster),
            _ => None,
        }
    }
}

/// The canonical, fully materialized classification of a single postcode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub regional: bool,
    pub remote: bool,
    pub northern: bool,
    pub bushfire: bool,
    pub disaster: bool,
}

impl ClassificationRecord {
    pub const fn new(
        regional: bool,
        remote: bool,
        northern: bool,
        bushfire: bool,
        disaster: bool,
    ) -> Self {
        Self {
            regional,
            remote,
            northern,
            bushfire,
            disaster,
        }
    }

    pub const fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Regional => self.regional,
            Flag::Remote => self.remote,
            Flag::Northern => self.northern,
            Flag::Bushfire => self.bushfire,
            Flag::Disaster => self.disaster,
        }
    }

    pub fn set(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::Regional => self.regional = value,
            Flag::Remote => self.remote = value,
            Flag::Northern => self.northern = value,
            Flag::Bushfire => self.bushfire = value,
            Flag::Disaster => self.disaster = value,
        }
    }

    /// Flags on which `self` and `other` disagree, in [`Flag::ALL`] order.
    pub fn differing_flags(&self, other: &ClassificationRecord) -> Vec<Flag> {
        Flag::ALL
            .into_iter()
            .filter(|flag| self.get(*flag) != other.get(*flag))
            .collect()
    }
}

/// A record as persisted in the snapshot file.
///
/// Fields may be absent in older or hand-edited snapshots, and the legacy
/// `flood` key may appear in place of `disaster`. Serialization always folds
/// `flood` into `disaster` so the legacy key is never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoredRecord {
    #[serde(default)]
    pub regional: Option<bool>,
    #[serde(default)]
    pub remote: Option<bool>,
    #[serde(default)]
    pub northern: Option<bool>,
    #[serde(default)]
    pub bushfire: Option<bool>,
    #[serde(default)]
    pub disaster: Option<bool>,
    #[serde(default)]
    pub flood: Option<bool>,
}

impl StoredRecord {
    /// A record with all five flags present and false.
    pub fn materialized_default() -> Self {
        Self::from(ClassificationRecord::default())
    }

    /// The stored value of `flag`; disaster reads through the legacy `flood` key.
    pub fn flag(&self, flag: Flag) -> Option<bool> {
        match flag {
            Flag::Regional => self.regional,
            Flag::Remote => self.remote,
            Flag::Northern => self.northern,
            Flag::Bushfire => self.bushfire,
            Flag::Disaster => match (self.disaster, self.flood) {
                (None, None) => None,
                (disaster, flood) => Some(disaster.unwrap_or(false) || flood.unwrap_or(false)),
            },
        }
    }

    pub fn is_set(&self, flag: Flag) -> bool {
        self.flag(flag).unwrap_or(false)
    }

    /// Writing disaster drops any legacy `flood` key.
    pub fn set(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::Regional => self.regional = Some(value),
            Flag::Remote => self.remote = Some(value),
            Flag::Northern => self.northern = Some(value),
            Flag::Bushfire => self.bushfire = Some(value),
            Flag::Disaster => {
                self.disaster = Some(value);
                self.flood = None;
            }
        }
    }

    /// Flags with no stored value. Disaster counts as present when only `flood` is set.
    pub fn missing_flags(&self) -> Vec<Flag> {
        Flag::ALL
            .into_iter()
            .filter(|flag| self.flag(*flag).is_none())
            .collect()
    }

    pub fn has_legacy_flood(&self) -> bool {
        self.flood.is_some()
    }

    /// The record with absent flags read as false.
    pub fn materialized(&self) -> ClassificationRecord {
        ClassificationRecord {
            regional: self.is_set(Flag::Regional),
            remote: self.is_set(Flag::Remote),
            northern: self.is_set(Flag::Northern),
            bushfire: self.is_set(Flag::Bushfire),
            disaster: self.is_set(Flag::Disaster),
        }
    }
}

impl From<ClassificationRecord> for StoredRecord {
    fn from(record: ClassificationRecord) -> Self {
        Self {
            regional: Some(record.regional),
            remote: Some(record.remote),
            northern: Some(record.northern),
            bushfire: Some(record.bushfire),
            disaster: Some(record.disaster),
            flood: None,
        }
    }
}

#[derive(Serialize)]
struct StoredRecordOut {
    #[serde(skip_serializing_if = "Option::is_none")]
    regional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    northern: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bushfire: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disaster: Option<bool>,
}

impl Serialize for StoredRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StoredRecordOut {
            regional: self.regional,
            remote: self.remote,
            northern: self.northern,
            bushfire: self.bushfire,
            disaster: self.flag(Flag::Disaster),
        }
        .serialize(serializer)
    }
}

/// The in-memory canonical dataset: postcode to stored record, ordered by postcode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: BTreeMap<Postcode, StoredRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, postcode: Postcode) -> bool {
        self.records.contains_key(&postcode)
    }

    pub fn get(&self, postcode: Postcode) -> Option<&StoredRecord> {
        self.records.get(&postcode)
    }

    pub fn insert(&mut self, postcode: Postcode, record: StoredRecord) -> Option<StoredRecord> {
        self.records.insert(postcode, record)
    }

    pub fn entry(&mut self, postcode: Postcode) -> btree_map::Entry<'_, Postcode, StoredRecord> {
        self.records.entry(postcode)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Postcode, StoredRecord> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, Postcode, StoredRecord> {
        self.records.iter_mut()
    }

    /// The materialized record for `postcode`, if present.
    pub fn classification(&self, postcode: Postcode) -> Option<ClassificationRecord> {
        self.records.get(&postcode).map(StoredRecord::materialized)
    }
}

impl FromIterator<(Postcode, ClassificationRecord)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (Postcode, ClassificationRecord)>>(iter: I) -> Self {
        Self {
            records: iter
                .into_iter()
                .map(|(postcode, record)| (postcode, StoredRecord::from(record)))
                .collect(),
        }
    }
}

impl FromIterator<(Postcode, StoredRecord)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (Postcode, StoredRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = (&'a Postcode, &'a StoredRecord);
    type IntoIter = btree_map::Iter<'a, Postcode, StoredRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
