use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

const MAX_POSTCODE: u16 = 9999;

/// Numeric block reserved for the Northern Territory.
pub const NORTHERN_TERRITORY_BLOCK: RangeInclusive<u16> = 800..=899;

/// A four-digit Australian postcode.
///
/// Always rendered zero-padded (`800` displays as `"0800"`), and ordered the
/// same way its padded string form sorts. Serializes as that string so it can
/// key a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Postcode(u16);

impl Postcode {
    pub fn new(value: u16) -> Result<Self, PostcodeError> {
        if value > MAX_POSTCODE {
            return Err(PostcodeError::OutOfRange(u32::from(value)));
        }
        Ok(Self(value))
    }

    /// For compile-time tables; panics during const evaluation on values above 9999.
    pub const fn literal(value: u16) -> Self {
        assert!(value <= MAX_POSTCODE, "postcode literal out of range");
        Self(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    pub fn is_northern_territory(self) -> bool {
        NORTHERN_TERRITORY_BLOCK.contains(&self.0)
    }

    /// Every postcode in the closed range. Empty when `start > end`.
    pub fn range(start: Postcode, end: Postcode) -> impl Iterator<Item = Postcode> {
        (start.0..=end.0).map(Postcode)
    }

    pub fn northern_territory() -> impl Iterator<Item = Postcode> {
        NORTHERN_TERRITORY_BLOCK.map(Postcode)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for Postcode {
    type Err = PostcodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.len() != 4 || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(PostcodeError::Malformed(raw.to_string()));
        }
        let value = trimmed
            .parse::<u16>()
            .map_err(|_| PostcodeError::Malformed(raw.to_string()))?;
        Postcode::new(value)
    }
}

impl Serialize for Postcode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Postcode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostcodeError {
    #[error("postcode must be exactly four digits, got '{0}'")]
    Malformed(String),
    #[error("postcode {0} is outside 0000-9999")]
    OutOfRange(u32),
}
