use super::postcode::Postcode;
use super::ranges;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A state or territory key used by the published postcode tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    Act,
    Nsw,
    Nt,
    Qld,
    Sa,
    Tas,
    Vic,
    Wa,
    NorfolkIsland,
    /// Ad-hoc additions published outside any state's list.
    Special,
}

impl Jurisdiction {
    pub const fn code(self) -> &'static str {
        match self {
            Jurisdiction::Act => "ACT",
            Jurisdiction::Nsw => "NSW",
            Jurisdiction::Nt => "NT",
            Jurisdiction::Qld => "QLD",
            Jurisdiction::Sa => "SA",
            Jurisdiction::Tas => "TAS",
            Jurisdiction::Vic => "VIC",
            Jurisdiction::Wa => "WA",
            Jurisdiction::NorfolkIsland => "Norfolk",
            Jurisdiction::Special => "Special",
        }
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ACT" => Some(Jurisdiction::Act),
            "NSW" => Some(Jurisdiction::Nsw),
            "NT" => Some(Jurisdiction::Nt),
            "QLD" => Some(Jurisdiction::Qld),
            "SA" => Some(Jurisdiction::Sa),
            "TAS" => Some(Jurisdiction::Tas),
            "VIC" => Some(Jurisdiction::Vic),
            "WA" => Some(Jurisdiction::Wa),
            "NORFOLK" | "NORFOLK ISLAND" | "NI" => Some(Jurisdiction::NorfolkIsland),
            "SPECIAL" => Some(Jurisdiction::Special),
            _ => None,
        }
    }

    /// Numeric postcode blocks allocated to the jurisdiction, used to resolve "all" markers.
    pub const fn blocks(self) -> &'static [(u16, u16)] {
        match self {
            Jurisdiction::Act => &[(200, 299), (2600, 2620), (2900, 2920)],
            Jurisdiction::Nsw => &[(1000, 2599), (2619, 2899), (2921, 2999)],
            Jurisdiction::Nt => &[(800, 899)],
            Jurisdiction::Qld => &[(4000, 4999), (9000, 9999)],
            Jurisdiction::Sa => &[(5000, 5999)],
            Jurisdiction::Tas => &[(7000, 7999)],
            Jurisdiction::Vic => &[(3000, 3999), (8000, 8999)],
            Jurisdiction::Wa => &[(6000, 6999)],
            Jurisdiction::NorfolkIsland => &[(2899, 2899)],
            Jurisdiction::Special => &[],
        }
    }

    pub fn all_postcodes(self) -> BTreeSet<Postcode> {
        self.blocks()
            .iter()
            .flat_map(|(start, end)| ranges::expand_range(*start, *end))
            .collect()
    }
}

/// One jurisdiction's entry in a published table: a postcode list or an "all" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEntry<'a> {
    All,
    Listed(&'a str),
}

impl<'a> TableEntry<'a> {
    /// Recognizes "all", "all postcodes" and "all areas" in any case.
    pub fn parse(raw: &'a str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" | "all postcodes" | "all areas" => TableEntry::All,
            _ => TableEntry::Listed(raw),
        }
    }

    pub fn resolve(self, jurisdiction: Jurisdiction) -> BTreeSet<Postcode> {
        match self {
            TableEntry::All => jurisdiction.all_postcodes(),
            TableEntry::Listed(raw) => ranges::expand_list(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_marker_resolves_through_numeric_blocks() {
        let nt = TableEntry::parse("all").resolve(Jurisdiction::Nt);
        assert_eq!(nt.len(), 100);
        assert_eq!(nt.first().map(ToString::to_string).as_deref(), Some("0800"));
        assert_eq!(nt.last().map(ToString::to_string).as_deref(), Some("0899"));

        let act = TableEntry::parse("All postcodes").resolve(Jurisdiction::Act);
        assert!(act.contains(&Postcode::literal(200)));
        assert!(act.contains(&Postcode::literal(2905)));
        assert!(!act.contains(&Postcode::literal(2000)));

        assert_eq!(
            TableEntry::parse("All areas").resolve(Jurisdiction::Tas).len(),
            1000
        );
    }

    #[test]
    fn special_has_no_block_to_resolve() {
        assert!(TableEntry::All.resolve(Jurisdiction::Special).is_empty());
    }

    #[test]
    fn listed_entries_expand() {
        let entry = TableEntry::parse("0822, 0872 to 0875");
        assert_eq!(entry.resolve(Jurisdiction::Nt).len(), 5);
    }

    #[test]
    fn codes_round_trip() {
        for jurisdiction in [
            Jurisdiction::Act,
            Jurisdiction::Nsw,
            Jurisdiction::Nt,
            Jurisdiction::Qld,
            Jurisdiction::Sa,
            Jurisdiction::Tas,
            Jurisdiction::Vic,
            Jurisdiction::Wa,
            Jurisdiction::NorfolkIsland,
            Jurisdiction::Special,
        ] {
            assert_eq!(Jurisdiction::from_code(jurisdiction.code()), Some(jurisdiction));
        }
    }
}
