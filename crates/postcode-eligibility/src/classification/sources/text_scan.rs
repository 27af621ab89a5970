use super::{ContributionSource, FetchError};
use crate::classification::contribution::{Confidence, Contribution, FlagSet};
use crate::classification::postcode::Postcode;
use crate::classification::ranges::expand_range;
use crate::classification::record::Flag;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Two four-digit postcodes joined by `to`, a hyphen, en-dash or em-dash.
static POSTCODE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4})\s*(?:(?i:to)|-|\x{2013}|\x{2014})\s*(\d{4})\b")
        .expect("invalid postcode range pattern")
});

static SINGLE_POSTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}\b").expect("invalid postcode pattern"));

/// Australian service and landline numbers: 1300/1800 and 13 numbers, and
/// area-coded landlines such as `(08) 8999 1234`.
static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b1[38]00(?:[ -]?\d{3}){2}\b|\b13(?:[ -]?\d{2}){2}\b|\(0\d\)\s?\d{4}[ -]?\d{4}\b|\b0\d[ -]\d{4}[ -]?\d{4}\b",
    )
    .expect("invalid phone number pattern")
});

/// Heuristic scan of a free-text document such as a saved eligibility page.
///
/// Low confidence and always additive: anything it finds can be overridden by
/// the critical table and never clears a flag.
#[derive(Debug, Clone)]
pub struct TextScanSource {
    path: PathBuf,
    label: String,
}

impl TextScanSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = format!("text:{}", path.display());
        Self { path, label }
    }
}

impl ContributionSource for TextScanSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn collect(&self) -> Result<Vec<Contribution>, FetchError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        let contribution = scan_text(self.label.clone(), &text);
        if contribution.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![contribution])
    }
}

/// Extracts postcodes from `text`, asserting the flags named by the nearest
/// preceding heading. A line that names categories and lists postcodes uses
/// its own categories instead.
pub fn scan_text(label: impl Into<String>, text: &str) -> Contribution {
    let mut contribution = Contribution::additive(label, Confidence::Heuristic);
    let mut context = FlagSet::new();

    for line in text.lines() {
        let named = flags_named(line);
        let postcodes = postcodes_in(line);

        if postcodes.is_empty() {
            if !named.is_empty() {
                context = named;
            }
            continue;
        }

        let flags = if named.is_empty() { context } else { named };
        if flags.is_empty() {
            continue;
        }
        contribution.assert_all(postcodes, flags);
    }
    contribution
}

fn flags_named(line: &str) -> FlagSet {
    let lower = line.to_lowercase();
    let mut flags = FlagSet::new();
    if lower.contains("regional") || lower.contains("designated") {
        flags.assert(Flag::Regional, true);
    }
    if lower.contains("remote") {
        flags.assert(Flag::Remote, true);
    }
    if lower.contains("northern") {
        flags.assert(Flag::Northern, true);
    }
    if lower.contains("bushfire") {
        flags.assert(Flag::Bushfire, true);
    }
    if lower.contains("disaster") || lower.contains("flood") {
        flags.assert(Flag::Disaster, true);
    }
    flags
}

fn postcodes_in(line: &str) -> Vec<Postcode> {
    let line = PHONE_NUMBER.replace_all(line, " ");
    let mut found = Vec::new();

    for captures in POSTCODE_RANGE.captures_iter(&line) {
        if let (Ok(start), Ok(end)) = (captures[1].parse::<u16>(), captures[2].parse::<u16>()) {
            found.extend(expand_range(start, end));
        }
    }

    let singles = POSTCODE_RANGE.replace_all(&line, " ");
    found.extend(
        SINGLE_POSTCODE
            .find_iter(&singles)
            .filter_map(|token| token.as_str().parse::<Postcode>().ok()),
    );
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "\
Remote and very remote Australia
Western Australia: 6161, 6335 to 6338
Northern Australia
Queensland 4870\u{2013}4872; phone 1300 123 456
Bushfire declared areas: 2083
Call 13 14 50 for help
";

    fn has(contribution: &Contribution, code: u16, flag: Flag) -> bool {
        contribution
            .get(Postcode::literal(code))
            .and_then(|flags| flags.get(flag))
            .unwrap_or(false)
    }

    #[test]
    fn headings_set_the_context_for_following_lines() {
        let contribution = scan_text("page", PAGE);

        assert!(has(&contribution, 6161, Flag::Remote));
        assert!(has(&contribution, 6337, Flag::Remote));
        assert!(!has(&contribution, 6337, Flag::Regional));
        assert!(has(&contribution, 4871, Flag::Northern));
    }

    #[test]
    fn inline_categories_win_over_context() {
        let contribution = scan_text("page", PAGE);
        let flags = contribution
            .get(Postcode::literal(2083))
            .expect("2083 found");
        assert_eq!(flags.get(Flag::Bushfire), Some(true));
        assert_eq!(flags.get(Flag::Northern), None);
    }

    #[test]
    fn text_without_a_heading_contributes_nothing() {
        let contribution = scan_text("page", "2000 2600 3000");
        assert!(contribution.is_empty());
    }

    #[test]
    fn phone_numbers_are_not_postcodes() {
        let contribution = scan_text("page", PAGE);
        assert!(contribution.get(Postcode::literal(1300)).is_none());

        let contribution = scan_text(
            "page",
            "Northern Australia\nQLD 4870; phone 1800 555 010 or (08) 8999 1234",
        );
        assert_eq!(contribution.len(), 1);
        assert!(has(&contribution, 4870, Flag::Northern));
    }

    #[test]
    fn ranges_without_spaces_are_expanded() {
        let contribution = scan_text(
            "page",
            "Remote areas\nWA: 6335to6338, 6161\nNorthern Australia\nQLD 4870; phone 1300 123 456",
        );

        for code in [6335, 6336, 6337, 6338, 6161] {
            assert!(has(&contribution, code, Flag::Remote), "{code} missing");
        }
        assert!(has(&contribution, 4870, Flag::Northern));
        assert!(contribution.get(Postcode::literal(1300)).is_none());
        assert_eq!(contribution.len(), 6);
    }

    #[test]
    fn only_four_digit_tokens_count() {
        let contribution = scan_text("page", "Regional\n123 45678 2650");
        assert_eq!(contribution.len(), 1);
        assert!(has(&contribution, 2650, Flag::Regional));
    }

    #[test]
    fn scan_is_additive_and_heuristic() {
        let contribution = scan_text("page", PAGE);
        assert_eq!(
            contribution.kind(),
            crate::classification::contribution::ContributionKind::Additive
        );
        assert_eq!(contribution.confidence(), Confidence::Heuristic);
    }
}
