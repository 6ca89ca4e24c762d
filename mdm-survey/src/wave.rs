use serde::{Deserialize, Serialize};
use std::fmt;

/// A survey wave ("ola"): one fieldwork round of the brand study.
///
/// The study CSVs spell the same wave two ways depending on the column
/// layout: bare wave columns use `"Ola 1"` while composite `wave_rubro`
/// columns use the compact `"Ola1"` prefix. `Wave` collapses both onto a
/// single ordinal so a user selection survives the spelling drift.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Wave(pub u8);

/// Waves fielded for the study so far, in chronological order.
///
/// Hand-maintained alongside the data files, like the chart registry:
/// append here when a new wave goes to field.
pub const WAVES: [Wave; 2] = [Wave(1), Wave(2)];

impl Wave {
    /// Parse any accepted spelling of a wave token: `"Ola 1"`, `"Ola1"`,
    /// `"ola 2"`. Returns `None` for tokens that are not wave identifiers.
    pub fn parse(token: &str) -> Option<Wave> {
        let t = token.trim();
        let prefix = t.get(..3)?;
        if !prefix.eq_ignore_ascii_case("ola") {
            return None;
        }
        let digits = t.get(3..)?.trim();
        if digits.is_empty() {
            return None;
        }
        digits.parse::<u8>().ok().filter(|n| *n > 0).map(Wave)
    }

    /// Display label, matching the bare-wave column convention.
    pub fn label(&self) -> String {
        format!("Ola {}", self.0)
    }

    /// Compact spelling used by composite `wave_rubro` column names.
    pub fn compact(&self) -> String {
        format!("Ola{}", self.0)
    }

    /// Every column-name spelling this wave may appear under. Selections
    /// are expanded through this when building a filter set, so one
    /// selected wave matches either CSV naming convention.
    pub fn column_keys(&self) -> [String; 2] {
        [self.label(), self.compact()]
    }
}

impl fmt::Display for Wave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ola {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Wave, WAVES};

    #[test]
    fn parse_accepts_both_column_spellings() {
        assert_eq!(Wave::parse("Ola 1"), Some(Wave(1)));
        assert_eq!(Wave::parse("Ola1"), Some(Wave(1)));
        assert_eq!(Wave::parse("  Ola 2  "), Some(Wave(2)));
        assert_eq!(Wave::parse("ola 2"), Some(Wave(2)));
        assert_eq!(Wave::parse("OLA3"), Some(Wave(3)));
    }

    #[test]
    fn parse_rejects_non_wave_tokens() {
        assert_eq!(Wave::parse("Categoria"), None);
        assert_eq!(Wave::parse("Ola"), None);
        assert_eq!(Wave::parse("OlaX"), None);
        assert_eq!(Wave::parse("Ola 0"), None);
        assert_eq!(Wave::parse("15%"), None);
        assert_eq!(Wave::parse(""), None);
    }

    #[test]
    fn column_keys_cover_both_conventions() {
        let keys = Wave(2).column_keys();
        assert!(keys.contains(&"Ola 2".to_string()));
        assert!(keys.contains(&"Ola2".to_string()));
    }

    #[test]
    fn waves_are_chronological() {
        let mut sorted = WAVES.to_vec();
        sorted.sort();
        assert_eq!(sorted, WAVES.to_vec());
        assert_eq!(WAVES[0].label(), "Ola 1");
    }
}
