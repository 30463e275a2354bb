//! Numeric locale separators
//!
//! The decimal and thousands separators used by decimal formatting. The
//! process-wide value is resolved once from the environment (`LC_ALL`,
//! `LC_NUMERIC`, then `LANG`) and never changes afterwards; formatting calls
//! can also be handed an explicit `Separators` instead.

use std::env;

use log::debug;
use once_cell::sync::Lazy;

const NO_BREAK_SPACE: char = '\u{a0}';
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

static SYSTEM_SEPARATORS: Lazy<Separators> = Lazy::new(Separators::detect);

/// Decimal and thousands separator characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separators {
    /// Separates the integer part from the fractional digits
    pub decimal: char,
    /// Groups integer digits in threes
    pub thousands: char,
}

impl Default for Separators {
    fn default() -> Self {
        Self { decimal: '.', thousands: ',' }
    }
}

impl Separators {
    /// Create a separator pair
    pub fn new(decimal: char, thousands: char) -> Self {
        Self { decimal, thousands }
    }

    /// Decimal comma with dot grouping, as in `1.234.567,89`
    pub fn decimal_comma() -> Self {
        Self { decimal: ',', thousands: '.' }
    }

    /// The separators of the host numeric locale, resolved once per process
    pub fn system() -> &'static Separators {
        &SYSTEM_SEPARATORS
    }

    /// Map a POSIX locale name such as `de_DE.UTF-8` to its separators
    ///
    /// Unknown languages, `C` and `POSIX` get the default `.`/`,` pair.
    pub fn from_locale(locale: &str) -> Self {
        let name = locale.split(['.', '@']).next().unwrap_or_default();
        let mut parts = name.split(['_', '-']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        match (language.as_str(), region.as_str()) {
            ("de" | "it", "CH") | ("rm", _) => Self::new('.', RIGHT_SINGLE_QUOTE),
            ("de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el" | "ro" | "hr" | "sl"
            | "sr" | "is" | "vi", _) => Self::decimal_comma(),
            ("fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "nb" | "nn" | "no" | "fi" | "uk" | "hu"
            | "bg" | "et" | "lv" | "lt" | "kk", _) => Self::new(',', NO_BREAK_SPACE),
            _ => Self::default(),
        }
    }

    fn detect() -> Self {
        let locale = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty());

        let separators = match locale.as_deref() {
            None | Some("C") | Some("POSIX") => Self::default(),
            Some(name) => Self::from_locale(name),
        };

        debug!(
            "numeric locale {:?}: decimal {:?}, thousands {:?}",
            locale, separators.decimal, separators.thousands
        );
        separators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separators() {
        let separators = Separators::default();
        assert_eq!(separators.decimal, '.');
        assert_eq!(separators.thousands, ',');
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(Separators::from_locale("en_US.UTF-8"), Separators::default());
        assert_eq!(Separators::from_locale("de_DE.UTF-8"), Separators::decimal_comma());
        assert_eq!(Separators::from_locale("pt-BR"), Separators::decimal_comma());
        assert_eq!(Separators::from_locale("fr_FR"), Separators::new(',', NO_BREAK_SPACE));
        assert_eq!(Separators::from_locale("de_CH.UTF-8"), Separators::new('.', RIGHT_SINGLE_QUOTE));
        assert_eq!(Separators::from_locale("C"), Separators::default());
        assert_eq!(Separators::from_locale(""), Separators::default());
    }

    #[test]
    fn test_system_is_stable() {
        let first = *Separators::system();
        let second = *Separators::system();
        assert_eq!(first, second);
        assert_ne!(first.decimal, first.thousands);
    }
}
