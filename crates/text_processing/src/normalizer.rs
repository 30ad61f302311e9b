//! Free-text number normalization
//!
//! Converts numeric tokens as typed in Brazilian chat messages into `f64`:
//! `.` groups thousands, `,` is the decimal separator, and magnitude words
//! ("mil", "milhão"/"milhões") multiply the parsed value. Static patterns are
//! compiled once at program start using `once_cell::sync::Lazy`.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decimal number in Brazilian convention: optional `.`-grouped thousands,
/// optional single `,` decimal part
static DECIMAL_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d{3})*(?:,\d+)?").unwrap());

/// Magnitude multiplier for parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Magnitude {
    Unit,
    Thousand,
    Million,
}

impl Magnitude {
    fn value(&self) -> f64 {
        match self {
            Magnitude::Unit => 1.0,
            Magnitude::Thousand => 1_000.0,
            Magnitude::Million => 1_000_000.0,
        }
    }
}

// Whole-word cues, matched after diacritics are stripped. "mil" uses word
// boundaries so "milhoes" never double-counts as a thousand.
static CUE_MILLION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmilh(?:ao|oes)\b").unwrap());
static CUE_THOUSAND: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmil\b").unwrap());

/// Remove diacritics via NFD decomposition, dropping combining marks
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Parse the first numeric token in `text`, applying any magnitude word.
///
/// Returns `None` when no numeric substring is present or the result is not
/// finite. A decimal combined with a magnitude multiplies: `"1,5 mil"` is
/// `1500.0`, never a digit concatenation.
pub fn normalize_number(text: &str) -> Option<f64> {
    let lowered = strip_diacritics(text).to_lowercase();

    let token = DECIMAL_NUMBER.find(&lowered)?;

    let magnitude = if CUE_MILLION.is_match(&lowered) {
        Magnitude::Million
    } else if CUE_THOUSAND.is_match(&lowered) {
        Magnitude::Thousand
    } else {
        Magnitude::Unit
    };

    let cleaned = token.as_str().replace('.', "").replace(',', ".");
    let value = cleaned.parse::<f64>().ok()? * magnitude.value();

    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_with_grouping() {
        assert_eq!(normalize_number("R$ 350.000,00"), Some(350_000.0));
    }

    #[test]
    fn test_decimal_times_thousand() {
        assert_eq!(normalize_number("1,5 mil"), Some(1500.0));
    }

    #[test]
    fn test_millions_accented_and_plain() {
        assert_eq!(normalize_number("2 milhões"), Some(2_000_000.0));
        assert_eq!(normalize_number("2 milhoes"), Some(2_000_000.0));
        assert_eq!(normalize_number("1 milhão"), Some(1_000_000.0));
    }

    #[test]
    fn test_millions_never_counts_as_thousand() {
        // "milhoes" contains "mil" but must not match it as a whole word
        assert_eq!(normalize_number("1,2 milhões"), Some(1_200_000.0));
    }

    #[test]
    fn test_no_number_is_none() {
        assert_eq!(normalize_number("abc"), None);
        assert_eq!(normalize_number(""), None);
        assert_eq!(normalize_number("valor do imóvel"), None);
    }

    #[test]
    fn test_plain_integer() {
        assert_eq!(normalize_number("prazo de 30 anos"), Some(30.0));
    }

    #[test]
    fn test_takes_first_number() {
        assert_eq!(normalize_number("entre 200 e 300"), Some(200.0));
    }

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(strip_diacritics("imóvel milhão"), "imovel milhao");
        assert_eq!(strip_diacritics("já à vista"), "ja a vista");
    }
}
