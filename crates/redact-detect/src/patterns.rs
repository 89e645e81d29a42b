//! Compiled pattern set
//!
//! Digit classes are written as `[0-9]` rather than `\d` so that only ASCII
//! digits are matched; the validators slice on byte offsets.

use regex::Regex;
use std::sync::LazyLock;

/// local-part@domain.tld
pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").unwrap());

/// Optional `+`/`1` prefix, optional area code (bare or parenthesized), 3 + 4 digits.
///
/// There is no leading boundary, so the `1` prefix can take the last digit of
/// a preceding number: `21 555-123-4567` yields `1 555-123-4567`.
pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\+?1?[-.\s]?(?:\([0-9]{3}\)|[0-9]{3})?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b")
        .unwrap()
});

/// 3-2-4 digits, each separator independently `-`, `.`, whitespace or absent
pub static FULL_SSN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{3}[-.\s]?[0-9]{2}[-.\s]?[0-9]{4}\b").unwrap()
});

/// `xxx-xx-1234`, `***-**-1234`, `XXXX1234` and friends
pub static MASKED_SSN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[x*]{3,4}[-.\s]?[x*]{0,2}[-.\s]?[0-9]{4}\b").unwrap()
});

/// "last four digits ... are 1234"; group 1 holds the digits
pub static PARTIAL_SSN_LAST_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\blast\s+(?:four|4)\s+digits?\b(?:\s+\S+){0,10}?\s*(?:are|is|:)?\s*([0-9]{4})\b",
    )
    .unwrap()
});

/// "(ssn) ending in 1234"; group 1 holds the digits
pub static PARTIAL_SSN_ENDING_IN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\b(?:ssn|social\s+security(?:\s+number)?)\s+)?\b(?:ending|ends)\s+in\s+([0-9]{4})\b",
    )
    .unwrap()
});

/// "SSN: 1234"; group 1 holds the digits
pub static PARTIAL_SSN_LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:ssn|social\s+security(?:\s+number)?)[\s:#-]+(?:[0-9]{3}[-.\s][0-9]{2}[-.\s][0-9]{4}[\s/,]+)?([0-9]{4})\b",
    )
    .unwrap()
});

/// The three contextual partial-SSN forms, in no significant order
pub fn partial_ssn_patterns() -> [&'static Regex; 3] {
    [
        &*PARTIAL_SSN_LAST_DIGITS,
        &*PARTIAL_SSN_ENDING_IN,
        &*PARTIAL_SSN_LABELED,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
        re.find_iter(text).map(|m| m.as_str()).collect()
    }

    fn groups<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
        re.captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    #[test]
    fn test_email() {
        let text = "Write to Jane.Doe+work@mail.example.co.uk or ops@x.io.";
        assert_eq!(
            all(&EMAIL, text),
            vec!["Jane.Doe+work@mail.example.co.uk", "ops@x.io"]
        );
        assert!(all(&EMAIL, "user@localhost").is_empty());
    }

    #[test]
    fn test_phone_forms() {
        assert_eq!(all(&PHONE, "555-123-4567"), vec!["555-123-4567"]);
        assert_eq!(all(&PHONE, "(555) 987-6543"), vec!["(555) 987-6543"]);
        assert_eq!(all(&PHONE, "+1 555.123.4567"), vec!["+1 555.123.4567"]);
        assert_eq!(all(&PHONE, "5551234567"), vec!["5551234567"]);
    }

    #[test]
    fn test_phone_does_not_span_ssn() {
        assert!(all(&PHONE, "123-45-6789").is_empty());
    }

    #[test]
    fn test_full_ssn_separators() {
        assert_eq!(all(&FULL_SSN, "123-45-6789"), vec!["123-45-6789"]);
        assert_eq!(all(&FULL_SSN, "123 45 6789"), vec!["123 45 6789"]);
        assert_eq!(all(&FULL_SSN, "123.45-6789"), vec!["123.45-6789"]);
        assert_eq!(all(&FULL_SSN, "123456789"), vec!["123456789"]);
        assert!(all(&FULL_SSN, "1234567890").is_empty());
    }

    #[test]
    fn test_masked_ssn() {
        assert_eq!(all(&MASKED_SSN, "xxx-xx-5555"), vec!["xxx-xx-5555"]);
        assert_eq!(all(&MASKED_SSN, "***-**-1234"), vec!["***-**-1234"]);
        assert_eq!(all(&MASKED_SSN, "XXXX1234"), vec!["XXXX1234"]);
        assert!(all(&MASKED_SSN, "xxx-xx-55556").is_empty());
    }

    #[test]
    fn test_last_digits_context() {
        let re = &PARTIAL_SSN_LAST_DIGITS;
        assert_eq!(
            groups(re, "the last four digits of my card are 1234"),
            vec!["1234"]
        );
        assert_eq!(groups(re, "Last 4 digits: 9876"), vec!["9876"]);
        assert_eq!(groups(re, "last 4 digit is 1111"), vec!["1111"]);
        assert!(groups(re, "the last four pages were 1234").is_empty());
    }

    #[test]
    fn test_last_digits_word_limit() {
        let far = "last four digits a b c d e f g h i j k l 1234";
        assert!(groups(&PARTIAL_SSN_LAST_DIGITS, far).is_empty());
    }

    #[test]
    fn test_ending_in_context() {
        let re = &PARTIAL_SSN_ENDING_IN;
        assert_eq!(
            groups(re, "account ending in 4321 and SSN ending in 4321"),
            vec!["4321", "4321"]
        );
        assert_eq!(
            groups(re, "Social Security Number ends in 2468"),
            vec!["2468"]
        );
    }

    #[test]
    fn test_labeled_context() {
        let re = &PARTIAL_SSN_LABELED;
        assert_eq!(groups(re, "SSN: 1234"), vec!["1234"]);
        assert_eq!(groups(re, "social security #5678"), vec!["5678"]);
        assert!(groups(re, "SSN: 123-45-6789").is_empty());
        assert!(groups(re, "SSN: 12345").is_empty());
    }
}
