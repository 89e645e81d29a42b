//! Acceptance rules applied to raw pattern matches

/// ASCII digits of `candidate`, in order
pub fn digits_only(candidate: &str) -> String {
    candidate.chars().filter(char::is_ascii_digit).collect()
}

/// Issuance rules for a full SSN: nine digits, area not 000/666/9xx,
/// group not 00, serial not 0000.
pub fn is_valid_ssn(candidate: &str) -> bool {
    let digits = digits_only(candidate);
    if digits.len() != 9 {
        return false;
    }

    let (area, rest) = digits.split_at(3);
    let (group, serial) = rest.split_at(2);

    if area == "000" || area == "666" || area >= "900" {
        return false;
    }
    group != "00" && serial != "0000"
}

/// Ten digits, or eleven with a country code
pub fn is_valid_phone(candidate: &str) -> bool {
    matches!(digits_only(candidate).len(), 10 | 11)
}

/// Strip the separator the phone pattern may absorb ahead of the number
pub fn trim_phone(candidate: &str) -> &str {
    candidate.trim_start_matches(|c: char| c == '-' || c == '.' || c.is_whitespace())
}
