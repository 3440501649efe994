use crate::reference::iban_length;

/// Decides whether a candidate string is a valid IBAN per ISO 13616:
/// whitespace-stripped and upper-cased, checked against the registry length
/// for its country code, then verified with the MOD-97-10 checksum.
///
/// This is a pure predicate: every malformed input returns `false`, it never
/// panics and has no side effects.
pub fn validate(candidate: &str) -> bool {
    // A valid IBAN carries at least a country code and two check digits.
    if candidate.chars().count() < 4 {
        return false;
    }

    let normalized: String = candidate
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();

    let country: String = normalized.chars().take(2).collect();
    let expected = match iban_length(&country) {
        Some(len) => len,
        None => return false,
    };
    if normalized.chars().count() != expected {
        return false;
    }

    // Move country code and check digits to the end, then reduce the numeric
    // expansion modulo 97. Streaming digit by digit keeps the running value
    // far below u32 range regardless of IBAN length.
    let rearranged = normalized.chars().skip(4).chain(normalized.chars().take(4));
    let mut remainder: u32 = 0;
    for ch in rearranged {
        if ch.is_ascii_digit() {
            let digit = ch as u32 - '0' as u32;
            remainder = (remainder * 10 + digit) % 97;
        } else if ch.is_ascii_uppercase() {
            // ISO 13616 letter mapping: ordinal - 55, so 'A' (65) -> 10 and
            // 'Z' (90) -> 35. Letters always expand to exactly two digits.
            let value = ch as u32 - 55;
            remainder = (remainder * 100 + value) % 97;
        } else {
            return false;
        }
    }

    remainder == 1
}
