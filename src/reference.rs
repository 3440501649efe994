/// Expected total IBAN length per country code, from the ISO 13616 registry.
/// The length covers the whole IBAN: country code, check digits and BBAN.
pub const IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24),
    ("AE", 23),
    ("AL", 28),
    ("AT", 20),
    ("AZ", 28),
    ("BA", 20),
    ("BE", 16),
    ("BG", 22),
    ("BH", 22),
    ("BR", 29),
    ("CH", 21),
    ("CR", 21),
    ("CY", 28),
    ("CZ", 24),
    ("DE", 22),
    ("DK", 18),
    ("DO", 28),
    ("EE", 20),
    ("ES", 24),
    ("FI", 18),
    ("FO", 18),
    ("FR", 27),
    ("GB", 22),
    ("GE", 22),
    ("GI", 23),
    ("GL", 18),
    ("GR", 27),
    ("GT", 28),
    ("HR", 21),
    ("HU", 28),
    ("IE", 22),
    ("IL", 23),
    ("IS", 26),
    ("IT", 27),
    ("KW", 30),
    ("KZ", 20),
    ("LB", 28),
    ("LI", 21),
    ("LT", 20),
    ("LU", 20),
    ("LV", 21),
    ("MC", 27),
    ("MD", 24),
    ("ME", 22),
    ("MK", 19),
    ("MR", 27),
    ("MT", 31),
    ("MU", 30),
    ("NL", 18),
    ("NO", 15),
    ("PK", 24),
    ("PL", 28),
    ("PS", 29),
    ("PT", 25),
    ("RO", 24),
    ("RS", 22),
    ("SA", 24),
    ("SE", 24),
    ("SI", 19),
    ("SK", 24),
    ("SM", 27),
    ("TN", 24),
    ("TR", 26),
    ("VG", 24),
];

pub fn iban_length(country: &str) -> Option<usize> {
    IBAN_LENGTHS
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, len)| *len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn known_countries_resolve() {
        assert_eq!(iban_length("DE"), Some(22));
        assert_eq!(iban_length("NO"), Some(15));
        assert_eq!(iban_length("MT"), Some(31));
        assert_eq!(iban_length("BE"), Some(16));
    }

    #[test]
    fn unknown_country_is_none() {
        assert_eq!(iban_length("ZZ"), None);
        assert_eq!(iban_length("de"), None);
        assert_eq!(iban_length(""), None);
    }

    #[test]
    fn table_entries_are_well_formed() {
        let mut seen = BTreeSet::new();
        for (code, len) in IBAN_LENGTHS {
            assert_eq!(code.len(), 2, "country code {code} must be 2 letters");
            assert!(
                code.chars().all(|ch| ch.is_ascii_uppercase()),
                "country code {code} must be uppercase ASCII"
            );
            assert!(
                (15..=31).contains(len),
                "length {len} for {code} outside registry range"
            );
            assert!(seen.insert(*code), "duplicate country code {code}");
        }
    }
}
