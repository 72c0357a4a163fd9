//! Regex-backed format checks.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain`, where local is a dotted atom or a quoted string and domain
/// is a bracketed IPv4 literal or dotted labels ending in a 2+ letter TLD.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("Invalid email regex")
});

/// Optional `+`, optional parenthesised area code, then 3-3-(4..6) digits
/// with optional space, dot or dash separators.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$")
        .expect("Invalid phone regex")
});

static POSTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4,10}$").expect("Invalid postcode regex"));

/// Check an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check a phone number.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Check a postcode: 4 to 10 ASCII digits.
pub fn is_valid_postcode(value: &str) -> bool {
    POSTCODE_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_conventional_addresses() {
        for email in [
            "testing@brighte.com.au",
            "referral@gmail.com",
            "first.last@example.org",
            "\"quoted name\"@example.com",
            "user@[192.168.0.1]",
            "a-b_c+tag@sub.domain-name.io",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for email in [
            "not-an-email",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user..name@example.com",
            ".user@example.com",
            "user name@example.com",
            "user@exa mple.com",
            "user@@example.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn phone_accepts_loose_international_layouts() {
        for phone in [
            "0456123123",
            "045 612 3123",
            "(045) 612-3123",
            "+045.612.312312",
            "123-456-7890",
            "+(123)4567890",
        ] {
            assert!(is_valid_phone(phone), "{phone} should be valid");
        }
    }

    #[test]
    fn phone_rejects_other_layouts() {
        for phone in [
            "0456 123123",
            "12345",
            "123-456-789",
            "123-456-7890123",
            "++123 456 7890",
            "abc-def-ghij",
            "123  456 7890",
        ] {
            assert!(!is_valid_phone(phone), "{phone} should be invalid");
        }
    }

    #[test]
    fn postcode_is_four_to_ten_digits() {
        assert!(is_valid_postcode("2017"));
        assert!(is_valid_postcode("0123456789"));
        assert!(!is_valid_postcode("201"));
        assert!(!is_valid_postcode("01234567890"));
        assert!(!is_valid_postcode("20 17"));
        assert!(!is_valid_postcode("2017a"));
    }
}
