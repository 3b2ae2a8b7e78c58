//! Email format rules.
//!
//! A pragmatic ASCII-only format check, not RFC 5321: one `local@domain`
//! pattern, dot-separated atoms on the left, dot-separated labels on the
//! right, with length caps applied around the pattern match. No Unicode or
//! IDN forms, no comments or quoted strings.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum total address length.
pub const MAX_ADDRESS_LEN: usize = 256;

/// Maximum local-part length (text before the `@`).
pub const MAX_LOCAL_PART_LEN: usize = 64;

/// Maximum length of each dot-separated domain label.
pub const MAX_DOMAIN_LABEL_LEN: usize = 64;

// Local part: atoms over letters, digits, and the permitted symbol set,
// joined by single literal dots (no leading/trailing/consecutive dots).
// Domain: dot-separated labels, each alphanumeric with internal hyphens;
// the final label must start with a letter and be at least two characters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z][A-Za-z0-9-]*[A-Za-z0-9]$",
    )
    .expect("email pattern must compile")
});

/// Checks an address against the format rules, in order:
/// total length, pattern, local-part length, domain label lengths.
/// The first failed sub-check decides; later ones are not evaluated.
pub fn is_valid_email(address: &str) -> bool {
    if address.len() > MAX_ADDRESS_LEN {
        return false;
    }
    if !EMAIL_PATTERN.is_match(address) {
        return false;
    }

    // The pattern admits exactly one '@'.
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.len() > MAX_LOCAL_PART_LEN {
        return false;
    }
    domain
        .split('.')
        .all(|label| label.len() <= MAX_DOMAIN_LABEL_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_addresses_pass() {
        assert!(is_valid_email("test.user@gmail.com"));
        assert!(is_valid_email("a@bc"));
        assert!(is_valid_email("first+tag@sub.example.co"));
        assert!(is_valid_email("ODD_cha.r-s!#$%&'*@host-name.example.org"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_valid_email("Test.User@GMAIL.COM"));
    }

    #[test]
    fn test_missing_at_or_domain_fails() {
        assert!(!is_valid_email("test"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_dot_placement_in_local_part() {
        assert!(!is_valid_email(".user@example.com"));
        assert!(!is_valid_email("user.@example.com"));
        assert!(!is_valid_email("us..er@example.com"));
        assert!(is_valid_email("us.er@example.com"));
    }

    #[test]
    fn test_domain_label_rules() {
        // Labels may not start or end with a hyphen.
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example-.com"));
        assert!(is_valid_email("user@ex-ample.com"));
        // The final label must start with a letter and have two characters.
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.1com"));
        assert!(is_valid_email("user@example.c0"));
        // Empty labels are malformed.
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@.example.com"));
    }

    #[test]
    fn test_total_length_cap() {
        // 250 chars of local part blows the 256-char total before anything
        // else is looked at.
        let address = format!("{}@example.com", "a".repeat(250));
        assert!(address.len() > MAX_ADDRESS_LEN);
        assert!(!is_valid_email(&address));
    }

    #[test]
    fn test_local_part_length_cap() {
        let ok = format!("{}@example.com", "a".repeat(64));
        assert!(is_valid_email(&ok));
        let too_long = format!("{}@example.com", "a".repeat(65));
        assert!(!is_valid_email(&too_long));
    }

    #[test]
    fn test_domain_label_length_cap() {
        let ok = format!("user@{}.com", "d".repeat(64));
        assert!(is_valid_email(&ok));
        let too_long = format!("user@{}.com", "d".repeat(65));
        assert!(!is_valid_email(&too_long));
    }

    #[test]
    fn test_unicode_rejected() {
        assert!(!is_valid_email("üser@example.com"));
        assert!(!is_valid_email("user@exämple.com"));
    }
}
