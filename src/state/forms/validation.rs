//! Field format checks

use regex::Regex;
use std::sync::LazyLock;

/// One `@`, no whitespace, and at least one dot in the domain part
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Check an address against the newsletter email pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@mail.example.sa"));
    }

    #[test]
    fn test_rejects_missing_tld_dot() {
        assert!(!is_valid_email("user@example"));
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_rejects_embedded_space() {
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email(" user@example.com"));
    }

    #[test]
    fn test_rejects_double_at() {
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid_email(""));
    }
}
