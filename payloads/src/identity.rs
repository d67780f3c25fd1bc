//! Rules tying a chosen username to a LitMail address.

/// Every account lives under this domain.
pub const EMAIL_DOMAIN: &str = "litmail.art";

pub const MIN_PASSWORD_LEN: usize = 8;

/// Build the canonical address for a username. The suffix is appended
/// exactly once; callers must pass the bare username, never an address.
pub fn derive_email(username: &str) -> String {
    format!("{username}@{EMAIL_DOMAIN}")
}

/// Normalize a username as typed into the signup field: lowercase, with
/// anything outside `[a-z0-9._-]` dropped. Idempotent.
///
/// Login input is deliberately left untouched; only signup constrains the
/// characters a new address may contain.
pub fn normalize_username(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| {
            c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || matches!(c, '.' | '_' | '-')
        })
        .collect()
}

/// Whether a signup submission is allowed to proceed.
pub fn signup_fields_valid(username: &str, password: &str) -> bool {
    !username.is_empty() && password.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_email_with_single_suffix() {
        assert_eq!(derive_email("alice"), "alice@litmail.art");
        // Applying over a previous result would double the suffix; the
        // suffix never appears in a normalized username, so a derived
        // address can always be told apart from a raw one.
        assert_eq!(derive_email("alice").matches('@').count(), 1);
    }

    #[test]
    fn normalization_strips_and_lowercases() {
        assert_eq!(normalize_username("Jo!!hn_Doe"), "john_doe");
        assert_eq!(normalize_username("A.B-c_9"), "a.b-c_9");
        assert_eq!(normalize_username("spaces no"), "spacesno");
        assert_eq!(normalize_username(""), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["Jo!!hn_Doe", "ALICE", "weird@litmail.art", "émile"] {
            let once = normalize_username(raw);
            assert_eq!(normalize_username(&once), once);
        }
    }

    #[test]
    fn normalization_rejects_the_at_sign() {
        // Keeps derive_email from ever producing a double address.
        assert_eq!(normalize_username("alice@litmail.art"), "alicelitmail.art");
    }

    #[test]
    fn signup_validity_gate() {
        assert!(signup_fields_valid("alice", "longenough1"));
        assert!(!signup_fields_valid("", "longenough1"));
        assert!(!signup_fields_valid("alice", "short77"));
        // Exactly at the minimum is allowed.
        assert!(signup_fields_valid("alice", "12345678"));
    }
}
