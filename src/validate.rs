//! Boundary validation for entry fields and master passwords.
//!
//! Every mutating engine call validates here before anything reaches
//! the record store, so a rejected field never causes a partial write.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{PasskeepError, Result};

/// `scheme://host...` or `label.label...tld`.
const WEBSITE_PATTERN: &str =
    r"^https?://[^\s/$.?#].[^\s]*$|^[a-zA-Z0-9][-a-zA-Z0-9]*(\.[a-zA-Z]{2,})+$";

/// Special characters accepted by the master password policy.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

fn website_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WEBSITE_PATTERN).expect("valid website pattern"))
}

/// Validate a website field: non-empty, URL- or domain-shaped.
pub fn website(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PasskeepError::InvalidField {
            field: "website",
            reason: "must not be empty".into(),
        });
    }
    if !website_regex().is_match(value.trim()) {
        return Err(PasskeepError::InvalidField {
            field: "website",
            reason: "must be a URL (https://...) or a domain (example.com)".into(),
        });
    }
    Ok(())
}

/// Validate a username field: non-empty after trimming.
pub fn username(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PasskeepError::InvalidField {
            field: "username",
            reason: "must not be empty".into(),
        });
    }
    Ok(())
}

/// Validate an entry password field: non-empty after trimming.
pub fn entry_password(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PasskeepError::InvalidField {
            field: "password",
            reason: "must not be empty".into(),
        });
    }
    Ok(())
}

/// Validate a TOTP seed: empty (no OTP), or base32 characters after
/// removing spaces.
pub fn totp_seed(value: &str) -> Result<()> {
    let stripped: String = value.chars().filter(|c| *c != ' ').collect();
    if stripped.is_empty() {
        return Ok(());
    }
    // Case-insensitive: the generator uppercases before decoding.
    let ok = stripped
        .chars()
        .all(|c| c.is_ascii_alphabetic() || ('2'..='7').contains(&c));
    if !ok {
        return Err(PasskeepError::InvalidField {
            field: "totp_seed",
            reason: "must be base32 (A-Z and 2-7)".into(),
        });
    }
    Ok(())
}

/// Validate all fields of an entry mutation in one call.
pub fn entry_fields(website_v: &str, username_v: &str, password_v: &str, seed: &str) -> Result<()> {
    website(website_v)?;
    username(username_v)?;
    entry_password(password_v)?;
    totp_seed(seed)?;
    Ok(())
}

/// The documented minimum master password policy: at least 8 characters
/// with an uppercase letter, a lowercase letter, a digit, and a special
/// character.
pub fn master_password(value: &str) -> Result<()> {
    let strong = value.len() >= 8
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| SPECIAL_CHARS.contains(c));

    if !strong {
        return Err(PasskeepError::InvalidField {
            field: "master password",
            reason: "must be at least 8 characters with upper, lower, digit, and special"
                .into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_urls_and_domains() {
        assert!(website("https://example.com/login").is_ok());
        assert!(website("http://intranet").is_ok());
        assert!(website("example.com").is_ok());
        assert!(website("sub.example.co.uk").is_ok());
    }

    #[test]
    fn rejects_non_website_strings() {
        assert!(website("").is_err());
        assert!(website("   ").is_err());
        assert!(website("not a url").is_err());
        assert!(website("ftp://example.com").is_err());
    }

    #[test]
    fn totp_seed_accepts_empty_and_base32() {
        assert!(totp_seed("").is_ok());
        assert!(totp_seed("JBSW Y3DP EHPK 3PXP").is_ok());
        assert!(totp_seed("jbswy3dpehpk3pxp").is_ok());
        assert!(totp_seed("seed-with-hyphens").is_err());
        assert!(totp_seed("ABC018").is_err()); // 0, 1, 8 are not base32
    }

    #[test]
    fn master_password_policy() {
        assert!(master_password("Aa1!aaaa").is_ok());
        assert!(master_password("Sup3r$ecret!").is_ok());
        assert!(master_password("short1!").is_err());
        assert!(master_password("alllowercase1!").is_err());
        assert!(master_password("NoDigits!!").is_err());
        assert!(master_password("NoSpecial11").is_err());
    }
}
