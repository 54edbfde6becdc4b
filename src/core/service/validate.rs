//! Email and password validation.

use regex::Regex;
use serde::Serialize;

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Validate email format with structural checks.
///
/// Input is trimmed and lowercased before checking. Rules: exactly one
/// `@`, local part 1..=64 chars of `[a-z0-9._%+-]`, domain 1..=255 chars
/// with at least two labels, each label 1..=63 chars with no leading or
/// trailing hyphen, and no consecutive dots anywhere.
pub fn validate_email(email: &str) -> bool {
    let email = email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') || !email.contains('.') {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.is_empty() || domain.len() > 255 {
        return false;
    }

    if email.contains("..") {
        return false;
    }

    let local_ok = Regex::new(r"^[a-z0-9._%+-]+$")
        .map(|re| re.is_match(local))
        .unwrap_or(false);
    if !local_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    for label in labels {
        if label.is_empty() || label.len() > 63 {
            return false;
        }
        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
    }

    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

/// Password strength assessment with per-rule feedback.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReport {
    pub valid: bool,
    pub strength: Strength,
    pub errors: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Check password strength: length plus one of each character class.
pub fn validate_password(password: &str) -> PasswordReport {
    let mut report = PasswordReport {
        valid: false,
        strength: Strength::Weak,
        errors: Vec::new(),
        suggestions: Vec::new(),
    };

    if password.is_empty() {
        report.errors.push("Password is required".to_string());
        return report;
    }

    let length = password.chars().count();
    if length < 8 {
        report
            .errors
            .push("Password must be at least 8 characters long".to_string());
    } else if length < 12 {
        report
            .suggestions
            .push("Consider using at least 12 characters for better security".to_string());
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    if !has_upper {
        report
            .errors
            .push("Password must contain at least one uppercase letter".to_string());
    }
    if !has_lower {
        report
            .errors
            .push("Password must contain at least one lowercase letter".to_string());
    }
    if !has_digit {
        report
            .errors
            .push("Password must contain at least one digit".to_string());
    }
    if !has_special {
        report
            .errors
            .push("Password must contain at least one special character".to_string());
    }

    let mut score = 0;
    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    for flag in [has_upper, has_lower, has_digit, has_special] {
        if flag {
            score += 1;
        }
    }

    report.strength = if score >= 5 {
        Strength::Strong
    } else if score >= 3 {
        Strength::Medium
    } else {
        Strength::Weak
    };

    report.valid = report.errors.is_empty();
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("first.last@sub.example.co"));
        assert!(validate_email("  Padded@Example.COM  "));
    }

    #[test]
    fn rejects_structural_problems() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("two@@example.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("user@nodot"));
        assert!(!validate_email("user..dots@example.com"));
        assert!(!validate_email("user@-example.com"));
        assert!(!validate_email("user@example-.com"));
    }

    #[test]
    fn rejects_disallowed_local_characters() {
        assert!(!validate_email("user name@example.com"));
        assert!(!validate_email("user<x>@example.com"));
    }

    #[test]
    fn rejects_oversized_parts() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(!validate_email(&long_local));

        let long_label = format!("user@{}.com", "a".repeat(64));
        assert!(!validate_email(&long_label));
    }

    #[test]
    fn empty_password_is_required() {
        let report = validate_password("");
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Password is required"]);
    }

    #[test]
    fn short_password_collects_errors() {
        let report = validate_password("abc");
        assert!(!report.valid);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("at least 8 characters")));
        assert!(report.errors.iter().any(|e| e.contains("uppercase")));
        assert!(report.errors.iter().any(|e| e.contains("digit")));
        assert_eq!(report.strength, Strength::Weak);
    }

    #[test]
    fn strong_password_passes_all_rules() {
        let report = validate_password("Str0ng!Password");
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.strength, Strength::Strong);
    }

    #[test]
    fn medium_length_password_gets_suggestion() {
        let report = validate_password("Abcdef1!");
        assert!(report.valid);
        assert!(report.suggestions[0].contains("12 characters"));
    }
}
