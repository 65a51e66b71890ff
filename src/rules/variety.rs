//! Character class rules - uppercase, lowercase, digits, special chars.

use crate::rule::Rule;

pub fn has_uppercase() -> Rule {
    Rule::builtin(
        "hasUppercase",
        "Password must contain an uppercase letter".to_string(),
        |pwd: &str| pwd.chars().any(|c| c.is_uppercase()),
    )
}

pub fn has_lowercase() -> Rule {
    Rule::builtin(
        "hasLowercase",
        "Password must contain a lowercase letter".to_string(),
        |pwd: &str| pwd.chars().any(|c| c.is_lowercase()),
    )
}

pub fn has_digit() -> Rule {
    Rule::builtin(
        "hasDigit",
        "Password must contain a number".to_string(),
        |pwd: &str| pwd.chars().any(|c| c.is_ascii_digit()),
    )
}

/// Any character that is neither alphanumeric nor whitespace counts as special.
pub fn has_special_char() -> Rule {
    Rule::builtin(
        "hasSpecialChar",
        "Password must contain a special character".to_string(),
        |pwd: &str| pwd.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_uppercase() {
        assert!(!has_uppercase().evaluate("lowercase123!"));
        assert!(has_uppercase().evaluate("lowerUpper"));
    }

    #[test]
    fn test_has_lowercase() {
        assert!(!has_lowercase().evaluate("UPPERCASE123!"));
        assert!(has_lowercase().evaluate("UPPERlower"));
    }

    #[test]
    fn test_has_digit() {
        assert!(!has_digit().evaluate("NoNumbers!"));
        assert!(has_digit().evaluate("abcdefg1"));
    }

    #[test]
    fn test_has_special_char() {
        assert!(!has_special_char().evaluate("NoSpecial123"));
        assert!(!has_special_char().evaluate("with space"));
        assert!(has_special_char().evaluate("HasAll123!@#"));
    }

    #[test]
    fn test_empty_password_fails_all() {
        for rule in [has_uppercase(), has_lowercase(), has_digit(), has_special_char()] {
            assert!(!rule.evaluate(""), "{} should fail on empty input", rule.name());
        }
    }
}
