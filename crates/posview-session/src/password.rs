//! Password-strength scoring for the user-management forms.

use std::fmt;

/// Strength label shown next to the password input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Fair => "fair",
            PasswordStrength::Good => "good",
            PasswordStrength::Strong => "strong",
        }
    }

    /// Map a 0..=4 score to its label.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => PasswordStrength::Weak,
            2 => PasswordStrength::Fair,
            3 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score a candidate password 0..=4: one point each for length >= 8,
/// mixed case, a digit, and a symbol.
pub fn score_password(password: &str) -> u8 {
    let mut score = 0u8;
    if password.chars().count() >= 8 {
        score += 1;
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace()) {
        score += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_trivial_passwords_are_weak() {
        assert_eq!(score_password(""), 0);
        assert_eq!(score_password("abc"), 0);
        assert_eq!(PasswordStrength::from_score(score_password("password")), PasswordStrength::Weak);
    }

    #[test]
    fn each_class_adds_a_point() {
        assert_eq!(score_password("abcdefgh"), 1); // length only
        assert_eq!(score_password("Abcdefgh"), 2); // + mixed case
        assert_eq!(score_password("Abcdefg1"), 3); // + digit
        assert_eq!(score_password("Abcdef1!"), 4); // + symbol
    }

    #[test]
    fn short_but_complex_is_capped_below_strong() {
        let score = score_password("Ab1!");
        assert_eq!(score, 3);
        assert_eq!(PasswordStrength::from_score(score), PasswordStrength::Good);
    }

    #[test]
    fn labels_order_by_strength() {
        assert!(PasswordStrength::Weak < PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_score(2), PasswordStrength::Fair);
        assert_eq!(PasswordStrength::Strong.to_string(), "strong");
    }
}
