use crate::error::ValidationError;

use super::ValidationRule;

const MINIMUM_LENGTH: usize = 6;
const SECRET_WORD: &str = "calisto";

/// Policy requiring more than 6 characters, a digit and the secret word
/// "calisto".
///
/// The word must appear case-insensitively, and its casing is itself part of
/// the constraint: at least two of the password's secret-word letters must be
/// uppercase, but fewer than all seven.
#[derive(Debug, Clone)]
pub struct CalistoRule {
    minimum_length: usize,
}

impl CalistoRule {
    pub fn new() -> Self {
        Self {
            minimum_length: MINIMUM_LENGTH,
        }
    }

    fn contains_secret_word(&self, password: &str) -> Result<(), ValidationError> {
        if !password.to_lowercase().contains(SECRET_WORD) {
            return Err(ValidationError::NoSecretWord {
                reason: format!("the word \"{SECRET_WORD}\" must appear in the password"),
            });
        }

        // The tally covers every password character drawn from the secret
        // word's letters, not only those inside the matched substring.
        let uppercase_count = password
            .chars()
            .filter(|c| c.is_uppercase())
            .filter(|c| c.to_lowercase().all(|lowered| SECRET_WORD.contains(lowered)))
            .count();

        if uppercase_count < 2 || uppercase_count >= SECRET_WORD.len() {
            return Err(ValidationError::NoSecretWord {
                reason: format!(
                    "the word \"{SECRET_WORD}\" must contain at least two uppercase letters, but not all"
                ),
            });
        }

        Ok(())
    }
}

impl Default for CalistoRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule for CalistoRule {
    fn minimum_length(&self) -> usize {
        self.minimum_length
    }

    fn is_valid(&self, password: &str) -> Result<bool, ValidationError> {
        self.validate_length(password)?;
        self.contains_digit(password)?;
        self.contains_secret_word(password)?;
        Ok(true)
    }
}
