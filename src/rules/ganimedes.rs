use crate::error::ValidationError;

use super::{contains_uppercase, ValidationRule};

const MINIMUM_LENGTH: usize = 8;
const SPECIAL_CHARACTERS: [char; 5] = ['@', '_', '#', '$', '%'];

/// Policy requiring more than 8 characters with uppercase, lowercase, a digit
/// and at least one of `@ _ # $ %`.
#[derive(Debug, Clone)]
pub struct GanimedesRule {
    minimum_length: usize,
}

impl GanimedesRule {
    pub fn new() -> Self {
        Self {
            minimum_length: MINIMUM_LENGTH,
        }
    }

    fn contains_special_character(&self, password: &str) -> Result<(), ValidationError> {
        if password.chars().any(|c| SPECIAL_CHARACTERS.contains(&c)) {
            Ok(())
        } else {
            Err(ValidationError::NoSpecialCharacter)
        }
    }
}

impl Default for GanimedesRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule for GanimedesRule {
    fn minimum_length(&self) -> usize {
        self.minimum_length
    }

    fn is_valid(&self, password: &str) -> Result<bool, ValidationError> {
        self.validate_length(password)?;
        contains_uppercase(password)?;
        self.contains_lowercase(password)?;
        self.contains_digit(password)?;
        self.contains_special_character(password)?;
        Ok(true)
    }
}
