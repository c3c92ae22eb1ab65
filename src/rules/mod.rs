mod calisto;
mod ganimedes;

pub use calisto::CalistoRule;
pub use ganimedes::GanimedesRule;

use crate::error::ValidationError;

/// Common contract for password policies.
///
/// Implementations run their checks in a fixed order and stop at the first
/// violated constraint: `is_valid` either returns `Ok(true)` or the error for
/// that constraint. It never returns `Ok(false)`.
pub trait ValidationRule: Send + Sync {
    /// The policy's length threshold, fixed at construction.
    ///
    /// The bound is exclusive: a password of exactly this many characters is
    /// rejected.
    fn minimum_length(&self) -> usize;

    fn is_valid(&self, password: &str) -> Result<bool, ValidationError>;

    fn validate_length(&self, password: &str) -> Result<(), ValidationError> {
        if password.chars().count() > self.minimum_length() {
            Ok(())
        } else {
            Err(ValidationError::LengthTooShort {
                minimum: self.minimum_length(),
            })
        }
    }

    fn contains_lowercase(&self, password: &str) -> Result<(), ValidationError> {
        if password.chars().any(char::is_lowercase) {
            Ok(())
        } else {
            Err(ValidationError::NoLowercase)
        }
    }

    fn contains_digit(&self, password: &str) -> Result<(), ValidationError> {
        if password.chars().any(|c| c.is_ascii_digit()) {
            Ok(())
        } else {
            Err(ValidationError::NoDigit)
        }
    }
}

/// Uppercase presence is not tied to any length threshold, so it lives
/// outside the trait; any policy that needs it can call it directly.
pub fn contains_uppercase(password: &str) -> Result<(), ValidationError> {
    if password.chars().any(char::is_uppercase) {
        Ok(())
    } else {
        Err(ValidationError::NoUppercase)
    }
}
