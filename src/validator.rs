use crate::error::ValidationError;
use crate::rules::ValidationRule;

/// Facade over a single policy, decoupling callers from concrete rule types.
///
/// The rule is chosen at construction; validation delegates to it and
/// propagates its outcome unchanged.
pub struct Validator {
    rule: Box<dyn ValidationRule>,
}

impl Validator {
    pub fn new(rule: Box<dyn ValidationRule>) -> Self {
        Self { rule }
    }

    #[tracing::instrument(skip(self, password))]
    pub fn is_valid(&self, password: &str) -> Result<bool, ValidationError> {
        match self.rule.is_valid(password) {
            Ok(valid) => Ok(valid),
            Err(e) => {
                tracing::debug!(error.message = %e, "password rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Validator;
    use crate::error::ValidationError;
    use crate::rules::{CalistoRule, GanimedesRule, ValidationRule};
    use claim::assert_ok;

    #[test]
    fn delegates_to_the_held_rule() {
        let validator = Validator::new(Box::new(GanimedesRule::new()));
        assert_eq!(validator.is_valid("Abcdefg1@"), Ok(true));
    }

    #[test]
    fn propagates_the_rule_error_unchanged() {
        let rule = GanimedesRule::new();
        let expected = rule.is_valid("abcdefg1@");
        let validator = Validator::new(Box::new(rule));
        assert_eq!(validator.is_valid("abcdefg1@"), expected);
        assert_eq!(
            validator.is_valid("abcdefg1@"),
            Err(ValidationError::NoUppercase)
        );
    }

    #[test]
    fn works_with_any_policy_variant() {
        let validator = Validator::new(Box::new(CalistoRule::new()));
        assert_ok!(validator.is_valid("CAlisto1"));
        assert_eq!(
            validator.is_valid("CAlis1"),
            Err(ValidationError::LengthTooShort { minimum: 6 })
        );
    }

    #[test]
    fn validator_is_reusable_across_calls() {
        let validator = Validator::new(Box::new(CalistoRule::new()));
        assert_eq!(validator.is_valid("CAlisto1"), validator.is_valid("CAlisto1"));
        assert_eq!(validator.is_valid("calisto1"), validator.is_valid("calisto1"));
    }
}
