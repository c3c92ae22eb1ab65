/// One variant per violated constraint; a policy reports only the first
/// violation it encounters, so a failed validation carries exactly one of
/// these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("the password must be longer than {minimum} characters")]
    LengthTooShort { minimum: usize },

    #[error("the password must contain at least one uppercase letter")]
    NoUppercase,

    #[error("the password must contain at least one lowercase letter")]
    NoLowercase,

    #[error("the password must contain at least one digit")]
    NoDigit,

    #[error("the password must contain at least one special character (@, _, #, $, %)")]
    NoSpecialCharacter,

    #[error("{reason}")]
    NoSecretWord { reason: String },
}
