//! Validation of password strings against named, pluggable rule sets.
//!
//! Each policy fixes its own minimum length and composition requirements and
//! runs its checks in a fixed order, stopping at the first violated
//! constraint. Callers pick a policy, wrap it in a [`Validator`] and call
//! [`Validator::is_valid`].

pub mod error;
pub mod rules;
pub mod validator;

pub use error::ValidationError;
pub use rules::{contains_uppercase, CalistoRule, GanimedesRule, ValidationRule};
pub use validator::Validator;
