//! Domain rules: strength enum and field validators.

mod strength;
pub mod validation;

pub use strength::Strength;
pub use validation::{
    validate_description, validate_required_text, validate_strength, Violation,
    MIN_DESCRIPTION_LEN,
};
