//! Field validators. Each returns the accepted value or a typed violation;
//! callers decide whether to collect or bail.

use super::Strength;
use thiserror::Error;

/// Minimum power description length, counted after trimming whitespace.
pub const MIN_DESCRIPTION_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} has the wrong type")]
    WrongType(&'static str),

    #[error("description must be at least {min} characters long (got {actual})")]
    DescriptionTooShort { min: usize, actual: usize },

    #[error("strength must be one of Strong, Weak, Average (got {0:?})")]
    InvalidStrength(String),

    #[error("hero {0} does not exist")]
    UnknownHero(i64),

    #[error("power {0} does not exist")]
    UnknownPower(i64),

    #[error("constraint failed: {0}")]
    Constraint(String),
}

pub fn validate_description(value: Option<&str>) -> Result<&str, Violation> {
    let value = value.ok_or(Violation::Required("description"))?;
    let actual = value.trim().chars().count();
    if actual < MIN_DESCRIPTION_LEN {
        return Err(Violation::DescriptionTooShort {
            min: MIN_DESCRIPTION_LEN,
            actual,
        });
    }
    Ok(value)
}

pub fn validate_strength(value: Option<&str>) -> Result<Strength, Violation> {
    let value = value.ok_or(Violation::Required("strength"))?;
    value
        .parse()
        .map_err(|_| Violation::InvalidStrength(value.to_string()))
}

/// Trimmed, non-empty text.
pub fn validate_required_text<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, Violation> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Violation::Required(field)),
    }
}
