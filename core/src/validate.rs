//! Optional contract checks for decoded responses.
//!
//! Decoding into the response types already enforces field presence,
//! JSON types and enum membership. `Validate` covers what the type system
//! cannot: numeric bounds and URL-typed strings.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// A contract violation, located by a JSON-like path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Prefix the path with an enclosing field name or `[index]`.
    pub fn within(mut self, parent: impl fmt::Display) -> Self {
        let parent = parent.to_string();
        self.path = if self.path.starts_with('[') || self.path.is_empty() {
            format!("{parent}{}", self.path)
        } else {
            format!("{parent}.{}", self.path)
        };
        self
    }
}

pub type ValidationResult = Result<(), ValidationError>;

pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> ValidationResult {
        for (i, item) in self.iter().enumerate() {
            item.validate().map_err(|e| e.within(format!("[{i}]")))?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> ValidationResult {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

/// Lookup maps carry nothing beyond their JSON shape.
impl Validate for HashMap<String, Option<String>> {
    fn validate(&self) -> ValidationResult {
        Ok(())
    }
}

/// Validate a nested field, prefixing its errors with `name`.
pub(crate) fn field<T: Validate>(name: &str, value: &T) -> ValidationResult {
    value.validate().map_err(|e| e.within(name))
}

pub(crate) fn check_cut(path: &str, cut: i32) -> ValidationResult {
    if (0..=100).contains(&cut) {
        Ok(())
    } else {
        Err(ValidationError::new(path, format!("cut {cut} is outside 0..=100")))
    }
}

pub(crate) fn check_percent(path: &str, value: f64) -> ValidationResult {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(path, format!("{value} is outside 0..=100")))
    }
}

pub(crate) fn check_non_negative(path: &str, value: f64) -> ValidationResult {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(path, format!("{value} is negative")))
    }
}

pub(crate) fn check_min(path: &str, value: u64, min: u64) -> ValidationResult {
    if value >= min {
        Ok(())
    } else {
        Err(ValidationError::new(path, format!("{value} is below minimum {min}")))
    }
}

pub(crate) fn check_url(path: &str, value: &str) -> ValidationResult {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ValidationError::new(path, format!("{value:?} is not a URL: {e}")))
}

pub(crate) fn check_opt_url(path: &str, value: Option<&str>) -> ValidationResult {
    value.map_or(Ok(()), |v| check_url(path, v))
}
