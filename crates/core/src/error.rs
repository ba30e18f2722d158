//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Why a single field of a record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    MustBeString,
    MustBeNumber,
    MustBePrice,
    NotAllowed,
    /// Strict mode: the field is absent.
    Required,
    /// Strict mode: the field is present together with the named field.
    Conflicts(&'static str),
    /// Strict mode: the field is present without its counterpart.
    Unpaired(&'static str),
}

impl core::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationReason::MustBeString => f.write_str("must be string"),
            ValidationReason::MustBeNumber => f.write_str("must be number"),
            ValidationReason::MustBePrice => f.write_str("must be Price"),
            ValidationReason::NotAllowed => f.write_str("not allowed field"),
            ValidationReason::Required => f.write_str("is required"),
            ValidationReason::Conflicts(other) => write!(f, "conflicts with `{other}`"),
            ValidationReason::Unpaired(other) => write!(f, "must be paired with `{other}`"),
        }
    }
}

/// A record failed schema validation.
///
/// Validation is all-or-nothing: the first failure aborts the batch, so a single
/// error carries everything needed to locate the problem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("validation failed: record {record}: field `{field}` {reason}")]
pub struct ValidationError {
    /// Zero-based position of the record in the input.
    pub record: usize,
    /// Field name as it appeared in the input.
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(record: usize, field: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            record,
            field: field.into(),
            reason,
        }
    }
}

/// Domain-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input did not pass the schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A computation needed a field the record does not have.
    #[error("record for item `{item}` has no `{field}`")]
    MissingField { item: String, field: &'static str },

    /// No record carries the requested item name.
    #[error("no records found for item `{0}`")]
    ItemNotFound(String),
}

impl DomainError {
    pub fn missing_field(item: Option<&str>, field: &'static str) -> Self {
        Self::MissingField {
            item: item.unwrap_or("<unnamed>").to_string(),
            field,
        }
    }

    pub fn item_not_found(name: impl Into<String>) -> Self {
        Self::ItemNotFound(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_record_field_and_reason() {
        let err = ValidationError::new(2, "colour", ValidationReason::NotAllowed);
        assert_eq!(
            err.to_string(),
            "validation failed: record 2: field `colour` not allowed field"
        );
    }

    #[test]
    fn strict_reasons_name_the_counterpart() {
        let conflict = ValidationError::new(0, "weight", ValidationReason::Conflicts("quantity"));
        assert!(conflict.to_string().ends_with("conflicts with `quantity`"));

        let unpaired = ValidationError::new(0, "weight", ValidationReason::Unpaired("pricePerKilo"));
        assert!(unpaired.to_string().ends_with("must be paired with `pricePerKilo`"));
    }

    #[test]
    fn domain_error_wraps_validation_transparently() {
        let inner = ValidationError::new(0, "item", ValidationReason::MustBeString);
        let err: DomainError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn missing_field_defaults_unnamed_records() {
        let err = DomainError::missing_field(None, "weight or quantity");
        assert_eq!(err.to_string(), "record for item `<unnamed>` has no `weight or quantity`");
    }
}
