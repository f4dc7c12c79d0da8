//! Typed error types for label building.

use std::borrow::Cow;
use std::fmt;

/// Errors raised while appending commands to a label.
///
/// Any error leaves the fragments emitted *before* the failing field in the
/// stream. Treat a failure as terminal for the document unless you are
/// prepared to discard the builder and start over.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A field value violated its declared constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A declared capability that is deliberately not implemented.
    #[error("not implemented: {capability}")]
    NotImplemented {
        /// Name of the unsupported capability.
        capability: &'static str,
    },
}

impl BuildError {
    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            BuildError::Validation(v) => Some(v),
            BuildError::NotImplemented { .. } => None,
        }
    }
}

/// A single field failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field} {violation}")]
pub struct ValidationError {
    /// Name of the offending field (e.g. `"x"`).
    pub field: Cow<'static, str>,
    /// The constraint that was violated.
    pub violation: Violation,
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<Cow<'static, str>>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            violation,
        }
    }
}

/// The constraint a field value violated.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Integer outside `[min, max]`.
    OutOfRange {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
        /// The rejected value.
        value: i64,
    },
    /// Decimal outside `[min, max]`.
    DecimalOutOfRange {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
        /// The rejected value.
        value: f64,
    },
    /// Value is not a member of the enumerated set.
    NotInSet {
        /// Every allowed value, in declaration order.
        allowed: Vec<String>,
        /// The rejected value.
        value: String,
    },
    /// Payload contains a character outside the allowed set.
    IllegalCharacters {
        /// The full allowed character set.
        allowed: Cow<'static, str>,
    },
    /// Payload must consist of decimal digits only.
    NotDigits,
    /// Payload must consist of letters and digits only.
    NotAlphanumeric,
    /// Payload length outside `[min, max]` characters.
    Length {
        /// Minimum length in characters.
        min: usize,
        /// Maximum length in characters.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },
    /// Value has the wrong parity for the current configuration.
    Parity {
        /// `true` if the value must be even, `false` if odd.
        even: bool,
        /// Why this parity is required.
        reason: &'static str,
    },
    /// A command-specific rule not expressible as a simple constraint.
    Rule(&'static str),
    /// The value is of the wrong kind for this field.
    WrongType {
        /// The kind of value the field accepts.
        expected: &'static str,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OutOfRange { min, max, value } => {
                write!(f, "must be between {min} and {max} (inclusive), got {value}")
            }
            Violation::DecimalOutOfRange { min, max, value } => {
                write!(f, "must be between {min} and {max} by 0.1, got {value}")
            }
            Violation::NotInSet { allowed, value } => {
                write!(f, "must be in [{}], got {value:?}", allowed.join(", "))
            }
            Violation::IllegalCharacters { allowed } => {
                write!(f, "contains an illegal character; must contain only \"{allowed}\"")
            }
            Violation::NotDigits => write!(f, "must contain only digits"),
            Violation::NotAlphanumeric => write!(f, "must contain only alphanumeric characters"),
            Violation::Length { min, max, actual } if min == max => {
                write!(f, "must be exactly {min} characters, got {actual}")
            }
            Violation::Length { min, max, actual } => {
                write!(f, "must be {min} to {max} characters, got {actual}")
            }
            Violation::Parity { even, reason } => {
                let parity = if *even { "even" } else { "odd" };
                write!(f, "must be {parity} {reason}")
            }
            Violation::Rule(rule) => f.write_str(rule),
            Violation::WrongType { expected } => write!(f, "expects {expected} value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_message_names_field_and_bounds() {
        let err = ValidationError::new(
            "x",
            Violation::OutOfRange {
                min: 0,
                max: 32000,
                value: 40000,
            },
        );
        assert_eq!(
            err.to_string(),
            "x must be between 0 and 32000 (inclusive), got 40000"
        );
    }

    #[test]
    fn set_message_lists_all_allowed_values() {
        let err = ValidationError::new(
            "orientation",
            Violation::NotInSet {
                allowed: vec!["N".into(), "R".into(), "I".into(), "B".into()],
                value: "X".into(),
            },
        );
        assert_eq!(err.to_string(), "orientation must be in [N, R, I, B], got \"X\"");
    }

    #[test]
    fn exact_length_message() {
        let v = Violation::Length {
            min: 6,
            max: 6,
            actual: 5,
        };
        assert_eq!(v.to_string(), "must be exactly 6 characters, got 5");
    }

    #[test]
    fn not_implemented_is_not_validation() {
        let err = BuildError::NotImplemented {
            capability: "code 39 extended ASCII",
        };
        assert!(err.as_validation().is_none());
        assert_eq!(err.to_string(), "not implemented: code 39 extended ASCII");
    }
}
