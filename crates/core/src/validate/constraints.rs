//! Constraint descriptors and the dynamically-typed [`Value`] they check.
//!
//! Every command parameter is described by a [`Param`]: a field name plus a
//! [`Constraint`] kind. Commands declare their params as constants and the
//! command writer renders each supplied value through [`Param::render`].

use std::borrow::Cow;

use super::{
    check_charset, check_decimal, check_flag, check_length, check_one_of, check_range,
    clamp_range, format_decimal,
};
use crate::error::{ValidationError, Violation};

/// A parameter value as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Integer value.
    Int(i64),
    /// Decimal value.
    Decimal(f64),
    /// Text or token value.
    Text(Cow<'a, str>),
}

impl Value<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "an integer",
            Value::Decimal(_) => "a decimal",
            Value::Text(_) => "a text",
        }
    }

    /// String representation used for enumerated-set comparison.
    fn coerce(&self) -> Cow<'_, str> {
        match self {
            Value::Int(n) => Cow::Owned(n.to_string()),
            Value::Decimal(d) => Cow::Owned(d.to_string()),
            Value::Text(s) => Cow::Borrowed(s.as_ref()),
        }
    }
}

macro_rules! int_value {
    ($($t:ty),*) => {
        $(impl From<$t> for Value<'_> {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        })*
    };
}

int_value!(u8, u16, u32, i8, i16, i32, i64);

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::Decimal(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Text(Cow::Borrowed(v))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(v: &'a String) -> Self {
        Value::Text(Cow::Borrowed(v.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(v: String) -> Self {
        Value::Text(Cow::Owned(v))
    }
}

impl From<char> for Value<'_> {
    fn from(v: char) -> Self {
        Value::Text(Cow::Owned(v.to_string()))
    }
}

/// What to do with an integer outside its declared bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePolicy {
    /// Fail with [`Violation::OutOfRange`].
    Reject,
    /// Silently saturate to the nearest bound.
    Clamp,
}

/// A constraint kind, dispatched when a value is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Integer in `[min, max]`.
    Range {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
        /// Out-of-bounds handling.
        policy: RangePolicy,
    },
    /// Decimal in `[min, max]`, rendered with one fractional digit.
    Decimal {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Member of a fixed set, compared by string representation.
    OneOf(&'static [&'static str]),
    /// Text drawn from a fixed character set.
    Charset(&'static str),
    /// `Y` or `N`.
    Flag,
    /// Any integer.
    Integer,
    /// Free text, optionally length-limited.
    Text {
        /// Maximum length in characters.
        max_len: Option<usize>,
    },
    /// Exactly one character.
    Char,
}

impl Constraint {
    /// Integer range with the reject policy.
    pub const fn range(min: i64, max: i64) -> Self {
        Constraint::Range {
            min,
            max,
            policy: RangePolicy::Reject,
        }
    }

    /// Integer range with the clamp policy.
    pub const fn clamped(min: i64, max: i64) -> Self {
        Constraint::Range {
            min,
            max,
            policy: RangePolicy::Clamp,
        }
    }

    /// Decimal range.
    pub const fn decimal(min: f64, max: f64) -> Self {
        Constraint::Decimal { min, max }
    }

    /// Validate `value` for `field` and return its emitted text.
    pub fn apply(&self, field: &'static str, value: &Value<'_>) -> Result<String, ValidationError> {
        match (*self, value) {
            (Constraint::Range { min, max, policy }, Value::Int(n)) => {
                let n = match policy {
                    RangePolicy::Reject => check_range(field, *n, min, max)?,
                    RangePolicy::Clamp => clamp_range(*n, min, max),
                };
                Ok(n.to_string())
            }
            (Constraint::Decimal { min, max }, Value::Decimal(d)) => {
                check_decimal(field, *d, min, max).map(format_decimal)
            }
            (Constraint::Decimal { min, max }, Value::Int(n)) => {
                check_decimal(field, *n as f64, min, max).map(format_decimal)
            }
            (Constraint::OneOf(allowed), v) => {
                let text = v.coerce();
                check_one_of(field, &text, allowed)?;
                Ok(text.into_owned())
            }
            (Constraint::Charset(allowed), Value::Text(s)) => {
                check_charset(field, s, allowed)?;
                Ok(s.to_string())
            }
            (Constraint::Flag, Value::Text(s)) => {
                check_flag(field, s)?;
                Ok(s.to_string())
            }
            (Constraint::Integer, Value::Int(n)) => Ok(n.to_string()),
            (Constraint::Text { max_len }, Value::Text(s)) => {
                if let Some(max) = max_len {
                    check_length(field, s, 0, max)?;
                }
                Ok(s.to_string())
            }
            (Constraint::Char, Value::Text(s)) => {
                check_length(field, s, 1, 1)?;
                Ok(s.to_string())
            }
            (c, v) => {
                tracing::trace!(field, given = v.kind(), "value kind mismatch");
                Err(ValidationError::new(
                    field,
                    Violation::WrongType {
                        expected: c.expects(),
                    },
                ))
            }
        }
    }

    fn expects(&self) -> &'static str {
        match self {
            Constraint::Range { .. } | Constraint::Integer => "an integer",
            Constraint::Decimal { .. } => "a decimal",
            Constraint::OneOf(_) => "an enumerated",
            Constraint::Charset(_)
            | Constraint::Flag
            | Constraint::Text { .. }
            | Constraint::Char => "a text",
        }
    }
}

/// A named parameter slot of a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    /// Field name used in error messages.
    pub name: &'static str,
    /// Constraint checked before emission.
    pub constraint: Constraint,
}

impl Param {
    /// Declare a parameter.
    pub const fn new(name: &'static str, constraint: Constraint) -> Self {
        Self { name, constraint }
    }

    /// Validate and render `value` for this parameter.
    pub fn render(&self, value: &Value<'_>) -> Result<String, ValidationError> {
        self.constraint.apply(self.name, value)
    }
}
