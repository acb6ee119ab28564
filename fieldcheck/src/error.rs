use crate::value::FieldKind;
use std::fmt;
use thiserror::Error;

/// Outcome of a failed [`validate`](crate::validate) call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value does not reflect as a record; nothing was checked.
    #[error("wrong argument given, should be a struct")]
    NotAStruct,
    /// One or more fields failed; the report holds every violation found.
    #[error("{0}")]
    Invalid(Report),
}

/// Malformed annotation, detected while parsing or while reading a rule's
/// arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("malformed validator tag '{0}', want name:arg")]
    MalformedSegment(String),
    #[error("invalid argument '{arg}' for '{rule}' validator, want an integer")]
    NonIntegerArgument { rule: &'static str, arg: String },
}

/// A single rule's failed check, with the expected and actual values kept
/// structured so callers can match instead of parsing messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    Length { expected: i64, actual: i64 },
    MinLength { expected: i64, actual: i64 },
    MaxLength { expected: i64, actual: i64 },
    MinValue { expected: i64, actual: i64 },
    MaxValue { expected: i64, actual: i64 },
    NotInSet { allowed: Vec<String> },
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleViolation::Length { expected, actual } => {
                write!(f, "expected length {}, actual length {}", expected, actual)
            }
            RuleViolation::MinLength { expected, actual } => {
                write!(f, "expected minimum length {}, actual length {}", expected, actual)
            }
            RuleViolation::MaxLength { expected, actual } => {
                write!(f, "expected maximum length {}, actual length {}", expected, actual)
            }
            RuleViolation::MinValue { expected, actual } => {
                write!(f, "expected minimum value {}, actual value {}", expected, actual)
            }
            RuleViolation::MaxValue { expected, actual } => {
                write!(f, "expected maximum value {}, actual value {}", expected, actual)
            }
            RuleViolation::NotInSet { allowed } => {
                write!(f, "value not in [{}]", allowed.join(" "))
            }
        }
    }
}

/// Why a single field failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("validation for unexported field is not allowed")]
    UnexportedField,
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("{0}")]
    Rule(RuleViolation),
    #[error("unsupported type for '{rule}' validator: {kind}")]
    UnsupportedType { rule: &'static str, kind: FieldKind },
    #[error("unknown validator: {0}")]
    UnknownValidator(String),
}

/// One field's validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    field: &'static str,
    error: FieldError,
}

impl Violation {
    pub fn new(field: &'static str, error: FieldError) -> Self {
        Self { field, error }
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        self.field
    }

    /// The structured failure.
    pub fn error(&self) -> &FieldError {
        &self.error
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

/// Every violation from one `validate` call, in field-declaration order.
///
/// Renders as the newline-joined violation messages. No deduplication and no
/// severity levels; each violation carries equal weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    violations: Vec<Violation>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        f.write_str(&messages.join("\n"))
    }
}

impl IntoIterator for Report {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
