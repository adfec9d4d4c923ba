//! Raw predicate answers [`Answer`] and the operands [`Operand`] handed to the oracle.

use crate::prelude::*;

/// Whatever a raw predicate returns when queried.
///
/// Only [`Answer::Bool`] is a valid membership answer. The other variants exist so that a malformed
/// predicate can be written, and rejected, instead of being silently coerced into a boolean.
#[derive(Clone, Debug, PartialEq, Eq, From)]
pub enum Answer {
    /// A membership verdict.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A string.
    Text(String),
    /// No value at all.
    Unit(()),
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl Answer {
    /// A short name for the kind of answer, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Text(_) => "string",
            Self::Unit(()) => "unit",
        }
    }

    /// Reads the answer as a membership verdict for `element`.
    pub fn verdict(self, element: i64) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(b),
            other => Err(SetError::InvalidPredicateResult {
                element,
                found: other.kind(),
            }),
        }
    }
}

/// Anything a caller may present to the oracle in place of a set.
#[derive(Clone, Debug, From)]
pub enum Operand {
    /// An actual set.
    Set(Set),
    /// A fixed list of elements.
    Roster(Vec<i64>),
    /// A bare element.
    Int(i64),
}

impl Operand {
    /// A short name for the kind of operand, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Set(_) => "set",
            Self::Roster(_) => "roster",
            Self::Int(_) => "integer",
        }
    }

    /// The operand as a set, if it is one.
    pub fn as_set(&self) -> Result<&Set> {
        match self {
            Self::Set(set) => Ok(set),
            other => Err(SetError::InvalidSetKind {
                found: other.kind(),
            }),
        }
    }
}

/// Validates the set kind once, at construction time.
impl TryFrom<Operand> for Set {
    type Error = SetError;

    fn try_from(value: Operand) -> Result<Self> {
        match value {
            Operand::Set(set) => Ok(set),
            other => Err(SetError::InvalidSetKind {
                found: other.kind(),
            }),
        }
    }
}
