//! Predicate trees evaluated by the native store during a find.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::NativeField;

/// Comparison applied to a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOperator {
    /// Exact, case-sensitive equality.
    #[serde(rename = "==")]
    Equal,
    /// Case-sensitive regular expression that must match the whole value.
    #[serde(rename = "REGEX")]
    Regex,
}

impl MatchOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::Regex => "REGEX",
        }
    }
}

/// A composable filter over backing records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterExpression {
    /// Compare one slot against a value.
    Field {
        field: NativeField,
        operator: MatchOperator,
        value: String,
    },
    /// Either side matches.
    Or(Box<FilterExpression>, Box<FilterExpression>),
}

impl FilterExpression {
    pub fn equals(field: NativeField, value: impl Into<String>) -> Self {
        Self::Field {
            field,
            operator: MatchOperator::Equal,
            value: value.into(),
        }
    }

    pub fn regex(field: NativeField, pattern: impl Into<String>) -> Self {
        Self::Field {
            field,
            operator: MatchOperator::Regex,
            value: pattern.into(),
        }
    }

    /// Combines `self` and `other` so that either may match. `self` becomes
    /// the left operand, which makes repeated calls build a left-deep tree.
    #[must_use]
    pub fn or(self, other: FilterExpression) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Single-slot comparisons in left-to-right order.
    pub fn leaves(&self) -> Vec<(NativeField, MatchOperator, &str)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<(NativeField, MatchOperator, &'a str)>) {
        match self {
            Self::Field {
                field,
                operator,
                value,
            } => out.push((*field, *operator, value.as_str())),
            Self::Or(left, right) => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field {
                field,
                operator,
                value,
            } => write!(f, "{} {} {:?}", field, operator.as_str(), value),
            Self::Or(left, right) => write!(f, "({left}) OR ({right})"),
        }
    }
}

/// Ordering applied to find results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Sort key for find results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: NativeField,
    #[serde(default)]
    pub order: SortOrder,
}

/// Maximum number of records a find may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultLimit {
    #[default]
    Unbounded,
    AtMost(usize),
}

impl ResultLimit {
    /// Interprets the native store's convention where `-1` (or any negative
    /// count) means "no limit".
    pub fn from_raw(max_results: i64) -> Self {
        if max_results < 0 {
            Self::Unbounded
        } else {
            Self::AtMost(max_results as usize)
        }
    }

    pub fn as_raw(self) -> i64 {
        match self {
            Self::Unbounded => -1,
            Self::AtMost(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }
}
