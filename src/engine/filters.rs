//! Filter predicates for query execution
//!
//! Text fields match by case-insensitive substring. Numeric fields parse
//! the raw filter as an optional comparison operator followed by a signed
//! decimal number; a string that does not fit that grammar produces a
//! predicate that matches nothing, never an error.

use crate::model::{ApiRecord, RecordField};

/// Comparison operator of a numeric filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    fn apply(&self, value: f64, comparand: f64) -> bool {
        match self {
            CompareOp::Eq => value == comparand,
            CompareOp::Gt => value > comparand,
            CompareOp::Gte => value >= comparand,
            CompareOp::Lt => value < comparand,
            CompareOp::Lte => value <= comparand,
        }
    }
}

/// Parsed numeric filter: operator plus comparand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericFilter {
    pub op: CompareOp,
    pub comparand: f64,
}

impl NumericFilter {
    /// Parses `[>=|<=|>|<|=]<number>`; the operator defaults to `=`.
    ///
    /// Returns None for anything that is not an optionally-prefixed finite
    /// decimal number.
    pub fn parse(raw: &str) -> Option<NumericFilter> {
        let trimmed = raw.trim();

        let (op, rest) = if let Some(rest) = trimmed.strip_prefix(">=") {
            (CompareOp::Gte, rest)
        } else if let Some(rest) = trimmed.strip_prefix("<=") {
            (CompareOp::Lte, rest)
        } else if let Some(rest) = trimmed.strip_prefix('>') {
            (CompareOp::Gt, rest)
        } else if let Some(rest) = trimmed.strip_prefix('<') {
            (CompareOp::Lt, rest)
        } else if let Some(rest) = trimmed.strip_prefix('=') {
            (CompareOp::Eq, rest)
        } else {
            (CompareOp::Eq, trimmed)
        };

        let comparand: f64 = rest.trim().parse().ok()?;
        if !comparand.is_finite() {
            return None;
        }

        Some(NumericFilter { op, comparand })
    }

    /// Whether a record value satisfies the comparison.
    ///
    /// Non-finite record values are excluded regardless of operator.
    pub fn matches(&self, value: f64) -> bool {
        value.is_finite() && self.op.apply(value, self.comparand)
    }
}

/// A compiled per-field predicate
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPredicate {
    /// Case-insensitive substring match on a text field
    TextContains { field: RecordField, needle: String },

    /// Numeric comparison on a numeric field
    NumericCompare {
        field: RecordField,
        filter: NumericFilter,
    },

    /// Malformed numeric filter: excludes every record
    Unsatisfiable,
}

impl FilterPredicate {
    /// Compiles a raw filter string for a field.
    ///
    /// Returns None when there is nothing to filter: an empty value, or a
    /// field that accepts no filter (`id`).
    pub fn compile(field: RecordField, raw: &str) -> Option<FilterPredicate> {
        if raw.is_empty() || field == RecordField::Id {
            return None;
        }

        if field.is_numeric() {
            return Some(match NumericFilter::parse(raw) {
                Some(filter) => FilterPredicate::NumericCompare { field, filter },
                None => FilterPredicate::Unsatisfiable,
            });
        }

        Some(FilterPredicate::TextContains {
            field,
            needle: raw.to_lowercase(),
        })
    }

    /// Whether a record passes this predicate
    pub fn matches(&self, record: &ApiRecord) -> bool {
        match self {
            FilterPredicate::TextContains { field, needle } => {
                field.text_of(record).to_lowercase().contains(needle.as_str())
            }
            FilterPredicate::NumericCompare { field, filter } => match field.number_of(record) {
                Some(value) => filter.matches(value),
                None => false,
            },
            FilterPredicate::Unsatisfiable => false,
        }
    }
}
