//! Record queries sent to the remote store.
//!
//! Conditions within a group are ORed; groups are ANDed together,
//! matching the service's `where`/`whereGroups` request shape. The
//! in-memory store evaluates the same query directly against record
//! JSON, so tests and demos exercise identical semantics.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// A single field condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Field equals the value.
    Eq(String, Value),
    /// Field does not equal the value.
    NotEq(String, Value),
    /// String field contains the needle, case-insensitively.
    Contains(String, String),
    /// Field is greater than the value (numbers, or strings such as
    /// ISO timestamps).
    GreaterThan(String, Value),
    /// Field is one of the listed values.
    OneOf(String, Vec<Value>),
}

impl Condition {
    /// Evaluate against a record rendered as JSON.
    pub fn matches(&self, record: &Value) -> bool {
        match self {
            Condition::Eq(field, expected) => record.get(field) == Some(expected),
            Condition::NotEq(field, expected) => record.get(field) != Some(expected),
            Condition::Contains(field, needle) => record
                .get(field)
                .and_then(Value::as_str)
                .map_or(false, |s| {
                    s.to_lowercase().contains(&needle.to_lowercase())
                }),
            Condition::GreaterThan(field, bound) => {
                match (record.get(field), bound) {
                    (Some(Value::Number(a)), Value::Number(b)) => {
                        a.as_f64().unwrap_or(f64::NAN) > b.as_f64().unwrap_or(f64::NAN)
                    }
                    (Some(Value::String(a)), Value::String(b)) => a > b,
                    _ => false,
                }
            }
            Condition::OneOf(field, values) => record
                .get(field)
                .map_or(false, |v| values.contains(v)),
        }
    }
}

/// A group of ORed conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionGroup {
    /// Conditions; the group matches when any one does.
    pub any: Vec<Condition>,
}

impl ConditionGroup {
    /// Evaluate against a record rendered as JSON.
    pub fn matches(&self, record: &Value) -> bool {
        self.any.iter().any(|c| c.matches(record))
    }
}

/// A query over a record table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordQuery {
    /// Condition groups, ANDed together.
    pub groups: Vec<ConditionGroup>,
    /// Field to order by.
    pub order_by: Option<(String, SortDir)>,
    /// Maximum records to return.
    pub limit: Option<usize>,
    /// Records to skip.
    pub offset: usize,
}

impl RecordQuery {
    /// An unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single ANDed condition.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.groups.push(ConditionGroup {
            any: vec![condition],
        });
        self
    }

    /// Add a group of ORed conditions.
    pub fn any_of(mut self, conditions: Vec<Condition>) -> Self {
        if !conditions.is_empty() {
            self.groups.push(ConditionGroup { any: conditions });
        }
        self
    }

    /// Order results by a field.
    pub fn order_by(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        self.order_by = Some((field.into(), dir));
        self
    }

    /// Limit the number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Evaluate all groups against a record rendered as JSON.
    pub fn matches(&self, record: &Value) -> bool {
        self.groups.iter().all(|g| g.matches(record))
    }
}
