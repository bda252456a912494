//! Activation history tracking.
//!
//! Provides immutable tracking of the steps a session has moved through,
//! following functional programming principles.

use super::step::Step;
use super::transition::SqueezeCount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied activation.
///
/// Records are immutable values describing one move through the cycle at
/// a specific point in time.
///
/// # Example
///
/// ```rust
/// use lemonade::core::{ActivationRecord, Step};
/// use chrono::Utc;
///
/// let record = ActivationRecord {
///     from: Step::SelectLemon,
///     to: Step::Squeeze,
///     timestamp: Utc::now(),
///     squeezes_remaining: 3,
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivationRecord {
    /// The step the activation moved from
    pub from: Step,
    /// The step the activation moved to
    pub to: Step,
    /// When the activation occurred
    pub timestamp: DateTime<Utc>,
    /// The squeeze counter after the activation was applied
    pub squeezes_remaining: SqueezeCount,
}

/// Ordered history of applied activations.
///
/// History is immutable - the `record` method returns a new history with
/// the activation added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use lemonade::core::{ActivationHistory, ActivationRecord, Step};
/// use chrono::Utc;
///
/// let history = ActivationHistory::new();
/// let history = history.record(ActivationRecord {
///     from: Step::SelectLemon,
///     to: Step::Squeeze,
///     timestamp: Utc::now(),
///     squeezes_remaining: 2,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![Step::SelectLemon, Step::Squeeze]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActivationHistory {
    records: Vec<ActivationRecord>,
}

impl ActivationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record an activation, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record added.
    pub fn record(&self, record: ActivationRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of steps traversed.
    ///
    /// Returns steps in order: the starting step, then the `to` step of
    /// each activation. Empty if nothing has been recorded yet.
    pub fn get_path(&self) -> Vec<Step> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Calculate total duration from first to last activation.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[ActivationRecord] {
        &self.records
    }
}
