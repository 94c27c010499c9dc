//! Compatibility verdicts returned by `POST /configurator/validate`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::SelectionMap;

/// Rule-engine answer for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityVerdict {
    pub compatible: bool,
    #[serde(default)]
    pub issues: Vec<String>,
    /// Backend-computed total; informational only, the client total comes from the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

/// A verdict stamped with the selection revision it answers.
///
/// Verdicts are never cleared when the selection changes afterwards; callers
/// ask [`ValidatedVerdict::is_stale`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedVerdict {
    pub verdict: CompatibilityVerdict,
    pub revision: u64,
    pub received_at: DateTime<Utc>,
}

impl ValidatedVerdict {
    pub fn new(verdict: CompatibilityVerdict, revision: u64) -> Self {
        Self { verdict, revision, received_at: Utc::now() }
    }

    pub fn is_stale(&self, selection: &SelectionMap) -> bool {
        self.revision != selection.revision()
    }
}
