//! Persisted PC builds (`POST /configurator/save`, `GET /configurator/my-configs`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::SelectionMap;

/// Body sent when saving a build.
#[derive(Debug, Clone, Serialize)]
pub struct SaveConfigurationRequest<'a> {
    pub name: &'a str,
    pub components: &'a SelectionMap,
}

/// A named snapshot of a selection owned by the user who saved it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedConfiguration {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub components: SelectionMap,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default = "default_compatible")]
    pub compatibility_status: bool,
    #[serde(default)]
    pub compatibility_issues: Vec<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

fn default_compatible() -> bool {
    true
}
