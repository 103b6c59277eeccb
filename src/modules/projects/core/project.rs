use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::projects::core::indicator::Indicator;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Flip `enabled` and stamp `updated_at`. The stamp never moves backwards.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.enabled = !self.enabled;
        self.updated_at = now.max(self.updated_at);
    }

    pub fn status_label(&self) -> &'static str {
        if self.enabled { "enabled" } else { "disabled" }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub indicators: Vec<Indicator>,
}
