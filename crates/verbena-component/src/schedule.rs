use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ComponentError;

/// Execution state of a workflow schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
  Active,
  Paused,
  Error,
}

impl FromStr for ScheduleStatus {
  type Err = ComponentError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "active" => Ok(ScheduleStatus::Active),
      "paused" => Ok(ScheduleStatus::Paused),
      "error" => Ok(ScheduleStatus::Error),
      other => Err(ComponentError::UnknownScheduleStatus(other.to_string())),
    }
  }
}

/// A workflow schedule as the front end receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
  /// Workflow this schedule belongs to.
  pub workflow_id: String,

  pub status: ScheduleStatus,

  /// Cron expression driving the schedule, if one is set.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cron: Option<String>,

  /// Next planned run, as an RFC 3339 string from the back end. The display
  /// layer formats this for rendering; it is not parsed on ingest.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub next_run_at: Option<String>,
}
