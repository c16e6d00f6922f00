use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use verbena_component::ScheduleStatus;

/// Shown when a schedule has no planned next run.
const NOT_SCHEDULED: &str = "Not scheduled";

/// Format a schedule's next-run timestamp for display, e.g.
/// "Mar 4, 9:00 AM UTC".
///
/// Absent or empty input renders as "Not scheduled". Anything that does not
/// parse as RFC 3339 is returned unchanged rather than surfacing an error;
/// the raw value is still more useful to the user than an empty cell.
pub fn format_next_run(next_run_at: Option<&str>) -> String {
  let raw = match next_run_at {
    Some(value) if !value.is_empty() => value,
    _ => return NOT_SCHEDULED.to_string(),
  };

  match DateTime::parse_from_rfc3339(raw) {
    Ok(parsed) => parsed
      .with_timezone(&Utc)
      .format("%b %-d, %-I:%M %p %Z")
      .to_string(),
    Err(error) => {
      tracing::debug!(%raw, %error, "next run timestamp did not parse, showing raw value");
      raw.to_string()
    }
  }
}

/// Visual style tag the front end maps to chip colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusStyle {
  Success,
  Warning,
  Danger,
}

impl StatusStyle {
  pub fn as_str(&self) -> &'static str {
    match self {
      StatusStyle::Success => "success",
      StatusStyle::Warning => "warning",
      StatusStyle::Danger => "danger",
    }
  }
}

/// Style for a schedule status chip. Static mapping, no further logic.
pub fn status_style(status: ScheduleStatus) -> StatusStyle {
  match status {
    ScheduleStatus::Active => StatusStyle::Success,
    ScheduleStatus::Paused => StatusStyle::Warning,
    ScheduleStatus::Error => StatusStyle::Danger,
  }
}
