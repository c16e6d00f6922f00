use thiserror::Error;

/// Errors from parsing catalog wire tags.
#[derive(Debug, Error)]
pub enum ComponentError {
  /// Publisher tag not recognized by this build.
  #[error("unknown publisher type: {0}")]
  UnknownPublisherType(String),

  /// Schedule status tag not recognized by this build.
  #[error("unknown schedule status: {0}")]
  UnknownScheduleStatus(String),
}
