//! Request and response types for the submission endpoint.

use serde::{Deserialize, Serialize};

/// Contact-form payload. Fields default to empty strings so an absent field
/// and a blank one are rejected the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
  #[serde(default)]
  pub fullname: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub service: String,
  #[serde(default)]
  pub message: String,
}

impl Submission {
  /// All four fields present and non-empty.
  pub fn is_complete(&self) -> bool {
    !self.fullname.is_empty()
      && !self.email.is_empty()
      && !self.service.is_empty()
      && !self.message.is_empty()
  }
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
  pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
  pub error: String,
}
