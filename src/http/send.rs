//! Handler for contact-form submissions.

use crate::{
  app::AppState,
  error::ApiError,
  models::submission::{SendResponse, Submission},
};
use axum::{Json, extract::State};
use tracing::info;

/// Where submissions are delivered. Fixed at build time.
const RECIPIENT: &str = "nyaranga4@gmail.com";

/// Validate the payload, email it to the fixed recipient, then persist it.
/// The row is only written after the send succeeds.
pub async fn send_submission(
  State(state): State<AppState>,
  Json(submission): Json<Submission>,
) -> Result<Json<SendResponse>, ApiError> {
  if !submission.is_complete() {
    return Err(ApiError::Validation);
  }

  let subject = format!("New Contact Us Submission: {}", submission.service);
  let body = format!(
    "Full Name: {}\nEmail: {}\nService: {}\nMessage: {}\n",
    submission.fullname, submission.email, submission.service, submission.message
  );

  state
    .mailer
    .send(RECIPIENT, &subject, &body)
    .await
    .map_err(ApiError::Mail)?;

  state.store.create(&submission).await?;

  info!("delivered contact submission from {}", submission.email);
  Ok(Json(SendResponse {
    message: "Email sent successfully!".to_string(),
  }))
}
