//! Notification text for a submission status change.

use crate::api::response::{Submission, SubmissionRecord};
use crate::error::ValidationError;

/// Build the chat message for one submission record.
pub fn format_status(record: &SubmissionRecord) -> Result<String, ValidationError> {
    let submission = record.decode()?;
    Ok(render(&submission))
}

pub fn render(submission: &Submission) -> String {
    let name = &submission.name;
    let verdict = submission.status.verdict();
    format!("Status changed for submission \"{name}\". {verdict}")
}
