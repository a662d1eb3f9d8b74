//! Contact form submission types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use topup_core::{Email, SubmissionId};

/// A message left through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Unique submission ID (`contact-<millis>` token).
    pub id: SubmissionId,
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: Email,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Submission timestamp.
    pub date: DateTime<Utc>,
    /// Whether an admin has opened it.
    pub is_read: bool,
}

/// Caller-supplied fields for a contact submission.
///
/// The repository stamps the ID, date, and unread flag.
#[derive(Debug, Clone)]
pub struct SubmissionDraft {
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub message: String,
}
