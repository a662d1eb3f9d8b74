//! Contact form submissions.

use chrono::Utc;

use topup_core::SubmissionId;

use crate::error::StoreError;
use crate::keys;
use crate::kv::KvStore;
use crate::models::{ContactSubmission, SubmissionDraft};

use super::Repository;

impl<S: KvStore> Repository<S> {
    /// All contact submissions, in stored order.
    #[must_use]
    pub fn contact_submissions(&self) -> Vec<ContactSubmission> {
        self.read_collection(keys::CONTACT_SUBMISSIONS)
    }

    /// Number of submissions no admin has opened yet.
    #[must_use]
    pub fn unread_submission_count(&self) -> usize {
        self.contact_submissions()
            .iter()
            .filter(|s| !s.is_read)
            .count()
    }

    /// Store a new submission, stamping its ID, date, and unread flag.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn create_contact_submission(
        &mut self,
        draft: SubmissionDraft,
    ) -> Result<ContactSubmission, StoreError> {
        let submission = ContactSubmission {
            id: SubmissionId::generate(self.ids()),
            name: draft.name,
            email: draft.email,
            subject: draft.subject,
            message: draft.message,
            date: Utc::now(),
            is_read: false,
        };

        let mut submissions = self.contact_submissions();
        submissions.push(submission.clone());
        self.write_collection(keys::CONTACT_SUBMISSIONS, &submissions)?;
        Ok(submission)
    }

    /// Mark the submission with the given ID as read.
    ///
    /// Returns the updated record, or `None` if the ID is absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn mark_submission_read(
        &mut self,
        id: &SubmissionId,
    ) -> Result<Option<ContactSubmission>, StoreError> {
        let mut submissions = self.contact_submissions();
        let Some(submission) = submissions.iter_mut().find(|s| &s.id == id) else {
            return Ok(None);
        };
        submission.is_read = true;
        let updated = submission.clone();
        self.write_collection(keys::CONTACT_SUBMISSIONS, &submissions)?;
        Ok(Some(updated))
    }

    /// Delete the submission with the given ID.
    ///
    /// Returns whether a record was actually removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn delete_contact_submission(&mut self, id: &SubmissionId) -> Result<bool, StoreError> {
        let mut submissions = self.contact_submissions();
        let before = submissions.len();
        submissions.retain(|s| &s.id != id);
        if submissions.len() == before {
            return Ok(false);
        }
        self.write_collection(keys::CONTACT_SUBMISSIONS, &submissions)?;
        Ok(true)
    }
}
