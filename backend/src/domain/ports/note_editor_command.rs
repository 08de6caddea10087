//! Driving port for submitting note edits.
//!
//! A submission moves through `Received → Validating → {Rejected |
//! Persisting → Redirected}`. Rejections are ordinary data
//! ([`MutationOutcome::Failure`]); only malformed requests and store failures
//! surface as [`Error`].

use async_trait::async_trait;

use crate::domain::{Error, NoteDraft, NoteId, ValidationReport};

/// A decoded edit submission for one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitNoteEditRequest {
    /// Note being edited.
    pub note_id: NoteId,
    /// Submitted field values, not yet validated.
    pub draft: NoteDraft,
}

/// Result of one edit attempt. Exactly one variant is produced per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The edit was stored; send the client to `redirect_path`.
    Success {
        /// Canonical note path, `/users/{username}/notes/{id}`.
        redirect_path: String,
    },
    /// The edit broke one or more rules; nothing was stored.
    Failure {
        /// Every violated rule, grouped by field.
        report: ValidationReport,
    },
}

/// Domain use-case port for validating and applying note edits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteEditorCommand: Send + Sync {
    /// Validate `request.draft` and, when it passes, persist it.
    ///
    /// # Errors
    ///
    /// Returns an error when the store rejects the update after validation
    /// passed, including when the note no longer exists.
    async fn submit(&self, request: SubmitNoteEditRequest) -> Result<MutationOutcome, Error>;
}
