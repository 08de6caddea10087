//! Note editor domain service.
//!
//! Implements the loader and mutation driving ports over a
//! [`NoteRepository`]. Validation always runs to completion before the store
//! is touched, and a rejected edit never reaches the repository.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    MutationOutcome, NoteEditorCommand, NoteEditorQuery, NoteRepository, NoteRepositoryError,
    SubmitNoteEditRequest,
};
use crate::domain::{Error, NoteEditorView, NoteId};

/// Build the not-found error returned for an unknown note identifier.
///
/// The identifier is kept in `details.noteId` so clients can render a
/// "no such note" view without parsing the message.
pub fn note_not_found(note_id: &str) -> Error {
    Error::not_found(format!("No note with the id \"{note_id}\" exists")).with_details(json!({
        "noteId": note_id,
        "code": "note_not_found",
    }))
}

/// Note editor service implementing [`NoteEditorQuery`] and
/// [`NoteEditorCommand`].
#[derive(Clone)]
pub struct NoteEditorService<R> {
    notes: Arc<R>,
}

impl<R> NoteEditorService<R> {
    /// Create a new service backed by `notes`.
    pub fn new(notes: Arc<R>) -> Self {
        Self { notes }
    }
}

impl<R> NoteEditorService<R>
where
    R: NoteRepository,
{
    fn map_repository_error(error: NoteRepositoryError) -> Error {
        match error {
            NoteRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("note repository unavailable: {message}"))
            }
            NoteRepositoryError::Query { message } => {
                Error::internal(format!("note repository error: {message}"))
            }
            NoteRepositoryError::NotFound { note_id } => note_not_found(&note_id),
        }
    }
}

#[async_trait]
impl<R> NoteEditorQuery for NoteEditorService<R>
where
    R: NoteRepository,
{
    async fn load(&self, id: &NoteId) -> Result<NoteEditorView, Error> {
        let note = self
            .notes
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?;

        note.map(|found| found.to_editor_view())
            .ok_or_else(|| note_not_found(id.as_str()))
    }
}

#[async_trait]
impl<R> NoteEditorCommand for NoteEditorService<R>
where
    R: NoteRepository,
{
    async fn submit(&self, request: SubmitNoteEditRequest) -> Result<MutationOutcome, Error> {
        let SubmitNoteEditRequest { note_id, draft } = request;

        let edit = match draft.validate() {
            Ok(edit) => edit,
            Err(report) => {
                debug!(note_id = %note_id, "note edit rejected");
                return Ok(MutationOutcome::Failure { report });
            }
        };

        let note = self
            .notes
            .update_content(&note_id, &edit)
            .await
            .map_err(Self::map_repository_error)?;

        info!(note_id = %note.id, owner = %note.owner, "note edit committed");
        Ok(MutationOutcome::Success {
            redirect_path: note.canonical_path(),
        })
    }
}

#[cfg(test)]
#[path = "note_editor_tests.rs"]
mod tests;
