//! Driven port for note persistence.
//!
//! The store owns notes; this port only reads a note by identity and replaces
//! its editable fields. Adapters decide how concurrent writes to the same
//! note are serialised.

use async_trait::async_trait;

use crate::domain::{Note, NoteEdit, NoteId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by note repository adapters.
    pub enum NoteRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "note repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "note repository query failed: {message}",
        /// The note addressed by an update no longer exists.
        NotFound { note_id: String } => "note {note_id} does not exist",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Fetch the note whose identifier equals `id`.
    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, NoteRepositoryError>;

    /// Replace the title and content of note `id`, returning the stored note.
    ///
    /// # Errors
    ///
    /// Returns [`NoteRepositoryError::NotFound`] when no note has the
    /// identifier at the time of the write.
    async fn update_content(
        &self,
        id: &NoteId,
        edit: &NoteEdit,
    ) -> Result<Note, NoteRepositoryError>;
}
