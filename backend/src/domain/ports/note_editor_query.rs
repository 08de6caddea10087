//! Driving port for loading the note edit view.
//!
//! Inbound adapters call [`NoteEditorQuery::load`] to fetch what the edit
//! form needs without touching persistence types.

use async_trait::async_trait;

use crate::domain::{Error, NoteEditorView, NoteId};

/// Domain use-case port for reading a note into the edit view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteEditorQuery: Send + Sync {
    /// Return the current title and content of note `id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] with the identifier in
    /// `details.noteId` when no note matches, or a store failure.
    async fn load(&self, id: &NoteId) -> Result<NoteEditorView, Error>;
}
