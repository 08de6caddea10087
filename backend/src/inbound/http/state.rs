//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{NoteEditorCommand, NoteEditorQuery, UserProfileQuery};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub note_editor: Arc<dyn NoteEditorCommand>,
    pub note_editor_query: Arc<dyn NoteEditorQuery>,
    pub profile: Arc<dyn UserProfileQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub note_editor: Arc<dyn NoteEditorCommand>,
    pub note_editor_query: Arc<dyn NoteEditorQuery>,
    pub profile: Arc<dyn UserProfileQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use notes_backend::domain::{NoteEditorService, UserProfileService};
    /// use notes_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use notes_backend::outbound::memory::InMemoryNoteStore;
    ///
    /// let store = Arc::new(InMemoryNoteStore::default());
    /// let editor = Arc::new(NoteEditorService::new(store.clone()));
    /// let state = HttpState::new(HttpStatePorts {
    ///     note_editor: editor.clone(),
    ///     note_editor_query: editor,
    ///     profile: Arc::new(UserProfileService::new(store)),
    /// });
    /// let _profile = state.profile.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            note_editor,
            note_editor_query,
            profile,
        } = ports;
        Self {
            note_editor,
            note_editor_query,
            profile,
        }
    }
}
