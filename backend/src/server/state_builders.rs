//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use tracing::info;

use notes_backend::domain::ports::{NoteRepository, UserRepository};
use notes_backend::domain::{NoteEditorService, UserProfileService};
use notes_backend::inbound::http::state::{HttpState, HttpStatePorts};
use notes_backend::outbound::memory::InMemoryNoteStore;
use notes_backend::outbound::persistence::{DieselNoteRepository, DieselUserRepository};

use super::ServerConfig;

/// Build the HTTP state from a note repository and a user repository.
fn state_from_repositories<N, U>(notes: Arc<N>, users: Arc<U>) -> HttpState
where
    N: NoteRepository + 'static,
    U: UserRepository + 'static,
{
    let editor = Arc::new(NoteEditorService::new(notes));
    HttpState::new(HttpStatePorts {
        note_editor: editor.clone(),
        note_editor_query: editor,
        profile: Arc::new(UserProfileService::new(users)),
    })
}

/// Build the HTTP state using Diesel adapters when a pool is configured,
/// otherwise the in-memory store.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the demo data cannot be constructed.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    if let Some(pool) = &config.db_pool {
        info!("serving notes from PostgreSQL");
        return Ok(state_from_repositories(
            Arc::new(DieselNoteRepository::new(pool.clone())),
            Arc::new(DieselUserRepository::new(pool.clone())),
        ));
    }

    let store = if config.seed_demo_data {
        InMemoryNoteStore::with_demo_data().map_err(std::io::Error::other)?
    } else {
        InMemoryNoteStore::new()
    };
    info!(seeded = config.seed_demo_data, "serving notes from the in-memory store");
    let store = Arc::new(store);
    Ok(state_from_repositories(store.clone(), store))
}
