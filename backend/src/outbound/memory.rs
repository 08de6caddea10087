//! In-process note and user store.
//!
//! Backs the service when no database URL is configured and gives HTTP and
//! behaviour tests a real repository to observe. Both maps sit behind one
//! `RwLock` so an update never interleaves with a read of the same note.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{NoteRepository, NoteRepositoryError, UserRepository, UserRepositoryError};
use crate::domain::{
    Note, NoteEdit, NoteId, NoteIdValidationError, User, UserValidationError, Username,
};

const POISONED: &str = "in-memory store lock poisoned";
const DEMO_USERNAME: &str = "kim";
const DEMO_NAME: &str = "Kim";
const DEMO_NOTE_ID: &str = "abc";

/// Demo identifiers failed domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemoDataError {
    /// The demo username was rejected.
    #[error("invalid demo username: {0}")]
    Username(#[from] UserValidationError),
    /// The demo note identifier was rejected.
    #[error("invalid demo note id: {0}")]
    NoteId(#[from] NoteIdValidationError),
}

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<Username, User>,
    notes: HashMap<NoteId, Note>,
}

/// `HashMap`-backed implementation of [`NoteRepository`] and
/// [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    state: RwLock<StoreState>,
}

impl InMemoryNoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding user `kim` and their note `abc`.
    ///
    /// # Examples
    /// ```
    /// use notes_backend::domain::NoteId;
    /// use notes_backend::outbound::memory::InMemoryNoteStore;
    ///
    /// let store = InMemoryNoteStore::with_demo_data().expect("demo data is valid");
    /// let id = NoteId::new("abc").expect("id");
    /// assert!(store.snapshot(&id).is_some());
    /// ```
    pub fn with_demo_data() -> Result<Self, DemoDataError> {
        let store = Self::new();
        let kim = Username::new(DEMO_USERNAME)?;
        store.insert_user(User::new(kim.clone(), Some(DEMO_NAME.to_owned())));
        store.insert_note(Note::new(
            NoteId::new(DEMO_NOTE_ID)?,
            kim,
            "Groceries",
            "Milk, eggs, bread",
        ));
        Ok(store)
    }

    /// Insert or replace a user.
    pub fn insert_user(&self, user: User) {
        let mut state = self.write();
        state.users.insert(user.username().clone(), user);
    }

    /// Insert or replace a note.
    pub fn insert_note(&self, note: Note) {
        let mut state = self.write();
        state.notes.insert(note.id.clone(), note);
    }

    /// Copy of the note currently stored under `id`.
    pub fn snapshot(&self, id: &NoteId) -> Option<Note> {
        self.read().notes.get(id).cloned()
    }

    // Seeding and inspection run outside request handling, where recovering
    // the inner state is preferable to failing.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteStore {
    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, NoteRepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| NoteRepositoryError::query(POISONED))?;
        Ok(state.notes.get(id).cloned())
    }

    async fn update_content(
        &self,
        id: &NoteId,
        edit: &NoteEdit,
    ) -> Result<Note, NoteRepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| NoteRepositoryError::query(POISONED))?;
        let note = state
            .notes
            .get_mut(id)
            .ok_or_else(|| NoteRepositoryError::not_found(id.to_string()))?;
        edit.apply_to(note);
        debug!(note_id = %id, "note updated in memory");
        Ok(note.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryNoteStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| UserRepositoryError::query(POISONED))?;
        Ok(state.users.get(username).cloned())
    }
}
