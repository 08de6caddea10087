//! PostgreSQL-backed `NoteRepository` implementation using Diesel ORM.
//!
//! Updates are a single `UPDATE ... RETURNING`, so the row that is returned is
//! the row that was written and the owner used for the redirect comes from
//! the database.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{NoteRepository, NoteRepositoryError};
use crate::domain::{Note, NoteEdit, NoteId, Username};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NoteContentUpdate, NoteRow};
use super::pool::{DbPool, PoolError};
use super::schema::notes;

/// Diesel-backed implementation of the [`NoteRepository`] port.
#[derive(Clone)]
pub struct DieselNoteRepository {
    pool: DbPool,
}

impl DieselNoteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> NoteRepositoryError {
    map_basic_pool_error(error, |message| NoteRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> NoteRepositoryError {
    map_basic_diesel_error(
        error,
        NoteRepositoryError::query,
        NoteRepositoryError::connection,
    )
}

/// Convert a database row into a domain note.
fn row_to_note(row: NoteRow) -> Result<Note, NoteRepositoryError> {
    let NoteRow {
        id,
        owner_username,
        title,
        content,
        updated_at: _,
    } = row;

    let id = NoteId::new(id)
        .map_err(|err| NoteRepositoryError::query(format!("stored note id: {err}")))?;
    let owner = Username::new(owner_username)
        .map_err(|err| NoteRepositoryError::query(format!("stored note owner: {err}")))?;
    Ok(Note::new(id, owner, title, content))
}

#[async_trait]
impl NoteRepository for DieselNoteRepository {
    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, NoteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<NoteRow> = notes::table
            .filter(notes::id.eq(id.as_str()))
            .select(NoteRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_note).transpose()
    }

    async fn update_content(
        &self,
        id: &NoteId,
        edit: &NoteEdit,
    ) -> Result<Note, NoteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = NoteContentUpdate {
            title: edit.title(),
            content: edit.content(),
            updated_at: Utc::now(),
        };

        let row: Option<NoteRow> = diesel::update(notes::table.filter(notes::id.eq(id.as_str())))
            .set(&changes)
            .returning(NoteRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let row = row.ok_or_else(|| NoteRepositoryError::not_found(id.as_str()))?;
        debug!(note_id = %id, updated_at = %row.updated_at, "note row updated");
        row_to_note(row)
    }
}
