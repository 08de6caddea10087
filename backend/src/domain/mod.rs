//! Domain primitives, services and ports.
//!
//! Purpose: Define strongly typed note-editing entities and the services that
//! enforce edit rules. Adapters on either side of the hexagon depend on the
//! port traits in [`ports`], never on each other.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Note, NoteId, NoteEditorView, NoteEdit — the editable note aggregate.
//! - NoteDraft, ValidationReport — unvalidated input and its rule report.
//! - User, Username — note owners.
//! - NoteEditorService, UserProfileService — driving port implementations.

pub mod error;
pub mod note;
pub mod note_editor;
pub mod note_validation;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_profile;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::note::{Note, NoteEdit, NoteEditorView, NoteId, NoteIdValidationError};
pub use self::note_editor::{NoteEditorService, note_not_found};
pub use self::note_validation::{
    CONTENT_MAX_CHARS, FieldErrors, NoteDraft, NoteField, TITLE_MAX_CHARS, ValidationReport,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserValidationError, Username};
pub use self::user_profile::UserProfileService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use notes_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
