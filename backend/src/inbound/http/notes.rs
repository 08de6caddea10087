//! Note editor HTTP handlers.
//!
//! ```text
//! GET  /users/{username}/notes/{note_id}/edit
//! POST /users/{username}/notes/{note_id}/edit  title=...&content=...
//! ```
//!
//! The `username` segment is routing context only. The redirect target after
//! a successful edit is built from the owner recorded in the store.

use actix_web::{HttpResponse, get, http::header, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::{MutationOutcome, SubmitNoteEditRequest};
use crate::domain::{CONTENT_MAX_CHARS, Error, NoteEditorView, TITLE_MAX_CHARS, ValidationReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorSchema, NoteEditFormSchema, NoteEditorViewSchema, ValidationReportSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{NOTE_ID_FIELD, parse_note_draft, parse_note_id};

/// Path parameters shared by the edit endpoints.
#[derive(Debug, Deserialize)]
pub struct NoteEditPath {
    pub username: String,
    pub note_id: String,
}

/// Edit view payload for `GET /users/{username}/notes/{note_id}/edit`.
#[derive(Debug, Serialize, ToSchema)]
pub struct NoteEditorResponse {
    #[schema(value_type = NoteEditorViewSchema)]
    pub note: NoteEditorView,
}

/// Body returned with `400 Bad Request` when an edit breaks a rule.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationFailureResponse {
    /// Always `"error"`.
    #[schema(example = "error")]
    pub status: String,
    #[schema(value_type = ValidationReportSchema)]
    pub errors: ValidationReport,
}

impl From<ValidationReport> for ValidationFailureResponse {
    fn from(errors: ValidationReport) -> Self {
        Self {
            status: "error".to_owned(),
            errors,
        }
    }
}

/// Worst case for one character in a urlencoded body: four UTF-8 bytes, each
/// written as `%XX`.
const ENCODED_BYTES_PER_CHAR: usize = 4 * 3;

/// Largest edit form body accepted by [`form_config`].
///
/// Sized so a title and content one character past their bounds, in any
/// script, still reach validation and get a length message rather than an
/// `invalid_form` rejection.
pub const EDIT_FORM_LIMIT_BYTES: usize = ENCODED_BYTES_PER_CHAR
    * (TITLE_MAX_CHARS + 1 + CONTENT_MAX_CHARS + 1)
    + "title=&content=".len();

/// Form extractor configuration that reports undecodable bodies through the
/// shared error envelope instead of Actix's plain-text default.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(EDIT_FORM_LIMIT_BYTES)
        .error_handler(|err, _req| {
            Error::invalid_request(format!("request body is not a valid form: {err}"))
                .with_details(json!({ "code": "invalid_form" }))
                .into()
        })
}

/// Load the current title and content of a note for editing.
#[utoipa::path(
    get,
    path = "/users/{username}/notes/{note_id}/edit",
    params(
        ("username" = String, Path, description = "Username in the note's URL"),
        ("note_id" = String, Path, description = "Note identifier")
    ),
    responses(
        (status = 200, description = "Editable note fields", body = NoteEditorResponse),
        (status = 400, description = "Blank identifier", body = ErrorSchema),
        (status = 404, description = "No note with the identifier", body = ErrorSchema),
        (status = 503, description = "Note store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "editNoteView"
)]
#[get("/users/{username}/notes/{note_id}/edit")]
pub async fn edit_note_view(
    state: web::Data<HttpState>,
    path: web::Path<NoteEditPath>,
) -> ApiResult<web::Json<NoteEditorResponse>> {
    let NoteEditPath { note_id, .. } = path.into_inner();
    let note_id = parse_note_id(note_id, NOTE_ID_FIELD)?;
    let note = state.note_editor_query.load(&note_id).await?;
    Ok(web::Json(NoteEditorResponse { note }))
}

/// Validate and apply an edit, then redirect to the note.
///
/// Rule violations are returned as a [`ValidationFailureResponse`]. A body
/// that omits or repeats `title` or `content` is rejected before validation
/// with an `invalid_request` error envelope.
#[utoipa::path(
    post,
    path = "/users/{username}/notes/{note_id}/edit",
    params(
        ("username" = String, Path, description = "Username in the note's URL"),
        ("note_id" = String, Path, description = "Note identifier")
    ),
    request_body(
        content = NoteEditFormSchema,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (
            status = 302,
            description = "Edit stored",
            headers(("Location" = String, description = "Canonical note path"))
        ),
        (
            status = 400,
            description = "Validation failed; malformed requests use the error envelope",
            body = ValidationFailureResponse
        ),
        (status = 404, description = "No note with the identifier", body = ErrorSchema),
        (status = 503, description = "Note store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "submitNoteEdit"
)]
#[post("/users/{username}/notes/{note_id}/edit")]
pub async fn submit_note_edit(
    state: web::Data<HttpState>,
    path: web::Path<NoteEditPath>,
    form: web::Form<Vec<(String, String)>>,
) -> ApiResult<HttpResponse> {
    let NoteEditPath { note_id, .. } = path.into_inner();
    let note_id = parse_note_id(note_id, NOTE_ID_FIELD)?;
    let draft = parse_note_draft(&form.into_inner())?;

    let outcome = state
        .note_editor
        .submit(SubmitNoteEditRequest { note_id, draft })
        .await?;

    Ok(match outcome {
        MutationOutcome::Success { redirect_path } => HttpResponse::Found()
            .insert_header((header::LOCATION, redirect_path))
            .finish(),
        MutationOutcome::Failure { report } => {
            HttpResponse::BadRequest().json(ValidationFailureResponse::from(report))
        }
    })
}

#[cfg(test)]
#[path = "notes_tests.rs"]
mod tests;
