//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the note editor, user profile and health endpoints
//! - **Schemas**: domain type wrappers from
//!   [`crate::inbound::http::schemas`] that keep domain types free of utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::notes::{NoteEditorResponse, ValidationFailureResponse};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FieldErrorsSchema, NoteEditFormSchema, NoteEditorViewSchema,
    UserSchema, ValidationReportSchema,
};
use crate::inbound::http::users::UserProfileResponse;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes backend API",
        description = "HTTP interface for editing notes, reading owner profiles and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::notes::edit_note_view,
        crate::inbound::http::notes::submit_note_edit,
        crate::inbound::http::users::get_user_profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserSchema,
        NoteEditorViewSchema,
        FieldErrorsSchema,
        ValidationReportSchema,
        NoteEditFormSchema,
        NoteEditorResponse,
        ValidationFailureResponse,
        UserProfileResponse
    )),
    tags(
        (name = "notes", description = "Loading and editing notes"),
        (name = "users", description = "Note owner profiles"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
