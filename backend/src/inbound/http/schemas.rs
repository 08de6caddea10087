//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed: missing identifier or non-single field.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested note or user does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "No note with the id \"abc\" exists")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients, such as `noteId`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Unique username.
    #[schema(example = "kim")]
    username: String,
    /// Optional human-readable name; clients fall back to `username`.
    #[schema(example = "Kim Lee")]
    name: Option<String>,
}

/// OpenAPI schema for [`crate::domain::NoteEditorView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NoteEditorView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NoteEditorViewSchema {
    /// Current title.
    #[schema(example = "Groceries")]
    title: String,
    /// Current body text.
    #[schema(example = "Milk, eggs")]
    content: String,
}

/// OpenAPI schema for [`crate::domain::FieldErrors`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldErrors)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldErrorsSchema {
    /// Messages for the `title` field, in rule order.
    title: Vec<String>,
    /// Messages for the `content` field, in rule order.
    content: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::ValidationReport`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ValidationReport)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationReportSchema {
    /// Messages not tied to a single field.
    form_errors: Vec<String>,
    /// Messages grouped by field.
    field_errors: FieldErrorsSchema,
}

/// OpenAPI schema for the `application/x-www-form-urlencoded` edit form.
///
/// Each field must appear exactly once; an absent or repeated field is a
/// malformed request rather than a validation failure.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NoteEditFormSchema {
    /// Replacement title, 1 to 100 characters.
    #[schema(example = "Groceries")]
    title: String,
    /// Replacement body text, 1 to 10000 characters.
    #[schema(example = "Milk, eggs, bread")]
    content: String,
}
