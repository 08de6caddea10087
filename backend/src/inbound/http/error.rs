//! HTTP rendering of domain errors.
//!
//! Each [`ErrorCode`] maps to one status. Failures are logged at a level that
//! matches who caused them: client mistakes and missing notes at `debug`,
//! store outages at `warn`, and internal errors at `error`. Internal messages
//! never leave the process; the client sees a fixed message plus the trace
//! id it can quote back.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The `details.code` discriminator, e.g. `note_not_found` or `missing_field`.
fn detail_code(error: &Error) -> Option<&str> {
    error.details()?.get("code").and_then(Value::as_str)
}

/// The note id an error refers to, when it names one.
fn detail_note_id(error: &Error) -> Option<&str> {
    error.details()?.get("noteId").and_then(Value::as_str)
}

fn log_rendered(error: &Error) {
    let trace_id = error.trace_id();
    let kind = detail_code(error);
    match error.code() {
        ErrorCode::InvalidRequest => {
            debug!(?trace_id, ?kind, message = %error.message(), "request rejected");
        }
        ErrorCode::NotFound => {
            debug!(?trace_id, ?kind, note_id = ?detail_note_id(error), "resource not found");
        }
        ErrorCode::ServiceUnavailable => {
            warn!(?trace_id, message = %error.message(), "store unavailable");
        }
        ErrorCode::InternalError => {
            error!(?trace_id, message = %error.message(), "internal error");
        }
    }
}

/// Body sent to the client: internal errors keep only their trace id.
fn client_view(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let redacted = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        log_rendered(self);

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(client_view(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}
