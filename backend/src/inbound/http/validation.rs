//! Shared request-decoding helpers for inbound HTTP adapters.
//!
//! Everything here produces `invalid_request` errors for malformed requests.
//! Rule violations on well-formed input are the domain's business and never
//! surface from this module.

use serde_json::json;

use crate::domain::{Error, NoteDraft, NoteId, Username};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    DuplicateField,
    MissingIdentifier,
    InvalidIdentifier,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::DuplicateField => "duplicate_field",
            ErrorCode::MissingIdentifier => "missing_identifier",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const NOTE_ID_FIELD: FieldName = FieldName::new("noteId");
pub(crate) const USERNAME_FIELD: FieldName = FieldName::new("username");
pub(crate) const TITLE_FIELD: FieldName = FieldName::new("title");
pub(crate) const CONTENT_FIELD: FieldName = FieldName::new("content");

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn duplicate_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a single value"))
        .with_code(ErrorCode::DuplicateField)
}

pub(crate) fn missing_identifier_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} is required"))
        .with_code(ErrorCode::MissingIdentifier)
}

pub(crate) fn invalid_identifier_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} is not a valid identifier"))
        .with_value(ErrorCode::InvalidIdentifier, value)
}

pub(crate) fn parse_note_id(value: String, field: FieldName) -> Result<NoteId, Error> {
    NoteId::new(value).map_err(|_| missing_identifier_error(field))
}

pub(crate) fn parse_username(value: String, field: FieldName) -> Result<Username, Error> {
    if value.trim().is_empty() {
        return Err(missing_identifier_error(field));
    }
    Username::new(value.as_str()).map_err(|_| invalid_identifier_error(field, &value))
}

/// Return the sole value submitted for `field`.
///
/// A field that is absent, or that appears more than once, is not a single
/// string value and therefore malformed.
pub(crate) fn single_value(pairs: &[(String, String)], field: FieldName) -> Result<String, Error> {
    let mut matches = pairs
        .iter()
        .filter(|(name, _)| name == field.as_str())
        .map(|(_, value)| value);
    let first = matches.next().ok_or_else(|| missing_field_error(field))?;
    if matches.next().is_some() {
        return Err(duplicate_field_error(field));
    }
    Ok(first.clone())
}

/// Decode submitted form pairs into a [`NoteDraft`].
///
/// Unknown fields are ignored. Title is checked before content, so a request
/// missing both reports `title`.
pub(crate) fn parse_note_draft(pairs: &[(String, String)]) -> Result<NoteDraft, Error> {
    let title = single_value(pairs, TITLE_FIELD)?;
    let content = single_value(pairs, CONTENT_FIELD)?;
    Ok(NoteDraft::new(title, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect()
    }

    fn detail_code(error: &Error) -> (String, String) {
        let details = error.details().expect("details present");
        (
            details["field"].as_str().expect("field").to_owned(),
            details["code"].as_str().expect("code").to_owned(),
        )
    }

    #[rstest]
    fn draft_is_decoded_from_single_values() {
        let draft = parse_note_draft(&pairs(&[("title", "T"), ("content", "C"), ("x", "y")]))
            .expect("well-formed form");

        assert_eq!(draft, NoteDraft::new("T", "C"));
    }

    #[rstest]
    fn empty_values_are_still_well_formed() {
        let draft = parse_note_draft(&pairs(&[("title", ""), ("content", "")]))
            .expect("empty strings are single values");

        assert_eq!(draft, NoteDraft::new("", ""));
    }

    #[rstest]
    #[case(&[("content", "C")], "title", "missing_field")]
    #[case(&[("title", "T")], "content", "missing_field")]
    #[case(&[], "title", "missing_field")]
    #[case(&[("title", "a"), ("title", "b"), ("content", "C")], "title", "duplicate_field")]
    #[case(&[("title", "T"), ("content", "a"), ("content", "b")], "content", "duplicate_field")]
    fn malformed_forms_are_rejected(
        #[case] raw: &[(&str, &str)],
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let error = parse_note_draft(&pairs(raw)).expect_err("malformed form");

        assert_eq!(error.code(), crate::domain::ErrorCode::InvalidRequest);
        assert_eq!(detail_code(&error), (field.to_owned(), code.to_owned()));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_note_id_is_missing_identifier(#[case] raw: &str) {
        let error = parse_note_id(raw.to_owned(), NOTE_ID_FIELD).expect_err("blank id");

        assert_eq!(
            detail_code(&error),
            ("noteId".to_owned(), "missing_identifier".to_owned())
        );
    }

    #[rstest]
    fn untrimmed_username_is_invalid_identifier() {
        let error = parse_username(" kim".to_owned(), USERNAME_FIELD).expect_err("untrimmed");

        assert_eq!(
            detail_code(&error),
            ("username".to_owned(), "invalid_identifier".to_owned())
        );
        assert_eq!(error.details().expect("details")["value"], " kim");
    }
}
