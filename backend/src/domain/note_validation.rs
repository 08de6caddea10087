//! Edit rules for note submissions.
//!
//! A submission is checked against every rule, regardless of earlier
//! failures, so one response can report several problems at once. Each rule
//! is folded over an initially empty [`ValidationReport`]; the report is a
//! plain value and nothing is mutated in place.

use serde::{Deserialize, Serialize};

use super::NoteEdit;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 100;
/// Maximum content length, in characters.
pub const CONTENT_MAX_CHARS: usize = 10_000;

/// Editable note fields that can carry validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteField {
    /// The note title.
    Title,
    /// The note body.
    Content,
}

impl NoteField {
    /// Form field name as submitted by clients.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }
}

/// Per-field validation messages.
///
/// Both fields are always present so clients can render inline messages
/// without probing for keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    /// Messages attached to the title input, in rule order.
    pub title: Vec<String>,
    /// Messages attached to the content input, in rule order.
    pub content: Vec<String>,
}

impl FieldErrors {
    /// Messages recorded for `field`.
    pub fn get(&self, field: NoteField) -> &[String] {
        match field {
            NoteField::Title => &self.title,
            NoteField::Content => &self.content,
        }
    }

    fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

/// Structured outcome of one validation pass.
///
/// ## Invariants
/// - The report is failing iff `form_errors` is non-empty or any field has at
///   least one message.
///
/// # Examples
/// ```
/// use notes_backend::domain::{NoteField, ValidationReport};
///
/// let report = ValidationReport::default();
/// assert!(!report.has_errors());
///
/// let report = report.with_field_error(NoteField::Title, "Title is required");
/// assert!(report.has_errors());
/// assert_eq!(report.field_errors.get(NoteField::Title), ["Title is required"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Messages not tied to a single field.
    pub form_errors: Vec<String>,
    /// Messages keyed by field.
    pub field_errors: FieldErrors,
}

impl ValidationReport {
    /// Return a copy of the report with `message` appended to `field`.
    #[must_use]
    pub fn with_field_error(mut self, field: NoteField, message: impl Into<String>) -> Self {
        let messages = match field {
            NoteField::Title => &mut self.field_errors.title,
            NoteField::Content => &mut self.field_errors.content,
        };
        messages.push(message.into());
        self
    }

    /// Return a copy of the report with a form-level `message` appended.
    #[must_use]
    pub fn with_form_error(mut self, message: impl Into<String>) -> Self {
        self.form_errors.push(message.into());
        self
    }

    /// Whether any rule was violated.
    pub fn has_errors(&self) -> bool {
        !self.form_errors.is_empty() || !self.field_errors.is_empty()
    }
}

/// A decoded but not yet validated submission.
///
/// Produced by inbound adapters once the request shape is known to be sound:
/// both fields were present exactly once as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    /// Submitted title.
    pub title: String,
    /// Submitted content.
    pub content: String,
}

struct EditRule {
    field: NoteField,
    violated: fn(&NoteDraft) -> bool,
    message: &'static str,
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

const EDIT_RULES: [EditRule; 4] = [
    EditRule {
        field: NoteField::Title,
        violated: |draft| draft.title.is_empty(),
        message: "Title is required",
    },
    EditRule {
        field: NoteField::Title,
        violated: |draft| char_len(&draft.title) > TITLE_MAX_CHARS,
        message: "Title must be at most 100 characters long",
    },
    EditRule {
        field: NoteField::Content,
        violated: |draft| draft.content.is_empty(),
        message: "Content is required",
    },
    EditRule {
        field: NoteField::Content,
        violated: |draft| char_len(&draft.content) > CONTENT_MAX_CHARS,
        message: "Content must be at most 10000 characters long",
    },
];

impl NoteDraft {
    /// Build a draft from submitted values.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Run every edit rule and fold violations into a report.
    pub fn report(&self) -> ValidationReport {
        EDIT_RULES
            .iter()
            .filter(|rule| (rule.violated)(self))
            .fold(ValidationReport::default(), |report, rule| {
                report.with_field_error(rule.field, rule.message)
            })
    }

    /// Validate the draft, yielding a [`NoteEdit`] or the failing report.
    ///
    /// # Examples
    /// ```
    /// use notes_backend::domain::NoteDraft;
    ///
    /// let edit = NoteDraft::new("Valid Title", "Valid content")
    ///     .validate()
    ///     .expect("draft is within bounds");
    /// assert_eq!(edit.title(), "Valid Title");
    ///
    /// let report = NoteDraft::new("", "hello").validate().expect_err("empty title");
    /// assert_eq!(report.field_errors.title, ["Title is required"]);
    /// ```
    pub fn validate(self) -> Result<NoteEdit, ValidationReport> {
        let report = self.report();
        if report.has_errors() {
            return Err(report);
        }
        Ok(NoteEdit::new(self.title, self.content))
    }
}
