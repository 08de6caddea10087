//! Note data model.
//!
//! Notes are created and deleted outside this service. The editor only reads
//! a note's current `title`/`content` and replaces them with a validated
//! [`NoteEdit`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Username;

/// Validation errors returned by [`NoteId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteIdValidationError {
    /// The identifier was absent or blank.
    #[error("note id must not be empty")]
    Empty,
}

/// Opaque, stable note identifier.
///
/// The service never invents identifiers; it only carries the ones supplied
/// by clients and the store. Lookups use plain equality.
///
/// # Examples
/// ```
/// use notes_backend::domain::NoteId;
///
/// let id = NoteId::new("abc").expect("valid id");
/// assert_eq!(id.as_ref(), "abc");
/// assert!(NoteId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteId(String);

impl NoteId {
    /// Validate and construct a [`NoteId`].
    pub fn new(id: impl Into<String>) -> Result<Self, NoteIdValidationError> {
        Self::from_owned(id.into())
    }

    fn from_owned(id: String) -> Result<Self, NoteIdValidationError> {
        if id.trim().is_empty() {
            return Err(NoteIdValidationError::Empty);
        }
        Ok(Self(id))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<NoteId> for String {
    fn from(value: NoteId) -> Self {
        value.0
    }
}

impl TryFrom<String> for NoteId {
    type Error = NoteIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A persisted note as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable identifier.
    pub id: NoteId,
    /// Username of the owning user.
    pub owner: Username,
    /// Current title.
    pub title: String,
    /// Current body text.
    pub content: String,
}

impl Note {
    /// Assemble a note from its parts.
    pub fn new(
        id: NoteId,
        owner: Username,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Narrow the note to the fields the edit view needs.
    pub fn to_editor_view(&self) -> NoteEditorView {
        NoteEditorView {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    /// Path the client is sent to after a successful edit.
    ///
    /// # Examples
    /// ```
    /// use notes_backend::domain::{Note, NoteId, Username};
    ///
    /// let note = Note::new(
    ///     NoteId::new("abc").expect("id"),
    ///     Username::new("kim").expect("username"),
    ///     "Title",
    ///     "Body",
    /// );
    /// assert_eq!(note.canonical_path(), "/users/kim/notes/abc");
    /// ```
    pub fn canonical_path(&self) -> String {
        format!("/users/{}/notes/{}", self.owner, self.id)
    }
}

/// The slice of a note returned to the edit view.
///
/// Deliberately excludes the identifier, owner and any persistence-only
/// columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct NoteEditorView {
    /// Current title.
    pub title: String,
    /// Current body text.
    pub content: String,
}

/// Title and content that passed every edit rule.
///
/// Only [`crate::domain::NoteDraft::validate`] produces values of this type,
/// so holding one proves the rules ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEdit {
    title: String,
    content: String,
}

impl NoteEdit {
    pub(crate) fn new(title: String, content: String) -> Self {
        Self { title, content }
    }

    /// Validated title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Validated body text.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Apply the edit to `note`, keeping its identity and owner.
    pub fn apply_to(&self, note: &mut Note) {
        note.title.clone_from(&self.title);
        note.content.clone_from(&self.content);
    }
}
