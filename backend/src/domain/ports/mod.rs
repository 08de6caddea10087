//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`NoteEditorQuery`, `NoteEditorCommand`,
//! `UserProfileQuery`) are what inbound adapters call. Driven ports
//! (`NoteRepository`, `UserRepository`) are what persistence adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod note_editor_command;
mod note_editor_query;
mod note_repository;
mod user_profile_query;
mod user_repository;

#[cfg(test)]
pub use note_editor_command::MockNoteEditorCommand;
pub use note_editor_command::{MutationOutcome, NoteEditorCommand, SubmitNoteEditRequest};
#[cfg(test)]
pub use note_editor_query::MockNoteEditorQuery;
pub use note_editor_query::NoteEditorQuery;
#[cfg(test)]
pub use note_repository::MockNoteRepository;
pub use note_repository::{NoteRepository, NoteRepositoryError};
#[cfg(test)]
pub use user_profile_query::MockUserProfileQuery;
pub use user_profile_query::UserProfileQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
