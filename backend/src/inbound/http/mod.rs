//! HTTP inbound adapter exposing the note editor and profile endpoints.

pub mod error;
pub mod health;
pub mod notes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
