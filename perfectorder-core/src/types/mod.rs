//! Core type definitions.

mod credential;
mod sync;

pub use credential::{CreateCredentialRequest, Credential};
pub use sync::{SyncFailure, SyncReport};
