//! Credential storage abstraction.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Credential;

/// Credential storage trait.
///
/// Implementations own durability and encryption-at-rest; the core only
/// requires these four operations. Ids are UUID strings assigned by the
/// core on create.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// List all credentials belonging to a user.
    async fn list_for_user(&self, user_id: &str) -> CoreResult<Vec<Credential>>;

    /// Find a credential by id.
    async fn find_by_id(&self, credential_id: &str) -> CoreResult<Option<Credential>>;

    /// Insert or overwrite a credential.
    async fn save(&self, credential: &Credential) -> CoreResult<()>;

    /// Remove a credential. Removing an unknown id is not an error.
    async fn remove(&self, credential_id: &str) -> CoreResult<()>;
}
