//! Repository Traits

use crate::domain::value_object::Secret;
use crate::error::SecretResult;
use kernel::id::UserId;

#[trait_variant::make(SecretRepository: Send)]
pub trait LocalSecretRepository {
    /// Every non-empty secret, oldest account first
    async fn list_secrets(&self) -> SecretResult<Vec<String>>;

    /// Overwrite the user's secret; `UserNotFound` if there is no such user
    async fn save_secret(&self, user_id: &UserId, secret: &Secret) -> SecretResult<()>;
}
