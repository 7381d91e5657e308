//! Secrets over the in-memory user store

use auth::MemoryUserRepository;
use auth::store::UserRepository;

use crate::domain::repository::SecretRepository;
use crate::domain::value_object::Secret;
use crate::error::{SecretError, SecretResult};
use kernel::id::UserId;

impl SecretRepository for MemoryUserRepository {
    async fn list_secrets(&self) -> SecretResult<Vec<String>> {
        Ok(self
            .all()
            .await
            .iter()
            .filter_map(|user| user.visible_secret().map(str::to_string))
            .collect())
    }

    async fn save_secret(&self, user_id: &UserId, secret: &Secret) -> SecretResult<()> {
        let mut user = self
            .find_by_id(user_id)
            .await?
            .ok_or(SecretError::UserNotFound)?;

        user.set_secret(secret.as_str());
        self.update(&user).await?;
        Ok(())
    }
}
