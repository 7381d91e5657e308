//! Submit Secret Use Case
//!
//! Replaces the caller's secret. Authentication is enforced by the router.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::SecretRepository;
use crate::domain::value_object::Secret;
use crate::error::SecretResult;

pub struct SubmitSecretInput {
    pub user_id: UserId,
    pub text: String,
}

pub struct SubmitSecretUseCase<R>
where
    R: SecretRepository,
{
    repo: Arc<R>,
}

impl<R> SubmitSecretUseCase<R>
where
    R: SecretRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SubmitSecretInput) -> SecretResult<()> {
        let secret = Secret::new(&input.text)?;

        self.repo.save_secret(&input.user_id, &secret).await?;

        tracing::info!(user_id = %input.user_id, "Secret submitted");
        Ok(())
    }
}
