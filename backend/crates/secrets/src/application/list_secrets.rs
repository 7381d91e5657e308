//! List Secrets Use Case
//!
//! Public and anonymous: only the text is returned, never who wrote it.

use std::sync::Arc;

use crate::domain::repository::SecretRepository;
use crate::error::SecretResult;

pub struct ListSecretsUseCase<R>
where
    R: SecretRepository,
{
    repo: Arc<R>,
}

impl<R> ListSecretsUseCase<R>
where
    R: SecretRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> SecretResult<Vec<String>> {
        self.repo.list_secrets().await
    }
}
