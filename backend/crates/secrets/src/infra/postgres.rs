//! PostgreSQL Secret Repository
//!
//! Secrets live in the `secret` column of the `users` table.

use chrono::Utc;
use sqlx::PgPool;

use crate::domain::repository::SecretRepository;
use crate::domain::value_object::Secret;
use crate::error::{SecretError, SecretResult};
use kernel::id::UserId;

#[derive(Clone)]
pub struct PgSecretRepository {
    pool: PgPool,
}

impl PgSecretRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SecretRepository for PgSecretRepository {
    async fn list_secrets(&self) -> SecretResult<Vec<String>> {
        let secrets = sqlx::query_scalar::<_, String>(
            r#"
            SELECT secret
            FROM users
            WHERE secret IS NOT NULL AND secret <> ''
            ORDER BY created_at, user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(secrets)
    }

    async fn save_secret(&self, user_id: &UserId, secret: &Secret) -> SecretResult<()> {
        let updated = sqlx::query("UPDATE users SET secret = $2, updated_at = $3 WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .bind(secret.as_str())
            .bind(Utc::now())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if updated == 0 {
            return Err(SecretError::UserNotFound);
        }
        Ok(())
    }
}
