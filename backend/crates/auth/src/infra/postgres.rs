//! PostgreSQL User Store

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::{Credentials, User};
use crate::domain::repository::{ExternalAccount, UserRepository};
use crate::domain::value_object::{
    google_id::GoogleId, user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

const USER_COLUMNS: &str = r#"
    user_id,
    user_name,
    user_name_canonical,
    password_hash,
    google_id,
    secret,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(
        &self,
        condition: &str,
        value: &str,
    ) -> AuthResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {condition} = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }
}

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                user_name,
                user_name_canonical,
                password_hash,
                google_id,
                secret,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.user_name().map(UserName::original))
        .bind(user.user_name().map(UserName::canonical))
        .bind(user.credentials.password().map(UserPassword::as_phc_string))
        .bind(user.google_id().map(GoogleId::as_str))
        .bind(user.secret.as_deref())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if is_unique_violation(&*db_err) => {
                Err(AuthError::UserNameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        self.fetch_one_where("user_name_canonical", user_name.canonical())
            .await
    }

    async fn find_or_create_by_google_id(
        &self,
        google_id: &GoogleId,
    ) -> AuthResult<ExternalAccount> {
        let candidate = User::external(google_id.clone());

        // The no-op update makes RETURNING yield the existing row on conflict;
        // xmax is 0 only for a row this statement inserted
        let sql = format!(
            r#"
            INSERT INTO users (user_id, google_id, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            ON CONFLICT (google_id) DO UPDATE SET google_id = EXCLUDED.google_id
            RETURNING {USER_COLUMNS}, (xmax = 0) AS inserted
            "#
        );
        let row = sqlx::query_as::<_, UpsertRow>(&sql)
            .bind(candidate.user_id.as_uuid())
            .bind(google_id.as_str())
            .bind(candidate.created_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(ExternalAccount {
            user: row.user.into_user()?,
            created: row.inserted,
        })
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_name_canonical = $1)",
        )
        .bind(user_name.canonical())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                secret = $2,
                updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.secret.as_deref())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    user_name: Option<String>,
    user_name_canonical: Option<String>,
    password_hash: Option<String>,
    google_id: Option<String>,
    secret: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct UpsertRow {
    #[sqlx(flatten)]
    user: UserRow,
    inserted: bool,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let local = match (self.user_name, self.user_name_canonical, self.password_hash) {
            (Some(original), Some(canonical), Some(hash)) => {
                let password = UserPassword::from_phc_string(hash)
                    .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {e}")))?;
                Some((UserName::from_stored(original, canonical), password))
            }
            _ => None,
        };
        let google_id = self.google_id.and_then(GoogleId::new);

        let credentials = Credentials::from_parts(local, google_id).ok_or_else(|| {
            AuthError::Internal(format!("User {} has no credentials", self.user_id))
        })?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            credentials,
            secret: self.secret,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
