use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::auth::repo_types::{NewUser, User};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: &NewUser) -> anyhow::Result<()>;
    async fn find_by_credentials(&self, email: &str, password: &str)
        -> anyhow::Result<Option<User>>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    /// Insert a row as-is. Runs outside a transaction, so it is committed on return.
    async fn insert(&self, user: &NewUser) -> anyhow::Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, password)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password)
        .execute(&self.db)
        .await?;
        debug!(rows = result.rows_affected(), "users insert");
        Ok(())
    }

    /// Find a user whose email and password both match exactly.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT username, email, password
            FROM users
            WHERE email = $1 AND password = $2
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}
