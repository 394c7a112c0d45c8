//! PostgreSQL user store

use super::deadline::run_with_deadline;
use super::traits::UserStore;
use crate::{models::User, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::time::Duration;

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        run_with_deadline("list_users", self.query_timeout, async {
            let rows = sqlx::query("SELECT id, email FROM users ORDER BY email")
                .fetch_all(&self.pool)
                .await?;

            let mut users = Vec::with_capacity(rows.len());
            for row in rows {
                users.push(User {
                    id: row.try_get("id")?,
                    email: row.try_get("email")?,
                });
            }
            Ok(users)
        })
        .await
    }

    async fn ensure_user(&self, user: &User) -> Result<()> {
        run_with_deadline("ensure_user", self.query_timeout, async {
            sqlx::query("INSERT INTO users (id, email) VALUES ($1, $2) ON CONFLICT DO NOTHING")
                .bind(user.id)
                .bind(&user.email)
                .execute(&self.pool)
                .await?;
            Ok(())
        })
        .await
    }
}
