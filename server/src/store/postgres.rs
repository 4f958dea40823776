//! `PostgreSQL` implementation of [`Store`].

use sqlx::PgPool;
use uuid::Uuid;

use super::{Condition, Role, Store, StoreError, Stuff, StuffFields, UserRow};

type UserTuple = (Uuid, String, String, String);
type StuffTuple = (Uuid, String, i32, String, String);

/// SQLx-backed store over the shared connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_tuple((id, email, password_hash, role): UserTuple) -> Result<UserRow, StoreError> {
    let role = Role::parse(&role).ok_or_else(|| StoreError::Decode(format!("unknown role {role:?}")))?;
    Ok(UserRow { id, email, password_hash, role })
}

fn stuff_from_tuple((id, name, quantity, condition, owner): StuffTuple) -> Result<Stuff, StoreError> {
    let condition =
        Condition::parse(&condition).ok_or_else(|| StoreError::Decode(format!("unknown condition {condition:?}")))?;
    Ok(Stuff { id, name, quantity, condition, owner })
}

fn map_unique(err: sqlx::Error, what: &'static str) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict(what),
        _ => StoreError::Database(err),
    }
}

#[async_trait::async_trait]
impl Store for PgStore {
    async fn insert_user(&self, email: &str, password_hash: &str, role: Role) -> Result<UserRow, StoreError> {
        let row = sqlx::query_as::<_, UserTuple>(
            "INSERT INTO users (email, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING id, email, password_hash, role",
        )
        .bind(email)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique(e, "users.email"))?;
        user_from_tuple(row)
    }

    async fn upsert_user(&self, email: &str, password_hash: &str, role: Role) -> Result<UserRow, StoreError> {
        let row = sqlx::query_as::<_, UserTuple>(
            "INSERT INTO users (email, password_hash, role)
             VALUES ($1, $2, $3)
             ON CONFLICT (email) DO UPDATE SET password_hash = EXCLUDED.password_hash, role = EXCLUDED.role
             RETURNING id, email, password_hash, role",
        )
        .bind(email)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(&self.pool)
        .await?;
        user_from_tuple(row)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, StoreError> {
        let row = sqlx::query_as::<_, UserTuple>("SELECT id, email, password_hash, role FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.map(user_from_tuple).transpose()
    }

    async fn update_password_hash(&self, user_id: Uuid, password_hash: &str) -> Result<(), StoreError> {
        sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(user_id)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserRow>, StoreError> {
        let rows = sqlx::query_as::<_, UserTuple>("SELECT id, email, password_hash, role FROM users ORDER BY email")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(user_from_tuple).collect()
    }

    async fn insert_session(&self, token_hash: &str, user_id: Uuid, ttl_hours: u32) -> Result<(), StoreError> {
        let hours = i32::try_from(ttl_hours).map_err(|_| StoreError::Decode(format!("session ttl {ttl_hours}h out of range")))?;
        sqlx::query(
            "INSERT INTO sessions (token_hash, user_id, expires_at)
             VALUES ($1, $2, now() + make_interval(hours => $3))",
        )
        .bind(token_hash)
        .bind(user_id)
        .bind(hours)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_session_user(&self, token_hash: &str) -> Result<Option<UserRow>, StoreError> {
        let row = sqlx::query_as::<_, UserTuple>(
            "SELECT u.id, u.email, u.password_hash, u.role
             FROM sessions s
             JOIN users u ON u.id = s.user_id
             WHERE s.token_hash = $1 AND s.expires_at > now()",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;
        row.map(user_from_tuple).transpose()
    }

    async fn delete_session(&self, token_hash: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_user_sessions_except(&self, user_id: Uuid, keep_token_hash: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = $1 AND token_hash <> $2")
            .bind(user_id)
            .bind(keep_token_hash)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_expired_sessions(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_stuff_by_owner(&self, owner: &str) -> Result<Vec<Stuff>, StoreError> {
        let rows = sqlx::query_as::<_, StuffTuple>(
            "SELECT id, name, quantity, condition, owner
             FROM stuff
             WHERE owner = $1
             ORDER BY created_at, id",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(stuff_from_tuple).collect()
    }

    async fn list_all_stuff(&self) -> Result<Vec<Stuff>, StoreError> {
        let rows = sqlx::query_as::<_, StuffTuple>(
            "SELECT id, name, quantity, condition, owner FROM stuff ORDER BY owner, created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(stuff_from_tuple).collect()
    }

    async fn find_stuff(&self, id: Uuid, owner: &str) -> Result<Option<Stuff>, StoreError> {
        let row = sqlx::query_as::<_, StuffTuple>(
            "SELECT id, name, quantity, condition, owner FROM stuff WHERE id = $1 AND owner = $2",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;
        row.map(stuff_from_tuple).transpose()
    }

    async fn insert_stuff(&self, owner: &str, fields: &StuffFields) -> Result<Stuff, StoreError> {
        let row = sqlx::query_as::<_, StuffTuple>(
            "INSERT INTO stuff (name, quantity, condition, owner)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, quantity, condition, owner",
        )
        .bind(&fields.name)
        .bind(fields.quantity)
        .bind(fields.condition.as_str())
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;
        stuff_from_tuple(row)
    }

    async fn update_stuff(&self, id: Uuid, owner: &str, fields: &StuffFields) -> Result<Option<Stuff>, StoreError> {
        let row = sqlx::query_as::<_, StuffTuple>(
            "UPDATE stuff SET name = $3, quantity = $4, condition = $5
             WHERE id = $1 AND owner = $2
             RETURNING id, name, quantity, condition, owner",
        )
        .bind(id)
        .bind(owner)
        .bind(&fields.name)
        .bind(fields.quantity)
        .bind(fields.condition.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.map(stuff_from_tuple).transpose()
    }

    async fn delete_stuff(&self, id: Uuid, owner: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM stuff WHERE id = $1 AND owner = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(all(test, feature = "live-db-tests"))]
#[path = "postgres_test.rs"]
mod tests;
