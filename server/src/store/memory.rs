//! In-memory [`Store`] for tests.
//!
//! Mirrors the owner-scoping rules of the SQL queries and counts every stuff
//! read so tests can assert when the data store was (or was not) touched.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use time::OffsetDateTime;
use uuid::Uuid;

use super::{Role, Store, StoreError, Stuff, StuffFields, UserRow};

#[derive(Default)]
struct Tables {
    users: Vec<UserRow>,
    sessions: HashMap<String, (Uuid, OffsetDateTime)>,
    stuff: Vec<Stuff>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    stuff_reads: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stuff read queries executed so far.
    pub fn stuff_reads(&self) -> usize {
        self.stuff_reads.load(Ordering::SeqCst)
    }

    /// Insert a stuff row directly, bypassing validation.
    pub fn seed_stuff(&self, owner: &str, name: &str, quantity: i32) -> Stuff {
        let stuff = Stuff {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            condition: super::Condition::Good,
            owner: owner.into(),
        };
        self.lock().stuff.push(stuff.clone());
        stuff
    }

    /// Number of session rows held, expired or not.
    pub fn session_count(&self) -> usize {
        self.lock().sessions.len()
    }

    /// Force-expire every session belonging to `user_id`.
    pub fn expire_sessions(&self, user_id: Uuid) {
        let past = OffsetDateTime::now_utc() - time::Duration::hours(1);
        for (owner, expires_at) in self.lock().sessions.values_mut() {
            if *owner == user_id {
                *expires_at = past;
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("memory store lock poisoned")
    }

    fn count_read(&self) {
        self.stuff_reads.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, email: &str, password_hash: &str, role: Role) -> Result<UserRow, StoreError> {
        let mut tables = self.lock();
        if tables.users.iter().any(|u| u.email == email) {
            return Err(StoreError::Conflict("users.email"));
        }
        let user = UserRow { id: Uuid::new_v4(), email: email.into(), password_hash: password_hash.into(), role };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn upsert_user(&self, email: &str, password_hash: &str, role: Role) -> Result<UserRow, StoreError> {
        let mut tables = self.lock();
        if let Some(existing) = tables.users.iter_mut().find(|u| u.email == email) {
            existing.password_hash = password_hash.into();
            existing.role = role;
            return Ok(existing.clone());
        }
        let user = UserRow { id: Uuid::new_v4(), email: email.into(), password_hash: password_hash.into(), role };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, StoreError> {
        Ok(self.lock().users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_password_hash(&self, user_id: Uuid, password_hash: &str) -> Result<(), StoreError> {
        if let Some(user) = self.lock().users.iter_mut().find(|u| u.id == user_id) {
            user.password_hash = password_hash.into();
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserRow>, StoreError> {
        let mut users = self.lock().users.clone();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    async fn insert_session(&self, token_hash: &str, user_id: Uuid, ttl_hours: u32) -> Result<(), StoreError> {
        let expires_at = OffsetDateTime::now_utc() + time::Duration::hours(i64::from(ttl_hours));
        self.lock()
            .sessions
            .insert(token_hash.into(), (user_id, expires_at));
        Ok(())
    }

    async fn find_session_user(&self, token_hash: &str) -> Result<Option<UserRow>, StoreError> {
        let tables = self.lock();
        let Some((user_id, expires_at)) = tables.sessions.get(token_hash) else {
            return Ok(None);
        };
        if *expires_at <= OffsetDateTime::now_utc() {
            return Ok(None);
        }
        Ok(tables.users.iter().find(|u| u.id == *user_id).cloned())
    }

    async fn delete_session(&self, token_hash: &str) -> Result<(), StoreError> {
        self.lock().sessions.remove(token_hash);
        Ok(())
    }

    async fn delete_user_sessions_except(&self, user_id: Uuid, keep_token_hash: &str) -> Result<u64, StoreError> {
        let mut tables = self.lock();
        let before = tables.sessions.len();
        tables
            .sessions
            .retain(|hash, (owner, _)| *owner != user_id || hash == keep_token_hash);
        Ok((before - tables.sessions.len()) as u64)
    }

    async fn delete_expired_sessions(&self) -> Result<u64, StoreError> {
        let now = OffsetDateTime::now_utc();
        let mut tables = self.lock();
        let before = tables.sessions.len();
        tables.sessions.retain(|_, (_, expires_at)| *expires_at > now);
        Ok((before - tables.sessions.len()) as u64)
    }

    async fn list_stuff_by_owner(&self, owner: &str) -> Result<Vec<Stuff>, StoreError> {
        self.count_read();
        Ok(self
            .lock()
            .stuff
            .iter()
            .filter(|s| s.owner == owner)
            .cloned()
            .collect())
    }

    async fn list_all_stuff(&self) -> Result<Vec<Stuff>, StoreError> {
        self.count_read();
        Ok(self.lock().stuff.clone())
    }

    async fn find_stuff(&self, id: Uuid, owner: &str) -> Result<Option<Stuff>, StoreError> {
        self.count_read();
        Ok(self
            .lock()
            .stuff
            .iter()
            .find(|s| s.id == id && s.owner == owner)
            .cloned())
    }

    async fn insert_stuff(&self, owner: &str, fields: &StuffFields) -> Result<Stuff, StoreError> {
        let stuff = Stuff {
            id: Uuid::new_v4(),
            name: fields.name.clone(),
            quantity: fields.quantity,
            condition: fields.condition,
            owner: owner.into(),
        };
        self.lock().stuff.push(stuff.clone());
        Ok(stuff)
    }

    async fn update_stuff(&self, id: Uuid, owner: &str, fields: &StuffFields) -> Result<Option<Stuff>, StoreError> {
        let mut tables = self.lock();
        let Some(stuff) = tables
            .stuff
            .iter_mut()
            .find(|s| s.id == id && s.owner == owner)
        else {
            return Ok(None);
        };
        stuff.name.clone_from(&fields.name);
        stuff.quantity = fields.quantity;
        stuff.condition = fields.condition;
        Ok(Some(stuff.clone()))
    }

    async fn delete_stuff(&self, id: Uuid, owner: &str) -> Result<bool, StoreError> {
        let mut tables = self.lock();
        let before = tables.stuff.len();
        tables.stuff.retain(|s| !(s.id == id && s.owner == owner));
        Ok(tables.stuff.len() != before)
    }
}
