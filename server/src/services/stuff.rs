//! Stuff service: validation and owner-scoped CRUD.
//!
//! DESIGN
//! ======
//! Every user-facing operation takes the owner email from the verified
//! session, never from the request body. A record owned by someone else is
//! reported as [`StuffError::NotFound`].

use serde::Deserialize;
use uuid::Uuid;

use crate::store::{Condition, Store, StoreError, Stuff, StuffFields};

pub const MAX_NAME_LEN: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum StuffError {
    #[error("name is required")]
    EmptyName,
    #[error("name is too long")]
    NameTooLong,
    #[error("quantity must not be negative")]
    NegativeQuantity,
    #[error("unknown condition: {0}")]
    UnknownCondition(String),
    #[error("stuff not found: {0}")]
    NotFound(Uuid),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Unvalidated form input for add/edit.
#[derive(Debug, Clone, Deserialize)]
pub struct StuffInput {
    pub name: String,
    pub quantity: i32,
    #[serde(default)]
    pub condition: Option<String>,
}

impl StuffInput {
    /// Validate and normalise into storable fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing validation rule.
    pub fn validate(&self) -> Result<StuffFields, StuffError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StuffError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(StuffError::NameTooLong);
        }
        if self.quantity < 0 {
            return Err(StuffError::NegativeQuantity);
        }
        let condition = match self.condition.as_deref().map(str::trim) {
            None | Some("") => Condition::default(),
            Some(raw) => Condition::parse(raw).ok_or_else(|| StuffError::UnknownCondition(raw.to_owned()))?,
        };
        Ok(StuffFields { name: name.to_owned(), quantity: self.quantity, condition })
    }
}

/// All records owned by `owner`.
///
/// # Errors
///
/// Returns a store error if the query fails.
pub async fn list_for_owner(store: &dyn Store, owner: &str) -> Result<Vec<Stuff>, StuffError> {
    Ok(store.list_stuff_by_owner(owner).await?)
}

/// Every record, for the admin view.
///
/// # Errors
///
/// Returns a store error if the query fails.
pub async fn list_all(store: &dyn Store) -> Result<Vec<Stuff>, StuffError> {
    Ok(store.list_all_stuff().await?)
}

/// # Errors
///
/// Returns [`StuffError::NotFound`] if no record with `id` belongs to `owner`.
pub async fn get(store: &dyn Store, owner: &str, id: Uuid) -> Result<Stuff, StuffError> {
    store
        .find_stuff(id, owner)
        .await?
        .ok_or(StuffError::NotFound(id))
}

/// # Errors
///
/// Returns a validation or store error.
pub async fn create(store: &dyn Store, owner: &str, input: &StuffInput) -> Result<Stuff, StuffError> {
    let fields = input.validate()?;
    let stuff = store.insert_stuff(owner, &fields).await?;
    tracing::info!(stuff_id = %stuff.id, "stuff created");
    Ok(stuff)
}

/// # Errors
///
/// Returns a validation error, [`StuffError::NotFound`], or a store error.
pub async fn update(store: &dyn Store, owner: &str, id: Uuid, input: &StuffInput) -> Result<Stuff, StuffError> {
    let fields = input.validate()?;
    store
        .update_stuff(id, owner, &fields)
        .await?
        .ok_or(StuffError::NotFound(id))
}

/// # Errors
///
/// Returns [`StuffError::NotFound`] or a store error.
pub async fn delete(store: &dyn Store, owner: &str, id: Uuid) -> Result<(), StuffError> {
    if !store.delete_stuff(id, owner).await? {
        return Err(StuffError::NotFound(id));
    }
    tracing::info!(stuff_id = %id, "stuff deleted");
    Ok(())
}

#[cfg(test)]
#[path = "stuff_test.rs"]
mod tests;
