//! In-memory repository implementation
//!
//! Backs the same contract as the SeaORM repository; used for development
//! (`database.in_memory = true`) and as the fast backend in tests.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainError, DomainResult, Repository, User, UserId};

/// DashMap-backed user store.
///
/// Ids are assigned from an atomic counter, so ascending id order is
/// insertion order; scans sort on it to keep the ordering contract.
pub struct InMemoryUserRepository {
    users: DashMap<UserId, User>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<User, UserId> for InMemoryUserRepository {
    async fn save(&self, entity: User) -> DomainResult<User> {
        if entity.id != 0 {
            return Err(DomainError::Conflict(format!(
                "user already has id {}",
                entity.id
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut stored = entity;
        stored.id = id;
        // The quote column is a placeholder; nothing meaningful is stored.
        stored.quote = None;
        self.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.len() as u64)
    }

    async fn find_all(
        &self,
        predicate: &(dyn for<'u> Fn(&'u User) -> bool + Send + Sync),
        page: u64,
        size: u64,
    ) -> DomainResult<Vec<User>> {
        if size == 0 {
            return Ok(Vec::new());
        }
        let Some(offset) = page.checked_mul(size) else {
            return Ok(Vec::new());
        };

        let mut rows: Vec<User> = self.users.iter().map(|entry| entry.value().clone()).collect();
        rows.sort_by_key(|user| user.id);

        Ok(rows
            .into_iter()
            .filter(|user| predicate(user))
            .skip(offset as usize)
            .take(size as usize)
            .collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────
