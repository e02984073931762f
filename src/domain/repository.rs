//! Generic repository contract.
//!
//! One trait, parameterized over the entity and its identifier type.
//! Backends (SeaORM, in-memory) implement it; services hold it behind
//! `Arc<dyn Repository<E, Id>>`.

use async_trait::async_trait;

use crate::domain::error::DomainResult;

/// Storage contract for an entity type `E` keyed by `Id`.
///
/// Scan semantics: `find_all` enumerates persisted records in insertion
/// order, keeps those the predicate accepts, and returns the 0-indexed
/// window `[page * size, page * size + size)` of that filtered sequence.
/// Predicates must be pure; a backend may evaluate them more than once per
/// record.
#[async_trait]
pub trait Repository<E, Id>: Send + Sync
where
    E: Send + Sync + 'static,
    Id: Send + 'static,
{
    /// Persist a new entity and return it with its assigned identifier.
    ///
    /// The incoming entity must not carry an identifier yet; id assignment
    /// is atomic with respect to concurrent saves, so two callers never
    /// receive the same fresh id.
    async fn save(&self, entity: E) -> DomainResult<E>;

    /// Point lookup. A missing id is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: Id) -> DomainResult<Option<E>>;

    /// Number of persisted records at call time.
    async fn count(&self) -> DomainResult<u64>;

    /// Filtered, paginated scan in insertion order.
    ///
    /// `size == 0` yields an empty page, as does a window starting past the
    /// end of the filtered sequence.
    async fn find_all(
        &self,
        predicate: &(dyn for<'e> Fn(&'e E) -> bool + Send + Sync),
        page: u64,
        size: u64,
    ) -> DomainResult<Vec<E>>;
}
