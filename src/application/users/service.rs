//! User service — application-layer orchestration
//!
//! All user-related business logic lives here. HTTP handlers are thin
//! wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    CreateUserDto, DomainResult, QuoteProvider, Repository, User, UserFilter, UserId,
};
use crate::shared::PageRequest;

/// Orchestrates user persistence and read-time quote enrichment.
///
/// Holds the repository and the quote provider behind their interfaces so
/// the concrete backend (SeaORM, in-memory) and transport (HTTP, static)
/// are wiring decisions, not service concerns.
pub struct UserService {
    repo: Arc<dyn Repository<User, UserId>>,
    quotes: Arc<dyn QuoteProvider>,
}

impl UserService {
    pub fn new(repo: Arc<dyn Repository<User, UserId>>, quotes: Arc<dyn QuoteProvider>) -> Self {
        Self { repo, quotes }
    }

    // ── Commands ────────────────────────────────────────────────

    /// Persist a new user and return it with its assigned id.
    ///
    /// The quote provider is not consulted on the write path; the stored
    /// quote stays at its placeholder default.
    pub async fn add_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let user = self.repo.save(dto.into_entity()).await?;
        info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    // ── Queries ─────────────────────────────────────────────────

    /// One page of users matching `filter`, each decorated with a fresh
    /// quote.
    ///
    /// Pagination arguments are validated before the repository is touched.
    /// Only records inside the requested window are enriched, so the
    /// provider cost scales with the page size, not the data set.
    pub async fn get_users(
        &self,
        page: i64,
        size: i64,
        filter: UserFilter,
    ) -> DomainResult<Vec<User>> {
        let window = PageRequest::new(page, size).validate()?;

        let predicate = |user: &User| filter.matches(user);
        let mut users = self
            .repo
            .find_all(&predicate, window.page, window.size)
            .await?;

        for user in &mut users {
            user.quote = Some(self.quotes.get_quote().await?);
        }

        debug!(
            page = window.page,
            size = window.size,
            returned = users.len(),
            "Listed users"
        );
        Ok(users)
    }

    /// Single user by id, decorated with a fresh quote when present.
    pub async fn get_user(&self, id: UserId) -> DomainResult<Option<User>> {
        let Some(mut user) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        user.quote = Some(self.quotes.get_quote().await?);
        Ok(Some(user))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{DomainError, DomainResult};
    use crate::infrastructure::storage::InMemoryUserRepository;

    /// Repository double that fails loudly if any method is reached.
    struct UnreachableRepo;

    #[async_trait]
    impl Repository<User, UserId> for UnreachableRepo {
        async fn save(&self, _entity: User) -> DomainResult<User> {
            Err(DomainError::Storage("repository must not be touched".into()))
        }

        async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
            Err(DomainError::Storage("repository must not be touched".into()))
        }

        async fn count(&self) -> DomainResult<u64> {
            Err(DomainError::Storage("repository must not be touched".into()))
        }

        async fn find_all(
            &self,
            _predicate: &(dyn for<'u> Fn(&'u User) -> bool + Send + Sync),
            _page: u64,
            _size: u64,
        ) -> DomainResult<Vec<User>> {
            Err(DomainError::Storage("repository must not be touched".into()))
        }
    }

    /// Provider double that counts calls and answers with a fixed quote.
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QuoteProvider for CountingProvider {
        async fn get_quote(&self) -> DomainResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("I'm a quote".to_string())
        }
    }

    /// Provider double that always fails.
    struct FailingProvider;

    #[async_trait]
    impl QuoteProvider for FailingProvider {
        async fn get_quote(&self) -> DomainResult<String> {
            Err(DomainError::QuoteProvider("provider down".into()))
        }
    }

    fn dto(name: &str, username: &str) -> CreateUserDto {
        CreateUserDto {
            name: name.to_string(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
        }
    }

    fn service_with_memory_repo() -> (UserService, Arc<CountingProvider>) {
        let provider = Arc::new(CountingProvider::new());
        let service = UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            provider.clone(),
        );
        (service, provider)
    }

    async fn seed_nine(service: &UserService) {
        for (name, username) in [
            ("James", "james"),
            ("Mary", "mary"),
            ("Robert", "robert"),
            ("John", "john"),
            ("Jennifer", "jennifer"),
            ("Michael", "michael"),
            ("William", "william"),
            ("David", "david"),
            ("Karen", "karen"),
        ] {
            service.add_user(dto(name, username)).await.unwrap();
        }
    }

    #[tokio::test]
    async fn negative_page_fails_before_repository() {
        let service = UserService::new(Arc::new(UnreachableRepo), Arc::new(FailingProvider));
        let err = service
            .get_users(-1, 0, UserFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn negative_size_fails_before_repository() {
        let service = UserService::new(Arc::new(UnreachableRepo), Arc::new(FailingProvider));
        let err = service
            .get_users(0, -1, UserFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn add_user_does_not_call_provider() {
        let (service, provider) = service_with_memory_repo();
        let user = service.add_user(dto("Mary", "mary")).await.unwrap();
        assert!(user.id > 0);
        assert!(user.quote.is_none());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn every_listed_user_carries_a_fresh_quote() {
        let (service, provider) = service_with_memory_repo();
        seed_nine(&service).await;

        let users = service
            .get_users(0, 9, UserFilter::default())
            .await
            .unwrap();
        assert_eq!(users.len(), 9);
        for user in &users {
            assert_eq!(user.quote.as_deref(), Some("I'm a quote"));
        }
        // One provider call per record in the page.
        assert_eq!(provider.calls.load(Ordering::SeqCst), 9);
    }

    #[tokio::test]
    async fn prefix_filter_pages_in_insertion_order() {
        let (service, _) = service_with_memory_repo();
        seed_nine(&service).await;

        let filter = UserFilter {
            name: Some("J".to_string()),
            username: Some("j".to_string()),
        };

        let first = service.get_users(0, 2, filter.clone()).await.unwrap();
        let names: Vec<&str> = first.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["James", "John"]);

        let second = service.get_users(1, 2, filter.clone()).await.unwrap();
        let names: Vec<&str> = second.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Jennifer"]);

        let third = service.get_users(2, 2, filter).await.unwrap();
        assert!(third.is_empty());
    }

    #[tokio::test]
    async fn enrichment_is_limited_to_the_requested_page() {
        let (service, provider) = service_with_memory_repo();
        seed_nine(&service).await;

        let users = service
            .get_users(1, 3, UserFilter::default())
            .await
            .unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn provider_failure_propagates_unmasked() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo, Arc::new(FailingProvider));
        service.add_user(dto("Mary", "mary")).await.unwrap();

        let err = service
            .get_users(0, 1, UserFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::QuoteProvider(_)));
    }

    #[tokio::test]
    async fn single_get_enriches_on_every_read() {
        let (service, provider) = service_with_memory_repo();
        let created = service.add_user(dto("Mary", "mary")).await.unwrap();

        let first = service.get_user(created.id).await.unwrap().unwrap();
        assert_eq!(first.quote.as_deref(), Some("I'm a quote"));

        let second = service.get_user(created.id).await.unwrap().unwrap();
        assert_eq!(second.quote.as_deref(), Some("I'm a quote"));

        // Two reads, two provider calls: the quote is recomputed, not reused.
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn single_get_of_missing_id_is_none() {
        let (service, provider) = service_with_memory_repo();
        let result = service.get_user(424242).await.unwrap();
        assert!(result.is_none());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }
}
