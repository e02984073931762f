use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::domain::{DomainError, DomainResult, Repository, User, UserId};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        username: model.username,
        email: model.email,
        quote: model.quote,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl Repository<User, UserId> for SeaOrmUserRepository {
    async fn save(&self, entity: User) -> DomainResult<User> {
        if entity.id != 0 {
            return Err(DomainError::Conflict(format!(
                "user already has id {}",
                entity.id
            )));
        }

        let new_user = user::ActiveModel {
            name: Set(entity.name),
            username: Set(entity.username),
            email: Set(entity.email),
            // Placeholder column, always NULL regardless of the input.
            quote: Set(None),
            ..Default::default()
        };

        let inserted = new_user.insert(&self.db).await.map_err(db_err)?;
        Ok(user_model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find().count(&self.db).await.map_err(db_err)
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

        // An opaque closure cannot be pushed into SQL: materialize the rows
        // in insertion order (ascending id) and filter here.
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models
            .into_iter()
            .map(user_model_to_domain)
            .filter(|u| predicate(u))
            .skip(offset as usize)
            .take(size as usize)
            .collect())
    }
}
