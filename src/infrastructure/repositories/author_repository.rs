//! SeaORM implementation of AuthorRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{AuthorRepository, DomainError};
use crate::models::author::{self, Entity as Author};

pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn find_all(&self) -> Result<Vec<author::Model>, DomainError> {
        let authors = Author::find()
            .order_by_asc(author::Column::Name)
            .all(&self.db)
            .await?;
        Ok(authors)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<author::Model>, DomainError> {
        let found = Author::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    async fn create(&self, name: String) -> Result<author::Model, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let new_author = author::ActiveModel {
            name: Set(name),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = new_author.insert(&self.db).await?;
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = Author::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
