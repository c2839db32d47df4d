//! SeaORM implementation of LibraryRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{CreateLibraryInput, DomainError, LibraryRepository};
use crate::models::library::{self, Entity as Library};

pub struct SeaOrmLibraryRepository {
    db: DatabaseConnection,
}

impl SeaOrmLibraryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LibraryRepository for SeaOrmLibraryRepository {
    async fn find_all(&self) -> Result<Vec<library::Model>, DomainError> {
        let libraries = Library::find()
            .order_by_asc(library::Column::Name)
            .all(&self.db)
            .await?;
        Ok(libraries)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<library::Model>, DomainError> {
        let found = Library::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    async fn create(&self, input: CreateLibraryInput) -> Result<library::Model, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let new_library = library::ActiveModel {
            name: Set(input.name),
            city: Set(input.city),
            address: Set(input.address),
            phone: Set(input.phone),
            email: Set(input.email),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = new_library.insert(&self.db).await?;
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        // Copies and their loans go with the library via ON DELETE
        // CASCADE in the schema.
        let result = Library::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
