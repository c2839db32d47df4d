//! SeaORM implementation of CopyRepository
//!
//! There is no update method on purpose: `available` is derived state
//! owned by the circulation service.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{CopyRepository, CreateCopyInput, DomainError};
use crate::models::copy::{self, Entity as Copy};

pub struct SeaOrmCopyRepository {
    db: DatabaseConnection,
}

impl SeaOrmCopyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CopyRepository for SeaOrmCopyRepository {
    async fn find_all(&self) -> Result<Vec<copy::Model>, DomainError> {
        let copies = Copy::find()
            .order_by_asc(copy::Column::Barcode)
            .all(&self.db)
            .await?;
        Ok(copies)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<copy::Model>, DomainError> {
        let found = Copy::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<copy::Model>, DomainError> {
        let found = Copy::find()
            .filter(copy::Column::Barcode.eq(barcode))
            .one(&self.db)
            .await?;
        Ok(found)
    }

    async fn find_by_book(&self, book_id: i32) -> Result<Vec<copy::Model>, DomainError> {
        let copies = Copy::find()
            .filter(copy::Column::BookId.eq(book_id))
            .order_by_asc(copy::Column::Barcode)
            .all(&self.db)
            .await?;
        Ok(copies)
    }

    async fn find_by_library(&self, library_id: i32) -> Result<Vec<copy::Model>, DomainError> {
        let copies = Copy::find()
            .filter(copy::Column::LibraryId.eq(library_id))
            .order_by_asc(copy::Column::Barcode)
            .all(&self.db)
            .await?;
        Ok(copies)
    }

    async fn create(&self, input: CreateCopyInput) -> Result<copy::Model, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let new_copy = copy::ActiveModel {
            barcode: Set(input.barcode),
            book_id: Set(input.book_id),
            library_id: Set(input.library_id),
            available: Set(true),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = new_copy.insert(&self.db).await?;
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = Copy::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
