//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{BookRepository, CreateBookInput, DomainError, UpdateBookInput};
use crate::models::book::{self, Entity as Book};
use crate::models::book_authors::{self, Entity as BookAuthors};

pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self) -> Result<Vec<book::Model>, DomainError> {
        let books = Book::find()
            .order_by_asc(book::Column::Title)
            .all(&self.db)
            .await?;
        Ok(books)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<book::Model>, DomainError> {
        let found = Book::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<book::Model>, DomainError> {
        let found = Book::find()
            .filter(book::Column::Isbn.eq(isbn))
            .one(&self.db)
            .await?;
        Ok(found)
    }

    async fn create(&self, input: CreateBookInput) -> Result<book::Model, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let new_book = book::ActiveModel {
            isbn: Set(input.isbn),
            title: Set(input.title),
            publisher: Set(input.publisher),
            publication_year: Set(input.publication_year),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = new_book.insert(&self.db).await?;
        Ok(result)
    }

    async fn update(&self, id: i32, input: UpdateBookInput) -> Result<book::Model, DomainError> {
        let existing = Book::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: book::ActiveModel = existing.into();
        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(publisher) = input.publisher {
            active.publisher = Set(publisher);
        }
        if let Some(year) = input.publication_year {
            active.publication_year = Set(year);
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let result = active.update(&self.db).await?;
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = Book::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn attach_author(&self, book_id: i32, author_id: i32) -> Result<(), DomainError> {
        let link = book_authors::ActiveModel {
            book_id: Set(book_id),
            author_id: Set(author_id),
        };

        // The junction row is the single authoritative side of the
        // relation; inserting it makes the pairing visible from both
        // the book and the author at once.
        link.insert(&self.db).await?;
        Ok(())
    }

    async fn detach_author(&self, book_id: i32, author_id: i32) -> Result<(), DomainError> {
        let result = BookAuthors::delete_many()
            .filter(book_authors::Column::BookId.eq(book_id))
            .filter(book_authors::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
