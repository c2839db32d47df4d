//! Repository trait definitions
//!
//! One strongly-typed trait per aggregate root. Implementations live in
//! the infrastructure layer. Loans deliberately have no repository: the
//! circulation service is their only writer, which keeps the derived
//! availability/active flags from being updated independently.

use async_trait::async_trait;

use super::DomainError;
use crate::models::{author, book, copy, library, person};

/// Input for creating a book
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateBookInput {
    pub isbn: String,
    pub title: String,
    pub publisher: Option<String>,
    pub publication_year: Option<i32>,
}

/// Input for updating a book. `Option<Option<T>>` distinguishes
/// "leave untouched" from "set to NULL".
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct UpdateBookInput {
    pub title: Option<String>,
    pub publisher: Option<Option<String>>,
    pub publication_year: Option<Option<i32>>,
}

/// Input for creating a library
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateLibraryInput {
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Input for creating a copy
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateCopyInput {
    pub barcode: String,
    pub book_id: i32,
    pub library_id: i32,
}

/// Input for creating a person
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreatePersonInput {
    pub national_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Input for updating a person. The national ID is immutable.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct UpdatePersonInput {
    pub name: Option<String>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
}

/// Repository trait for Author entity
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<author::Model>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<author::Model>, DomainError>;

    async fn create(&self, name: String) -> Result<author::Model, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<book::Model>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<book::Model>, DomainError>;

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<book::Model>, DomainError>;

    async fn create(&self, input: CreateBookInput) -> Result<book::Model, DomainError>;

    async fn update(&self, id: i32, input: UpdateBookInput) -> Result<book::Model, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Add an author to a book. The junction row is the single
    /// authoritative side; both directions observe it at once.
    async fn attach_author(&self, book_id: i32, author_id: i32) -> Result<(), DomainError>;

    /// Remove an author from a book.
    async fn detach_author(&self, book_id: i32, author_id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Library entity
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<library::Model>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<library::Model>, DomainError>;

    async fn create(&self, input: CreateLibraryInput) -> Result<library::Model, DomainError>;

    /// Deletes the library and, through schema cascades, its copies and
    /// their loans. Full history loss is intentional.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Copy entity
///
/// No general-purpose update: the `available` flag belongs to the
/// circulation service.
#[async_trait]
pub trait CopyRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<copy::Model>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<copy::Model>, DomainError>;

    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<copy::Model>, DomainError>;

    async fn find_by_book(&self, book_id: i32) -> Result<Vec<copy::Model>, DomainError>;

    async fn find_by_library(&self, library_id: i32) -> Result<Vec<copy::Model>, DomainError>;

    async fn create(&self, input: CreateCopyInput) -> Result<copy::Model, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Person entity
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<person::Model>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<person::Model>, DomainError>;

    async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<person::Model>, DomainError>;

    async fn create(&self, input: CreatePersonInput) -> Result<person::Model, DomainError>;

    async fn update(
        &self,
        id: i32,
        input: UpdatePersonInput,
    ) -> Result<person::Model, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
