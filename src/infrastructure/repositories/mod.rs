//! Repository implementations using SeaORM

pub mod author_repository;
pub mod book_repository;
pub mod copy_repository;
pub mod library_repository;
pub mod person_repository;

pub use author_repository::SeaOrmAuthorRepository;
pub use book_repository::SeaOrmBookRepository;
pub use copy_repository::SeaOrmCopyRepository;
pub use library_repository::SeaOrmLibraryRepository;
pub use person_repository::SeaOrmPersonRepository;
