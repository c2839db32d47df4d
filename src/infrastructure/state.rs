//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    AuthorRepository, BookRepository, Clock, CopyRepository, LibraryRepository, PersonRepository,
    SystemClock,
};
use crate::infrastructure::{
    SeaOrmAuthorRepository, SeaOrmBookRepository, SeaOrmCopyRepository, SeaOrmLibraryRepository,
    SeaOrmPersonRepository,
};

/// Shared state wiring the connection, the repositories and the clock.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pub author_repo: Arc<dyn AuthorRepository>,
    pub book_repo: Arc<dyn BookRepository>,
    pub library_repo: Arc<dyn LibraryRepository>,
    pub copy_repo: Arc<dyn CopyRepository>,
    pub person_repo: Arc<dyn PersonRepository>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let author_repo = Arc::new(SeaOrmAuthorRepository::new(db.clone()));
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));
        let library_repo = Arc::new(SeaOrmLibraryRepository::new(db.clone()));
        let copy_repo = Arc::new(SeaOrmCopyRepository::new(db.clone()));
        let person_repo = Arc::new(SeaOrmPersonRepository::new(db.clone()));

        Self {
            db,
            author_repo,
            book_repo,
            library_repo,
            copy_repo,
            person_repo,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl AsRef<DatabaseConnection> for AppState {
    fn as_ref(&self) -> &DatabaseConnection {
        &self.db
    }
}
