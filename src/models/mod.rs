pub mod author;
pub mod book;
pub mod book_authors;
pub mod copy;
pub mod library;
pub mod loan;
pub mod person;
