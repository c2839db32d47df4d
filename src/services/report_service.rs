//! Read-only reporting queries
//!
//! Every result is fully resolved before it is returned: callers never
//! get a handle that still needs the database to be useful.

use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::domain::DomainError;
use crate::models::author::{self, Entity as Author};
use crate::models::book::{self, Entity as Book};
use crate::models::book_authors;
use crate::models::copy::{self, Entity as Copy};
use crate::models::loan::{self, Entity as Loan};
use crate::models::person::Entity as Person;

/// A copy together with its complete loan history, oldest first.
#[derive(Debug, Clone)]
pub struct CopyWithLoans {
    pub copy: copy::Model,
    pub loans: Vec<loan::Model>,
}

/// A book with its authors and physical copies resolved.
#[derive(Debug, Clone)]
pub struct BookWithDetails {
    pub book: book::Model,
    pub authors: Vec<author::Model>,
    pub copies: Vec<copy::Model>,
}

async fn resolve_book(
    db: &DatabaseConnection,
    book: book::Model,
) -> Result<BookWithDetails, DomainError> {
    let authors = book.find_related(Author).all(db).await?;
    let copies = book.find_related(Copy).all(db).await?;
    Ok(BookWithDetails {
        book,
        authors,
        copies,
    })
}

fn contains_lowered(col: Expr, needle: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(col)).like(format!("%{}%", needle.to_lowercase()))
}

/// All copies currently on the shelf, with their loan history.
pub async fn available_copies(
    db: &DatabaseConnection,
) -> Result<Vec<CopyWithLoans>, DomainError> {
    let copies = Copy::find()
        .filter(copy::Column::Available.eq(true))
        .order_by_asc(copy::Column::Barcode)
        .all(db)
        .await?;

    let mut result = Vec::with_capacity(copies.len());
    for c in copies {
        let loans = c
            .find_related(Loan)
            .order_by_asc(loan::Column::Id)
            .all(db)
            .await?;
        result.push(CopyWithLoans { copy: c, loans });
    }

    Ok(result)
}

/// Case-insensitive substring search on book titles.
pub async fn books_by_title(
    db: &DatabaseConnection,
    needle: &str,
) -> Result<Vec<BookWithDetails>, DomainError> {
    let books = Book::find()
        .filter(contains_lowered(Expr::col(book::Column::Title), needle))
        .order_by_asc(book::Column::Title)
        .all(db)
        .await?;

    let mut result = Vec::with_capacity(books.len());
    for b in books {
        result.push(resolve_book(db, b).await?);
    }

    Ok(result)
}

/// Case-insensitive substring search on author names, de-duplicated by
/// book (a book with several matching authors appears once).
pub async fn books_by_author(
    db: &DatabaseConnection,
    needle: &str,
) -> Result<Vec<BookWithDetails>, DomainError> {
    let books = Book::find()
        .join(JoinType::InnerJoin, book_authors::Relation::Book.def().rev())
        .join(JoinType::InnerJoin, book_authors::Relation::Author.def())
        .filter(contains_lowered(
            Expr::col((author::Entity, author::Column::Name)),
            needle,
        ))
        .distinct()
        .order_by_asc(book::Column::Title)
        .all(db)
        .await?;

    let mut result = Vec::with_capacity(books.len());
    for b in books {
        result.push(resolve_book(db, b).await?);
    }

    Ok(result)
}

/// All open loans.
pub async fn active_loans(db: &DatabaseConnection) -> Result<Vec<loan::Model>, DomainError> {
    let loans = Loan::find()
        .filter(loan::Column::Active.eq(true))
        .order_by_asc(loan::Column::Id)
        .all(db)
        .await?;
    Ok(loans)
}

/// Open loans whose due date is strictly before `today`.
pub async fn overdue_loans(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<Vec<loan::Model>, DomainError> {
    let loans = Loan::find()
        .filter(loan::Column::Active.eq(true))
        .filter(loan::Column::DueDate.lt(today))
        .order_by_asc(loan::Column::Id)
        .all(db)
        .await?;
    Ok(loans)
}

/// A person's loans, most recent loan date first; loans issued the same
/// day keep their creation order.
pub async fn loan_history(
    db: &DatabaseConnection,
    person_id: i32,
) -> Result<Vec<loan::Model>, DomainError> {
    Person::find_by_id(person_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound)?;

    let loans = Loan::find()
        .filter(loan::Column::PersonId.eq(person_id))
        .order_by_desc(loan::Column::LoanDate)
        .order_by_asc(loan::Column::Id)
        .all(db)
        .await?;
    Ok(loans)
}

/// How many loans a person currently has open.
pub async fn open_loan_count(
    db: &DatabaseConnection,
    person_id: i32,
) -> Result<u64, DomainError> {
    Person::find_by_id(person_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound)?;

    let count = Loan::find()
        .filter(loan::Column::PersonId.eq(person_id))
        .filter(loan::Column::Active.eq(true))
        .count(db)
        .await?;
    Ok(count)
}

/// Whether a person currently holds any overdue loan.
pub async fn has_overdue_loans(
    db: &DatabaseConnection,
    person_id: i32,
    today: NaiveDate,
) -> Result<bool, DomainError> {
    Person::find_by_id(person_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound)?;

    let count = Loan::find()
        .filter(loan::Column::PersonId.eq(person_id))
        .filter(loan::Column::Active.eq(true))
        .filter(loan::Column::DueDate.lt(today))
        .count(db)
        .await?;
    Ok(count > 0)
}
