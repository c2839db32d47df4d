use chrono::NaiveDate;
use sea_orm::{EntityTrait, ModelTrait};

use circulib::db;
use circulib::domain::{
    CreateBookInput, CreateCopyInput, CreateLibraryInput, CreatePersonInput, DomainError,
    UpdateBookInput, UpdatePersonInput,
};
use circulib::infrastructure::AppState;
use circulib::models::{author, book, copy, loan};
use circulib::services::circulation_service;

async fn setup_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_input(isbn: &str, title: &str) -> CreateBookInput {
    CreateBookInput {
        isbn: isbn.to_string(),
        title: title.to_string(),
        publisher: None,
        publication_year: None,
    }
}

fn library_input(name: &str) -> CreateLibraryInput {
    CreateLibraryInput {
        name: name.to_string(),
        city: "Testville".to_string(),
        address: None,
        phone: None,
        email: None,
    }
}

fn person_input(national_id: &str, name: &str) -> CreatePersonInput {
    CreatePersonInput {
        national_id: national_id.to_string(),
        name: name.to_string(),
        phone: None,
        email: None,
    }
}

#[tokio::test]
async fn book_crud_round_trip() {
    let state = setup_state().await;

    let created = state
        .book_repo
        .create(book_input("978-0307474728", "Cien años de soledad"))
        .await
        .expect("create failed");

    let by_isbn = state
        .book_repo
        .find_by_isbn("978-0307474728")
        .await
        .expect("lookup failed")
        .expect("book missing");
    assert_eq!(by_isbn.id, created.id);

    let updated = state
        .book_repo
        .update(
            created.id,
            UpdateBookInput {
                publisher: Some(Some("Vintage Español".to_string())),
                publication_year: Some(Some(1967)),
                ..Default::default()
            },
        )
        .await
        .expect("update failed");
    assert_eq!(updated.title, "Cien años de soledad");
    assert_eq!(updated.publisher.as_deref(), Some("Vintage Español"));
    assert_eq!(updated.publication_year, Some(1967));

    state.book_repo.delete(created.id).await.expect("delete failed");
    let gone = state
        .book_repo
        .find_by_id(created.id)
        .await
        .expect("lookup failed");
    assert!(gone.is_none());

    let err = state
        .book_repo
        .delete(created.id)
        .await
        .expect_err("deleting twice should fail");
    assert!(matches!(err, DomainError::NotFound));
}

#[tokio::test]
async fn unique_fields_reject_duplicates() {
    let state = setup_state().await;

    state
        .book_repo
        .create(book_input("978-0307474728", "Cien años de soledad"))
        .await
        .expect("create failed");
    let err = state
        .book_repo
        .create(book_input("978-0307474728", "Another title"))
        .await
        .expect_err("duplicate ISBN should fail");
    assert!(matches!(err, DomainError::Constraint(_)));

    let library = state
        .library_repo
        .create(library_input("Test Library"))
        .await
        .expect("create failed");
    let book = state
        .book_repo
        .find_by_isbn("978-0307474728")
        .await
        .expect("lookup failed")
        .expect("book missing");

    state
        .copy_repo
        .create(CreateCopyInput {
            barcode: "EX001".to_string(),
            book_id: book.id,
            library_id: library.id,
        })
        .await
        .expect("create failed");
    let err = state
        .copy_repo
        .create(CreateCopyInput {
            barcode: "EX001".to_string(),
            book_id: book.id,
            library_id: library.id,
        })
        .await
        .expect_err("duplicate barcode should fail");
    assert!(matches!(err, DomainError::Constraint(_)));

    state
        .person_repo
        .create(person_input("10203040", "Carlos Pérez"))
        .await
        .expect("create failed");
    let err = state
        .person_repo
        .create(person_input("10203040", "Someone Else"))
        .await
        .expect_err("duplicate national ID should fail");
    assert!(matches!(err, DomainError::Constraint(_)));
}

#[tokio::test]
async fn attach_and_detach_author_updates_both_sides() {
    let state = setup_state().await;
    let db = state.db();

    let book = state
        .book_repo
        .create(book_input("978-0307474728", "Cien años de soledad"))
        .await
        .expect("create failed");
    let marquez = state
        .author_repo
        .create("Gabriel García Márquez".to_string())
        .await
        .expect("create failed");

    state
        .book_repo
        .attach_author(book.id, marquez.id)
        .await
        .expect("attach failed");

    // Both directions observe the junction row.
    let authors = book
        .find_related(author::Entity)
        .all(db)
        .await
        .expect("query failed");
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].id, marquez.id);

    let books = marquez
        .find_related(book::Entity)
        .all(db)
        .await
        .expect("query failed");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, book.id);

    state
        .book_repo
        .detach_author(book.id, marquez.id)
        .await
        .expect("detach failed");

    let authors = book
        .find_related(author::Entity)
        .all(db)
        .await
        .expect("query failed");
    assert!(authors.is_empty());

    let err = state
        .book_repo
        .detach_author(book.id, marquez.id)
        .await
        .expect_err("detaching twice should fail");
    assert!(matches!(err, DomainError::NotFound));
}

#[tokio::test]
async fn deleting_a_library_cascades_to_copies_and_loans() {
    let state = setup_state().await;
    let db = state.db();

    let library = state
        .library_repo
        .create(library_input("Doomed Branch"))
        .await
        .expect("create failed");
    let book = state
        .book_repo
        .create(book_input("978-0307474728", "Cien años de soledad"))
        .await
        .expect("create failed");
    let copy = state
        .copy_repo
        .create(CreateCopyInput {
            barcode: "EX001".to_string(),
            book_id: book.id,
            library_id: library.id,
        })
        .await
        .expect("create failed");
    let person = state
        .person_repo
        .create(person_input("10203040", "Carlos Pérez"))
        .await
        .expect("create failed");

    let d = date(2024, 3, 1);
    circulation_service::issue_loan(db, copy.id, person.id, d, d + chrono::Duration::days(15))
        .await
        .expect("issue failed");

    state
        .library_repo
        .delete(library.id)
        .await
        .expect("delete failed");

    // Copies and their loan history are gone with the branch; the book
    // and the borrower survive.
    let copies = copy::Entity::find().all(db).await.expect("query failed");
    assert!(copies.is_empty());
    let loans = loan::Entity::find().all(db).await.expect("query failed");
    assert!(loans.is_empty());

    assert!(state
        .book_repo
        .find_by_id(book.id)
        .await
        .expect("lookup failed")
        .is_some());
    assert!(state
        .person_repo
        .find_by_id(person.id)
        .await
        .expect("lookup failed")
        .is_some());
}

#[tokio::test]
async fn person_update_changes_contact_details_only() {
    let state = setup_state().await;

    let person = state
        .person_repo
        .create(person_input("10203040", "Carlos Pérez"))
        .await
        .expect("create failed");

    let updated = state
        .person_repo
        .update(
            person.id,
            UpdatePersonInput {
                name: Some("Carlos A. Pérez".to_string()),
                phone: Some(Some("+57 300 1234567".to_string())),
                ..Default::default()
            },
        )
        .await
        .expect("update failed");

    assert_eq!(updated.national_id, "10203040");
    assert_eq!(updated.name, "Carlos A. Pérez");
    assert_eq!(updated.phone.as_deref(), Some("+57 300 1234567"));

    let err = state
        .person_repo
        .update(9999, UpdatePersonInput::default())
        .await
        .expect_err("missing person should fail");
    assert!(matches!(err, DomainError::NotFound));
}

#[tokio::test]
async fn copy_lookups_by_book_library_and_barcode() {
    let state = setup_state().await;

    let branch_a = state
        .library_repo
        .create(library_input("Branch A"))
        .await
        .expect("create failed");
    let branch_b = state
        .library_repo
        .create(library_input("Branch B"))
        .await
        .expect("create failed");
    let cien = state
        .book_repo
        .create(book_input("978-0307474728", "Cien años de soledad"))
        .await
        .expect("create failed");
    let casa = state
        .book_repo
        .create(book_input("978-8401242182", "La casa de los espíritus"))
        .await
        .expect("create failed");

    for (barcode, book_id, library_id) in [
        ("EX001", cien.id, branch_a.id),
        ("EX002", cien.id, branch_b.id),
        ("EX003", casa.id, branch_a.id),
    ] {
        state
            .copy_repo
            .create(CreateCopyInput {
                barcode: barcode.to_string(),
                book_id,
                library_id,
            })
            .await
            .expect("create failed");
    }

    let of_cien = state
        .copy_repo
        .find_by_book(cien.id)
        .await
        .expect("lookup failed");
    assert_eq!(of_cien.len(), 2);

    let at_a = state
        .copy_repo
        .find_by_library(branch_a.id)
        .await
        .expect("lookup failed");
    assert_eq!(at_a.len(), 2);

    let ex002 = state
        .copy_repo
        .find_by_barcode("EX002")
        .await
        .expect("lookup failed")
        .expect("copy missing");
    assert_eq!(ex002.book_id, cien.id);
    assert_eq!(ex002.library_id, branch_b.id);
    assert!(ex002.available);
}
