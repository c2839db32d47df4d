//! Demo catalog used by the walkthrough binary and nothing else.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::DomainError;
use crate::models::{author, book, book_authors, copy, library, person};

/// Seed a small bilingual catalog: one library, two novels with their
/// authors, three copies and two borrowers. Skips silently when the
/// library is already there so reruns against a file database are safe.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    let existing = library::Entity::find()
        .filter(library::Column::Name.eq("Biblioteca Central"))
        .one(db)
        .await?;

    if existing.is_some() {
        tracing::debug!("demo data already present, skipping seed");
        return Ok(());
    }

    let now = chrono::Utc::now().to_rfc3339();

    let central = library::ActiveModel {
        name: Set("Biblioteca Central".to_owned()),
        city: Set("Bogotá".to_owned()),
        address: Set(Some("Calle 24 # 5-60".to_owned())),
        phone: Set(Some("+57 1 3816464".to_owned())),
        email: Set(Some("central@biblored.gov.co".to_owned())),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let garcia_marquez = author::ActiveModel {
        name: Set("Gabriel García Márquez".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let allende = author::ActiveModel {
        name: Set("Isabel Allende".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let cien_anos = book::ActiveModel {
        isbn: Set("978-0307474728".to_owned()),
        title: Set("Cien años de soledad".to_owned()),
        publisher: Set(Some("Vintage Español".to_owned())),
        publication_year: Set(Some(1967)),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let casa_espiritus = book::ActiveModel {
        isbn: Set("978-8401242182".to_owned()),
        title: Set("La casa de los espíritus".to_owned()),
        publisher: Set(Some("Plaza & Janés".to_owned())),
        publication_year: Set(Some(1982)),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    book_authors::ActiveModel {
        book_id: Set(cien_anos.id),
        author_id: Set(garcia_marquez.id),
    }
    .insert(db)
    .await?;

    book_authors::ActiveModel {
        book_id: Set(casa_espiritus.id),
        author_id: Set(allende.id),
    }
    .insert(db)
    .await?;

    for (barcode, book_id) in [
        ("EX001", cien_anos.id),
        ("EX002", cien_anos.id),
        ("EX003", casa_espiritus.id),
    ] {
        copy::ActiveModel {
            barcode: Set(barcode.to_owned()),
            book_id: Set(book_id),
            library_id: Set(central.id),
            available: Set(true),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    for (national_id, name, email) in [
        ("10203040", "Carlos Pérez", "carlos.perez@example.com"),
        ("50607080", "María Rodríguez", "maria.rodriguez@example.com"),
    ] {
        person::ActiveModel {
            national_id: Set(national_id.to_owned()),
            name: Set(name.to_owned()),
            phone: Set(None),
            email: Set(Some(email.to_owned())),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    tracing::info!("demo catalog seeded");
    Ok(())
}
