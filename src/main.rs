use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circulib::infrastructure::AppState;
use circulib::services::{circulation_service, report_service};
use circulib::{config, db, seed};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "circulib=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    let state = AppState::new(db.clone());

    if config.seed_demo {
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed demo data: {}", e);
            return;
        }
        run_walkthrough(&state, config.loan_period_days).await;
    } else {
        match state.library_repo.find_all().await {
            Ok(libraries) => {
                tracing::info!("Database ready with {} libraries", libraries.len());
            }
            Err(e) => tracing::error!("Failed to query libraries: {}", e),
        }
    }
}

/// Exercise the circulation engine and every report against the demo
/// catalog, logging each step.
async fn run_walkthrough(state: &AppState, loan_period_days: i64) {
    let db = state.db();
    let today = state.clock.today();
    let due = today + chrono::Duration::days(loan_period_days);

    let copy = match state.copy_repo.find_by_barcode("EX001").await {
        Ok(Some(c)) => c,
        Ok(None) => {
            tracing::error!("Demo copy EX001 missing");
            return;
        }
        Err(e) => {
            tracing::error!("Lookup failed: {}", e);
            return;
        }
    };

    let person = match state.person_repo.find_by_national_id("10203040").await {
        Ok(Some(p)) => p,
        Ok(None) => {
            tracing::error!("Demo borrower missing");
            return;
        }
        Err(e) => {
            tracing::error!("Lookup failed: {}", e);
            return;
        }
    };

    let loan = match circulation_service::issue_loan(db, copy.id, person.id, today, due).await {
        Ok(l) => {
            tracing::info!(
                "Issued loan {} of copy {} to {} (due {})",
                l.id,
                copy.barcode,
                person.name,
                l.due_date
            );
            l
        }
        Err(e) => {
            tracing::warn!("Could not issue loan: {}", e);
            return;
        }
    };

    match report_service::books_by_title(db, "sol").await {
        Ok(hits) => {
            for hit in &hits {
                let authors: Vec<&str> = hit.authors.iter().map(|a| a.name.as_str()).collect();
                tracing::info!(
                    "Title search 'sol': {} by {} ({} copies)",
                    hit.book.title,
                    authors.join(", "),
                    hit.copies.len()
                );
            }
        }
        Err(e) => tracing::error!("Title search failed: {}", e),
    }

    match report_service::books_by_author(db, "allende").await {
        Ok(hits) => {
            for hit in &hits {
                tracing::info!("Author search 'allende': {}", hit.book.title);
            }
        }
        Err(e) => tracing::error!("Author search failed: {}", e),
    }

    match report_service::available_copies(db).await {
        Ok(copies) => tracing::info!("{} copies on the shelf", copies.len()),
        Err(e) => tracing::error!("Available-copies report failed: {}", e),
    }

    match report_service::active_loans(db).await {
        Ok(loans) => tracing::info!("{} active loans", loans.len()),
        Err(e) => tracing::error!("Active-loans report failed: {}", e),
    }

    match report_service::overdue_loans(db, today).await {
        Ok(loans) => tracing::info!("{} overdue loans", loans.len()),
        Err(e) => tracing::error!("Overdue-loans report failed: {}", e),
    }

    match circulation_service::return_loan(db, loan.id, today).await {
        Ok(l) => tracing::info!("Returned loan {} on {}", l.id, today),
        Err(e) => tracing::error!("Return failed: {}", e),
    }

    match report_service::loan_history(db, person.id).await {
        Ok(history) => {
            tracing::info!("{} has {} loans on record", person.name, history.len());
        }
        Err(e) => tracing::error!("History report failed: {}", e),
    }
}
