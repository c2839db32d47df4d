//! Circulation engine
//!
//! The only code path that creates or closes loans and the only writer
//! of `copy.available`. Each operation runs inside a single transaction
//! so the loan row and the availability flag can never diverge; a
//! competing issuance on the same copy is serialized by the store and
//! loses on the precondition check.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};

use crate::domain::DomainError;
use crate::models::copy::{self, Entity as Copy};
use crate::models::loan::{self, Entity as Loan};
use crate::models::person::Entity as Person;

/// Issue a loan on an available copy.
///
/// Preconditions are checked inside the transaction, before any
/// mutation: the copy and the person must exist, and the copy must be
/// available. Date ordering is not validated; a due date before the
/// loan date is accepted as given.
pub async fn issue_loan(
    db: &DatabaseConnection,
    copy_id: i32,
    person_id: i32,
    loan_date: NaiveDate,
    due_date: NaiveDate,
) -> Result<loan::Model, DomainError> {
    let txn = db.begin().await?;

    let copy = Copy::find_by_id(copy_id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound)?;

    Person::find_by_id(person_id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound)?;

    if !copy.available {
        txn.rollback().await?;
        return Err(DomainError::CopyUnavailable(copy_id));
    }

    let now = chrono::Utc::now().to_rfc3339();

    let new_loan = loan::ActiveModel {
        copy_id: Set(copy_id),
        person_id: Set(person_id),
        loan_date: Set(loan_date),
        due_date: Set(due_date),
        return_date: Set(None),
        active: Set(true),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    };

    let saved_loan = new_loan.insert(&txn).await?;

    let mut copy_active: copy::ActiveModel = copy.into();
    copy_active.available = Set(false);
    copy_active.updated_at = Set(now);
    copy_active.update(&txn).await?;

    txn.commit().await?;

    tracing::debug!(
        loan_id = saved_loan.id,
        copy_id,
        person_id,
        "loan issued"
    );

    Ok(saved_loan)
}

/// Close an open loan.
///
/// Setting the return date, flipping the loan inactive and restoring
/// the copy's availability are one derived-state rule; they commit
/// together or not at all. This is the only place a return date is
/// ever written.
pub async fn return_loan(
    db: &DatabaseConnection,
    loan_id: i32,
    return_date: NaiveDate,
) -> Result<loan::Model, DomainError> {
    let txn = db.begin().await?;

    let loan = Loan::find_by_id(loan_id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound)?;

    if !loan.active {
        txn.rollback().await?;
        return Err(DomainError::LoanAlreadyClosed(loan_id));
    }

    let copy = Copy::find_by_id(loan.copy_id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound)?;

    let now = chrono::Utc::now().to_rfc3339();

    let mut loan_active: loan::ActiveModel = loan.into();
    loan_active.return_date = Set(Some(return_date));
    loan_active.active = Set(false);
    loan_active.updated_at = Set(now.clone());

    let updated_loan = loan_active.update(&txn).await?;

    let mut copy_active: copy::ActiveModel = copy.into();
    copy_active.available = Set(true);
    copy_active.updated_at = Set(now);
    copy_active.update(&txn).await?;

    txn.commit().await?;

    tracing::debug!(loan_id, "loan returned");

    Ok(updated_loan)
}
