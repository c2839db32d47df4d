use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "loans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub copy_id: i32,
    pub person_id: i32,
    /// Fixed at issuance, never mutated afterwards.
    pub loan_date: Date,
    /// Fixed at issuance, never mutated afterwards.
    pub due_date: Date,
    pub return_date: Option<Date>,
    /// Flipped to false exactly once, when the return date is set.
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::copy::Entity",
        from = "Column::CopyId",
        to = "super::copy::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Copy,
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Person,
}

impl Related<super::copy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Copy.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// An open loan past its due date. A closed loan is never overdue,
    /// even if it was returned late.
    pub fn is_overdue(&self, today: Date) -> bool {
        self.active && today > self.due_date
    }

    /// Whole days past the due date, 0 when not overdue.
    pub fn days_overdue(&self, today: Date) -> i64 {
        if self.is_overdue(today) {
            (today - self.due_date).num_days()
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn loan(due: NaiveDate, active: bool, return_date: Option<NaiveDate>) -> Model {
        Model {
            id: 1,
            copy_id: 1,
            person_id: 1,
            loan_date: due - chrono::Duration::days(15),
            due_date: due,
            return_date,
            active,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_yesterday_is_one_day_overdue() {
        let l = loan(date(2024, 3, 10), true, None);
        let today = date(2024, 3, 11);
        assert!(l.is_overdue(today));
        assert_eq!(l.days_overdue(today), 1);
    }

    #[test]
    fn not_overdue_on_the_due_date_itself() {
        let l = loan(date(2024, 3, 10), true, None);
        assert!(!l.is_overdue(date(2024, 3, 10)));
        assert_eq!(l.days_overdue(date(2024, 3, 10)), 0);
    }

    #[test]
    fn closed_loan_is_never_overdue() {
        let l = loan(date(2024, 3, 10), false, Some(date(2024, 3, 20)));
        assert!(!l.is_overdue(date(2024, 4, 1)));
        assert_eq!(l.days_overdue(date(2024, 4, 1)), 0);
    }

    #[test]
    fn days_overdue_counts_whole_days() {
        let l = loan(date(2024, 3, 1), true, None);
        assert_eq!(l.days_overdue(date(2024, 3, 8)), 7);
    }
}
