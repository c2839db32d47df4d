//! SeaORM implementation of PersonRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{CreatePersonInput, DomainError, PersonRepository, UpdatePersonInput};
use crate::models::person::{self, Entity as Person};

pub struct SeaOrmPersonRepository {
    db: DatabaseConnection,
}

impl SeaOrmPersonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for SeaOrmPersonRepository {
    async fn find_all(&self) -> Result<Vec<person::Model>, DomainError> {
        let persons = Person::find()
            .order_by_asc(person::Column::Name)
            .all(&self.db)
            .await?;
        Ok(persons)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<person::Model>, DomainError> {
        let found = Person::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<person::Model>, DomainError> {
        let found = Person::find()
            .filter(person::Column::NationalId.eq(national_id))
            .one(&self.db)
            .await?;
        Ok(found)
    }

    async fn create(&self, input: CreatePersonInput) -> Result<person::Model, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let new_person = person::ActiveModel {
            national_id: Set(input.national_id),
            name: Set(input.name),
            phone: Set(input.phone),
            email: Set(input.email),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = new_person.insert(&self.db).await?;
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        input: UpdatePersonInput,
    ) -> Result<person::Model, DomainError> {
        let existing = Person::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        // The national ID is immutable; the input has no field for it.
        let mut active: person::ActiveModel = existing.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(phone) = input.phone {
            active.phone = Set(phone);
        }
        if let Some(email) = input.email {
            active.email = Set(email);
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let result = active.update(&self.db).await?;
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = Person::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
