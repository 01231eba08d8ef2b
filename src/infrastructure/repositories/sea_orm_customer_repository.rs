//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, Unchanged,
};

use crate::domain::{Customer, CustomerRepository, DomainError, NewCustomer};
use crate::models::customer::{ActiveModel, Column, Entity as CustomerEntity};

/// SeaORM-based implementation of CustomerRepository
pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = CustomerEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(customers.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let customer = CustomerEntity::find_by_id(id).one(&self.db).await?;

        Ok(customer.map(Customer::from))
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let email = customer.email.clone();
        let model = ActiveModel {
            name: Set(customer.name),
            email: Set(customer.email),
            age: Set(customer.age),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::from(e).for_email(&email))?;

        Ok(Customer::from(result))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let count = CustomerEntity::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let count = CustomerEntity::find()
            .filter(Column::Id.eq(id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        CustomerEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let model = ActiveModel {
            id: Unchanged(customer.id),
            name: Set(customer.name.clone()),
            email: Set(customer.email.clone()),
            age: Set(customer.age),
        };

        match model.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(DomainError::NotFound(format!(
                "Customer not found with id {}",
                customer.id
            ))),
            Err(e) => Err(DomainError::from(e).for_email(&customer.email)),
        }
    }
}
