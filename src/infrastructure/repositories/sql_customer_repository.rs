//! sqlx implementation of CustomerRepository
//!
//! Issues parameterized SQL directly against the `customer` table. Every
//! row-returning query goes through [`map_customer_row`].

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::domain::{Customer, CustomerRepository, DomainError, NewCustomer};

/// Map one `customer` row (`id`, `name`, `email`, `age`) to a Customer
pub fn map_customer_row(row: SqliteRow) -> Result<Customer, sqlx::Error> {
    Ok(Customer {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        age: row.try_get("age")?,
    })
}

/// sqlx-based implementation of CustomerRepository
pub struct SqlCustomerRepository {
    pool: SqlitePool,
}

impl SqlCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqlCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = sqlx::query(
            r#"
            SELECT id, name, email, age
            FROM customer
            ORDER BY id
            "#,
        )
        .try_map(map_customer_row)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let customer = sqlx::query(
            r#"
            SELECT id, name, email, age
            FROM customer
            WHERE id = ?
            "#,
        )
        .bind(id)
        .try_map(map_customer_row)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO customer (name, email, age)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(customer.age)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::from(e).for_email(&customer.email))?;

        Ok(customer.with_id(result.last_insert_rowid()))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(id)
            FROM customer
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(id)
            FROM customer
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM customer WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE customer
            SET name = ?, email = ?, age = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(customer.age)
        .bind(customer.id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::from(e).for_email(&customer.email))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Customer not found with id {}",
                customer.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;

    #[tokio::test]
    async fn maps_columns_into_customer_fields() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");
        let pool = db.get_sqlite_connection_pool().clone();

        sqlx::query("INSERT INTO customer (id, name, email, age) VALUES (7, 'Alex', 'alex@gmail.com', 19)")
            .execute(&pool)
            .await
            .expect("Insert failed");

        let customer = sqlx::query("SELECT id, name, email, age FROM customer")
            .try_map(map_customer_row)
            .fetch_one(&pool)
            .await
            .expect("Mapping failed");

        assert_eq!(
            customer,
            Customer {
                id: 7,
                name: "Alex".to_string(),
                email: "alex@gmail.com".to_string(),
                age: 19,
            }
        );
    }

    #[tokio::test]
    async fn mapping_fails_when_a_column_is_missing() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");
        let pool = db.get_sqlite_connection_pool().clone();

        let result = sqlx::query("SELECT 1 AS id, 'Alex' AS name")
            .try_map(map_customer_row)
            .fetch_one(&pool)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn duplicate_email_insert_hits_the_unique_constraint() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");
        let repo = SqlCustomerRepository::new(db.get_sqlite_connection_pool().clone());

        let new_customer = NewCustomer {
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            age: 21,
        };
        repo.insert(new_customer.clone()).await.expect("First insert failed");

        let err = repo.insert(new_customer).await.unwrap_err();
        assert_eq!(err, DomainError::DuplicateEmail("alex@example.com".to_string()));
    }
}
