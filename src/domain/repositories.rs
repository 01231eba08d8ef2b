//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use super::customer::{Customer, NewCustomer};

/// Repository trait for Customer entity
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find all customers
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Find a customer by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError>;

    /// Store a new customer and return it with its assigned ID
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, DomainError>;

    /// Check whether any customer uses this email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether a customer with this ID exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Delete a customer by ID. Deleting a missing ID is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;

    /// Persist name, email and age of an existing customer
    async fn update(&self, customer: &Customer) -> Result<(), DomainError>;
}
