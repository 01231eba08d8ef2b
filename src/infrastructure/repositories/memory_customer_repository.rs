//! In-memory implementation of CustomerRepository
//!
//! Holds customers in a process-local list. Used for demos and tests; it
//! enforces the same email uniqueness as the `customer` table.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Customer, CustomerRepository, DomainError, NewCustomer};

#[derive(Default)]
struct Store {
    customers: Vec<Customer>,
    last_id: i64,
}

/// List-backed implementation of CustomerRepository
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    store: RwLock<Store>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with the two demo customers
    pub fn with_demo_customers() -> Self {
        let customers = vec![
            Customer {
                id: 1,
                name: "Alex".to_string(),
                email: "alex@gmail.com".to_string(),
                age: 21,
            },
            Customer {
                id: 2,
                name: "Jamila".to_string(),
                email: "jamila@gmail.com".to_string(),
                age: 19,
            },
        ];

        Self {
            store: RwLock::new(Store {
                last_id: 2,
                customers,
            }),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        Ok(self.store.read().await.customers.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let store = self.store.read().await;
        Ok(store.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let mut store = self.store.write().await;

        if store.customers.iter().any(|c| c.email == customer.email) {
            return Err(DomainError::DuplicateEmail(customer.email));
        }

        store.last_id += 1;
        let customer = customer.with_id(store.last_id);
        store.customers.push(customer.clone());

        Ok(customer)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let store = self.store.read().await;
        Ok(store.customers.iter().any(|c| c.email == email))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let store = self.store.read().await;
        Ok(store.customers.iter().any(|c| c.id == id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        self.store.write().await.customers.retain(|c| c.id != id);
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut store = self.store.write().await;

        if store
            .customers
            .iter()
            .any(|c| c.id != customer.id && c.email == customer.email)
        {
            return Err(DomainError::DuplicateEmail(customer.email.clone()));
        }

        match store.customers.iter_mut().find(|c| c.id == customer.id) {
            Some(stored) => {
                *stored = customer.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Customer not found with id {}",
                customer.id
            ))),
        }
    }
}
