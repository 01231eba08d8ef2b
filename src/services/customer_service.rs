//! Customer Service - Pure business logic without HTTP layer
//!
//! All customer rules live here: registration with duplicate-email checks,
//! partial updates and not-found handling. Persistence goes through whichever
//! `CustomerRepository` the service was built with.

use std::sync::Arc;

use crate::domain::{
    Customer, CustomerRegistrationRequest, CustomerRepository, CustomerUpdateRequest, DomainError,
    NewCustomer,
};

/// Use-case service for the customer resource
#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    /// List all customers
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a single customer by ID
    pub async fn get_customer(&self, id: i64) -> Result<Customer, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Customer not found with id {}", id)))
    }

    /// Register a new customer and return it with its assigned ID
    pub async fn register_customer(
        &self,
        request: CustomerRegistrationRequest,
    ) -> Result<Customer, DomainError> {
        validate_name(&request.name)?;
        validate_email(&request.email)?;
        validate_age(request.age)?;

        if self.repo.exists_by_email(&request.email).await? {
            return Err(DomainError::DuplicateEmail(request.email));
        }

        self.repo.insert(NewCustomer::from(request)).await
    }

    /// Delete a customer
    pub async fn delete_customer(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::NotFound(format!(
                "Customer with id {} cannot be deleted since it was not found",
                id
            )));
        }

        self.repo.delete_by_id(id).await
    }

    /// Apply the supplied fields that differ from the stored customer.
    ///
    /// Fields are checked in the order name, age, email. The duplicate-email
    /// lookup only runs when the email actually changes, and it runs last.
    pub async fn update_customer(
        &self,
        id: i64,
        request: CustomerUpdateRequest,
    ) -> Result<Customer, DomainError> {
        let mut customer = self.get_customer(id).await?;
        let mut changed = false;

        if let Some(name) = request.name
            && name != customer.name
        {
            validate_name(&name)?;
            customer.name = name;
            changed = true;
        }

        if let Some(age) = request.age
            && age != customer.age
        {
            validate_age(age)?;
            customer.age = age;
            changed = true;
        }

        if let Some(email) = request.email
            && email != customer.email
        {
            validate_email(&email)?;
            if self.repo.exists_by_email(&email).await? {
                return Err(DomainError::DuplicateEmail(email));
            }
            customer.email = email;
            changed = true;
        }

        if !changed {
            return Err(DomainError::NoChanges);
        }

        self.repo.update(&customer).await?;
        Ok(customer)
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("name must not be blank".to_string()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.trim().is_empty() {
        return Err(DomainError::Validation("email must not be blank".to_string()));
    }
    if !email.contains('@') {
        return Err(DomainError::Validation(format!(
            "email '{}' is not a valid address",
            email
        )));
    }
    Ok(())
}

fn validate_age(age: i32) -> Result<(), DomainError> {
    if age < 0 {
        return Err(DomainError::Validation(format!(
            "age must not be negative, got {}",
            age
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected() {
        assert!(validate_name("   ").is_err());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-address").is_err());
        assert!(validate_age(-1).is_err());
    }

    #[test]
    fn ordinary_fields_pass() {
        assert!(validate_name("Alex").is_ok());
        assert!(validate_email("alex@example.com").is_ok());
        assert!(validate_age(0).is_ok());
    }
}
