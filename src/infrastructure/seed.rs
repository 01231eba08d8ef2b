use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{Customer, CustomerRegistrationRequest, DomainError};
use crate::services::CustomerService;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Jamila", "Maya", "Omar", "Lena", "Tomas", "Ines", "Kwame", "Sofia", "Ravi",
];

const LAST_NAMES: &[&str] = &[
    "Garcia", "Okafor", "Novak", "Tanaka", "Silva", "Haddad", "Larsen", "Moreau", "Khan", "Reyes",
];

/// Build a registration request for a random demo customer
pub fn random_customer_request<R: Rng>(rng: &mut R) -> CustomerRegistrationRequest {
    let first_name = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last_name = LAST_NAMES.choose(rng).copied().unwrap_or("Garcia");

    CustomerRegistrationRequest {
        name: format!("{} {}", first_name, last_name),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        age: rng.gen_range(16..99),
    }
}

/// Register one random customer. Called once at startup when SEED_DEMO is set.
pub async fn seed_demo_customer(service: &CustomerService) -> Result<Customer, DomainError> {
    let request = random_customer_request(&mut rand::thread_rng());
    service.register_customer(request).await
}
