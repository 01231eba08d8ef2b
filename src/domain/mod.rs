//! Domain layer - Pure business abstractions
//!
//! This layer never talks to storage or HTTP directly.
//! Only entities, trait definitions and domain error types.

pub mod customer;
pub mod errors;
pub mod repositories;

pub use customer::*;
pub use errors::DomainError;
pub use repositories::*;
