//! CustomerRepository implementations: raw SQL, SeaORM and in-memory

pub mod memory_customer_repository;
pub mod sea_orm_customer_repository;
pub mod sql_customer_repository;

pub use memory_customer_repository::InMemoryCustomerRepository;
pub use sea_orm_customer_repository::SeaOrmCustomerRepository;
pub use sql_customer_repository::SqlCustomerRepository;
