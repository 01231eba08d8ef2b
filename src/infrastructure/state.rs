//! Application state containing the customer service and its repository

use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

use crate::domain::CustomerRepository;
use crate::infrastructure::config::{Config, DataAccess};
use crate::infrastructure::db;
use crate::infrastructure::{
    InMemoryCustomerRepository, SeaOrmCustomerRepository, SqlCustomerRepository,
};
use crate::services::CustomerService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Adapter the service was composed with
    pub data_access: DataAccess,
    /// Customer use cases
    pub customer_service: CustomerService,
}

impl AppState {
    /// Compose the service with the repository selected by `data_access`
    pub fn new(db: DatabaseConnection, data_access: DataAccess) -> Self {
        let customer_repo: Arc<dyn CustomerRepository> = match data_access {
            DataAccess::Sql => Arc::new(SqlCustomerRepository::new(
                db.get_sqlite_connection_pool().clone(),
            )),
            DataAccess::Orm => Arc::new(SeaOrmCustomerRepository::new(db)),
            DataAccess::Memory => Arc::new(InMemoryCustomerRepository::with_demo_customers()),
        };

        Self::with_repository(customer_repo, data_access)
    }

    /// Open the database only for the adapters that store there
    pub async fn from_config(config: &Config) -> Result<Self, DbErr> {
        if config.data_access == DataAccess::Memory {
            return Ok(Self::with_repository(
                Arc::new(InMemoryCustomerRepository::with_demo_customers()),
                DataAccess::Memory,
            ));
        }

        let db = db::init_db(&config.database_url).await?;
        Ok(Self::new(db, config.data_access))
    }

    /// Build state around an already constructed repository
    pub fn with_repository(repo: Arc<dyn CustomerRepository>, data_access: DataAccess) -> Self {
        Self {
            data_access,
            customer_service: CustomerService::new(repo),
        }
    }
}
