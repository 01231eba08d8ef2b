use std::env;
use std::fmt;
use std::str::FromStr;

/// Which persistence adapter backs the customer service
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataAccess {
    /// Hand-written SQL through sqlx
    #[default]
    Sql,
    /// SeaORM entity repository
    Orm,
    /// Process-local list, seeded with demo customers
    Memory,
}

impl FromStr for DataAccess {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sql" | "jdbc" => Ok(DataAccess::Sql),
            "orm" | "jpa" => Ok(DataAccess::Orm),
            "memory" | "list" => Ok(DataAccess::Memory),
            other => Err(format!("unknown data access mode '{}'", other)),
        }
    }
}

impl fmt::Display for DataAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataAccess::Sql => "sql",
            DataAccess::Orm => "orm",
            DataAccess::Memory => "memory",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub data_access: DataAccess,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let data_access = match env::var("DATA_ACCESS") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to {}", e, DataAccess::default());
                DataAccess::default()
            }),
            Err(_) => DataAccess::default(),
        };

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://customers.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
            data_access,
            seed_demo: env::var("SEED_DEMO").is_ok(),
        }
    }
}
