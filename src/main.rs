use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use customer_registry::config::{Config, DataAccess};
use customer_registry::infrastructure::AppState;
use customer_registry::{seed, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "customer_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let mut config = Config::from_env();

    // Check for --data-access CLI argument
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--data-access")
        && let Some(val) = args.get(pos + 1)
    {
        match val.parse::<DataAccess>() {
            Ok(mode) => config.data_access = mode,
            Err(e) => tracing::warn!("Ignoring --data-access: {}", e),
        }
    }

    // Initialize storage; memory mode leaves the database file alone
    tracing::info!("Using {} data access", config.data_access);
    let state = match AppState::from_config(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    // Check for seed flag
    if config.seed_demo {
        tracing::info!("Seeding demo customer...");
        match seed::seed_demo_customer(&state.customer_service).await {
            Ok(customer) => tracing::info!("Seeded customer {} <{}>", customer.id, customer.email),
            Err(e) => tracing::warn!("Failed to seed demo customer: {}", e),
        }
    }

    let app = server::build_router(state, &config.cors_allowed_origins);

    if let Err(e) = server::serve(app, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
