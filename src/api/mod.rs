pub mod customer;
pub mod health;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Customers
        .route(
            "/v1/customers",
            get(customer::list_customers).post(customer::register_customer),
        )
        .route(
            "/v1/customers/:id",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        )
        .with_state(state)
}
