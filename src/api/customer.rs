//! Customer API handlers using the customer service

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest, DomainError};
use crate::infrastructure::AppState;

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::DuplicateEmail(_) => StatusCode::CONFLICT,
            DomainError::NoChanges | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Storage(msg) => {
                tracing::error!("Customer storage failure: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

// List all customers
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    responses(
        (status = 200, description = "All customers", body = [Customer])
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, DomainError> {
    let customers = state.customer_service.get_all_customers().await?;
    Ok(Json(customers))
}

// Get a single customer by ID
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, DomainError> {
    let customer = state.customer_service.get_customer(id).await?;
    Ok(Json(customer))
}

// Register a new customer
#[utoipa::path(
    post,
    path = "/api/v1/customers",
    request_body = CustomerRegistrationRequest,
    responses(
        (status = 200, description = "Customer registered", body = Customer),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn register_customer(
    State(state): State<AppState>,
    Json(payload): Json<CustomerRegistrationRequest>,
) -> Result<Json<Customer>, DomainError> {
    let customer = state.customer_service.register_customer(payload).await?;
    tracing::info!("Registered customer {} <{}>", customer.id, customer.email);
    Ok(Json(customer))
}

// Delete a customer
#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, DomainError> {
    state.customer_service.delete_customer(id).await?;
    tracing::info!("Deleted customer {}", id);
    Ok((StatusCode::OK, Json(json!({"message": "Customer deleted"}))))
}

// Partially update a customer
#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = CustomerUpdateRequest,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, description = "No changes or invalid field"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerUpdateRequest>,
) -> Result<Json<Customer>, DomainError> {
    let customer = state.customer_service.update_customer(id, payload).await?;
    tracing::info!("Updated customer {}", id);
    Ok(Json(customer))
}
