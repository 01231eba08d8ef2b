use crate::api;
use crate::domain::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::customer::list_customers,
        api::customer::get_customer,
        api::customer::register_customer,
        api::customer::delete_customer,
        api::customer::update_customer,
    ),
    components(
        schemas(Customer, CustomerRegistrationRequest, CustomerUpdateRequest)
    ),
    tags(
        (name = "customer-registry", description = "Customer Registry API")
    )
)]
pub struct ApiDoc;
