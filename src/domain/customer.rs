//! Customer entity and request types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored customer. The id is assigned by storage and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// A customer that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl NewCustomer {
    /// Attach a storage-assigned id
    pub fn with_id(self, id: i64) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// Input for creating a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerRegistrationRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<CustomerRegistrationRequest> for NewCustomer {
    fn from(request: CustomerRegistrationRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            age: request.age,
        }
    }
}

/// Input for a partial update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}
