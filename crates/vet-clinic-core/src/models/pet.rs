//! Pet models.

use serde::{Deserialize, Serialize};

use super::{PetId, PetStatus};

/// Data needed to register a pet; the store assigns the identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetRequest {
    /// Status at admission
    pub status: PetStatus,
    pub name: String,
    pub breed: String,
    /// Age in years
    pub age: u32,
}

impl PetRequest {
    /// Create a request for a newly admitted, unhealthy pet.
    pub fn new(name: impl Into<String>, breed: impl Into<String>, age: u32) -> Self {
        Self {
            status: PetStatus::Unhealthy,
            name: name.into(),
            breed: breed.into(),
            age,
        }
    }

    /// Override the admission status.
    pub fn with_status(mut self, status: PetStatus) -> Self {
        self.status = status;
        self
    }
}

/// A registered pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: PetId,
    /// Current lifecycle stage
    pub status: PetStatus,
    pub name: String,
    pub breed: String,
    /// Age in years
    pub age: u32,
    /// Registration timestamp
    pub registered_at: String,
    /// Last status change timestamp
    pub updated_at: String,
}

impl Pet {
    /// Build a pet record from a request under the given identity.
    pub fn from_request(id: PetId, request: PetRequest) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id,
            status: request.status,
            name: request.name,
            breed: request.breed,
            age: request.age,
            registered_at: now.clone(),
            updated_at: now,
        }
    }

    /// Copy of this record with a different status.
    pub fn with_status(&self, status: PetStatus) -> Self {
        Self {
            status,
            updated_at: chrono::Utc::now().to_rfc3339(),
            ..self.clone()
        }
    }
}
