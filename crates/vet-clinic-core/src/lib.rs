//! Vet Clinic Core Library
//!
//! Tracks pets through their treatment lifecycle.
//!
//! # Lifecycle
//!
//! ```text
//!   UNHEALTHY ──diagnose──▶ DIAGNOSED ──cure──▶ CURE_IN_PROGRESS
//!                               ▲                      │
//!                               └──────diagnose────────┘
//!
//!   any status ──mark_healthy──▶ HEALTHY
//! ```
//!
//! Diagnosing records the disease in the pet's diagnosis history and returns
//! the medicines recommended for it. Curing records the administered
//! medicines in the pet's treatment history.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Pet, Disease, Medicine, PetStatus, etc.)
//! - [`store`]: In-memory stores, one per entity and history
//! - [`service`]: The [`Veterinarian`] enforcing legal status transitions
//! - [`config`]: Configuration and logging setup

pub mod config;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use config::{init_tracing, ClinicConfig, ConfigError};
pub use models::{
    Disease, DiseaseId, Medicine, MedicineId, Pet, PetChart, PetId, PetRequest, PetStatus,
    Treatment,
};
pub use service::{TreatmentError, TreatmentResult, Veterinarian};
pub use store::Stores;

use std::sync::{Arc, Mutex};

use thiserror::Error;

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error(transparent)]
    Treatment(#[from] TreatmentError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<serde_json::Error> for ClinicError {
    fn from(e: serde_json::Error) -> Self {
        ClinicError::Serialization(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for ClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicError::LockPoisoned(e.to_string())
    }
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe handle over one set of stores.
///
/// Cloning shares the same stores. Every call holds the lock for its whole
/// duration.
#[derive(Clone, Default)]
pub struct Clinic {
    stores: Arc<Mutex<Stores>>,
}

impl Clinic {
    /// Create a clinic with empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing stores.
    pub fn from_stores(stores: Stores) -> Self {
        Self {
            stores: Arc::new(Mutex::new(stores)),
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a pet.
    pub fn register_pet(&self, request: PetRequest) -> Result<Pet, ClinicError> {
        let mut stores = self.stores.lock()?;
        let id = stores.pets.insert(request);
        stores
            .pets
            .get(id)
            .cloned()
            .ok_or_else(|| ClinicError::NotFound(format!("pet {}", id)))
    }

    /// Register a disease.
    pub fn register_disease(&self, name: &str) -> Result<Disease, ClinicError> {
        let mut stores = self.stores.lock()?;
        let id = stores.diseases.insert(name);
        Ok(Disease::new(id, name))
    }

    /// Register a medicine recommended for `disease`.
    pub fn register_medicine(
        &self,
        name: &str,
        disease: DiseaseId,
    ) -> Result<Medicine, ClinicError> {
        let mut stores = self.stores.lock()?;
        let id = stores.medicines.insert(name, disease);
        Ok(Medicine::new(id, name, disease))
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn get_pet(&self, id: PetId) -> Result<Option<Pet>, ClinicError> {
        let stores = self.stores.lock()?;
        Ok(stores.pets.get(id).cloned())
    }

    pub fn get_disease(&self, id: DiseaseId) -> Result<Option<Disease>, ClinicError> {
        let stores = self.stores.lock()?;
        Ok(stores.diseases.get(id).cloned())
    }

    pub fn get_medicine(&self, id: MedicineId) -> Result<Option<Medicine>, ClinicError> {
        let stores = self.stores.lock()?;
        Ok(stores.medicines.get(id).cloned())
    }

    /// Diseases the pet has been diagnosed with, oldest first.
    pub fn diagnosis_history(&self, pet: PetId) -> Result<Vec<DiseaseId>, ClinicError> {
        let stores = self.stores.lock()?;
        Ok(stores.pet_diseases.related(pet).to_vec())
    }

    /// Medicines the pet has been given, oldest first.
    pub fn treatment_history(&self, pet: PetId) -> Result<Vec<MedicineId>, ClinicError> {
        let stores = self.stores.lock()?;
        Ok(stores.pet_medicines.related(pet).to_vec())
    }

    // =========================================================================
    // Treatment
    // =========================================================================

    /// See [`Veterinarian::diagnose`].
    pub fn diagnose(&self, pet: &Pet, disease: &Disease) -> Result<Vec<Medicine>, ClinicError> {
        let mut stores = self.stores.lock()?;
        let recommended = stores.veterinarian().diagnose(pet, disease)?;
        Ok(recommended)
    }

    /// See [`Veterinarian::cure`].
    pub fn cure(&self, pet: &Pet, medicines: &[Medicine]) -> Result<(), ClinicError> {
        let mut stores = self.stores.lock()?;
        stores.veterinarian().cure(pet, medicines)?;
        Ok(())
    }

    /// See [`Veterinarian::mark_healthy`].
    pub fn mark_healthy(&self, pet: &Pet) -> Result<(), ClinicError> {
        let mut stores = self.stores.lock()?;
        stores.veterinarian().mark_healthy(pet)?;
        Ok(())
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Export a pet's chart as JSON.
    pub fn export_chart_json(&self, pet: PetId) -> Result<String, ClinicError> {
        let stores = self.stores.lock()?;
        let chart = stores
            .chart(pet)
            .ok_or_else(|| ClinicError::NotFound(format!("pet {}", pet)))?;
        Ok(chart.to_json()?)
    }
}
