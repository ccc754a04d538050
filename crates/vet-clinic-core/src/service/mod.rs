//! Treatment workflow.
//!
//! Diagnose → Cure → Mark healthy, each gated by the pet's current status.

mod veterinarian;

pub use veterinarian::*;

use thiserror::Error;

use crate::models::{DiseaseId, PetId, PetStatus, Treatment};

/// Treatment errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreatmentError {
    #[error("Pet {0} not found")]
    PetNotFound(PetId),

    #[error("Disease {0} not found")]
    DiseaseNotFound(DiseaseId),

    #[error("Pet {pet} has incorrect status {status} and should not be {}", .operation.past_tense())]
    InvalidPetState {
        pet: PetId,
        status: PetStatus,
        operation: Treatment,
    },
}

pub type TreatmentResult<T> = Result<T, TreatmentError>;
