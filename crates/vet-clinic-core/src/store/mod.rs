//! In-memory stores for the vet clinic.
//!
//! Each store owns its own records; nothing here spans stores transactionally.
//! [`Stores`] bundles one of each so a caller can build isolated instances and
//! hand them to the [`Veterinarian`].

mod catalog;
mod history;
mod pets;

pub use catalog::*;
pub use history::*;
pub use pets::*;

use crate::models::{PetChart, PetId};
use crate::service::Veterinarian;

/// One instance of every store.
#[derive(Debug, Default)]
pub struct Stores {
    pub pets: PetStore,
    pub diseases: DiseaseStore,
    pub medicines: MedicineStore,
    pub pet_diseases: PetDiseaseStore,
    pub pet_medicines: PetMedicineStore,
}

impl Stores {
    /// Create empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the stores as a veterinarian for one request.
    pub fn veterinarian(&mut self) -> Veterinarian<'_> {
        Veterinarian::new(
            &mut self.pets,
            &self.diseases,
            &mut self.pet_diseases,
            &self.medicines,
            &mut self.pet_medicines,
        )
    }

    /// Gather a pet's chart, resolving history ids to records.
    ///
    /// History entries whose record is missing are skipped.
    pub fn chart(&self, pet: PetId) -> Option<PetChart> {
        let record = self.pets.get(pet)?.clone();

        let diagnoses = self
            .pet_diseases
            .related(pet)
            .iter()
            .filter_map(|id| self.diseases.get(*id).cloned())
            .collect();

        let treatments = self
            .pet_medicines
            .related(pet)
            .iter()
            .filter_map(|id| self.medicines.get(*id).cloned())
            .collect();

        Some(PetChart::new(record, diagnoses, treatments))
    }
}
