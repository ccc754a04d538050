//! The veterinarian: moves pets through their treatment lifecycle.

use tracing::{debug, info, warn};

use super::{TreatmentError, TreatmentResult};
use crate::models::{Disease, Medicine, Pet, PetId, PetStatus, Treatment};
use crate::store::{DiseaseStore, MedicineStore, PetDiseaseStore, PetMedicineStore, PetStore};

/// Coordinates the stores for a single request.
///
/// Every operation validates fully before it mutates anything, so a failed
/// call leaves all stores as they were.
pub struct Veterinarian<'a> {
    pets: &'a mut PetStore,
    diseases: &'a DiseaseStore,
    pet_diseases: &'a mut PetDiseaseStore,
    medicines: &'a MedicineStore,
    pet_medicines: &'a mut PetMedicineStore,
}

impl<'a> Veterinarian<'a> {
    /// Create a veterinarian over the given stores.
    pub fn new(
        pets: &'a mut PetStore,
        diseases: &'a DiseaseStore,
        pet_diseases: &'a mut PetDiseaseStore,
        medicines: &'a MedicineStore,
        pet_medicines: &'a mut PetMedicineStore,
    ) -> Self {
        Self {
            pets,
            diseases,
            pet_diseases,
            medicines,
            pet_medicines,
        }
    }

    /// Diagnose `pet` with `disease` and return the medicines recommended for it.
    ///
    /// Only pets that are unhealthy or already being cured can be diagnosed.
    pub fn diagnose(&mut self, pet: &Pet, disease: &Disease) -> TreatmentResult<Vec<Medicine>> {
        debug!(pet = %pet.id, disease = %disease.id, "diagnosing pet");

        let current = self.current_status(pet.id)?;
        if !self.diseases.exists(disease.id) {
            return Err(rejected(TreatmentError::DiseaseNotFound(disease.id)));
        }
        ensure_allowed(pet.id, current, Treatment::Diagnose)?;

        self.apply(pet.id, current, Treatment::Diagnose)?;
        self.pet_diseases.append(pet.id, disease.id);

        Ok(self.medicines.find_by_disease(disease.id))
    }

    /// Start curing a diagnosed `pet` with `medicines`.
    pub fn cure(&mut self, pet: &Pet, medicines: &[Medicine]) -> TreatmentResult<()> {
        debug!(pet = %pet.id, medicines = medicines.len(), "curing pet");

        let current = self.current_status(pet.id)?;
        ensure_allowed(pet.id, current, Treatment::Cure)?;

        self.apply(pet.id, current, Treatment::Cure)?;
        self.pet_medicines
            .append_all(pet.id, medicines.iter().map(|m| m.id));

        Ok(())
    }

    /// Mark `pet` as healthy, whatever its current status.
    pub fn mark_healthy(&mut self, pet: &Pet) -> TreatmentResult<()> {
        debug!(pet = %pet.id, "marking pet healthy");

        let current = self.current_status(pet.id)?;
        ensure_allowed(pet.id, current, Treatment::MarkHealthy)?;

        self.apply(pet.id, current, Treatment::MarkHealthy)
    }

    /// Status held by the store, which may differ from a stale caller copy.
    fn current_status(&self, pet: PetId) -> TreatmentResult<PetStatus> {
        self.pets
            .get(pet)
            .map(|p| p.status)
            .ok_or_else(|| rejected(TreatmentError::PetNotFound(pet)))
    }

    fn apply(&mut self, pet: PetId, from: PetStatus, treatment: Treatment) -> TreatmentResult<()> {
        let to = treatment.target();
        if !self.pets.update_status(pet, to) {
            return Err(rejected(TreatmentError::PetNotFound(pet)));
        }
        info!(pet = %pet, %from, %to, "pet status changed");
        Ok(())
    }
}

fn ensure_allowed(pet: PetId, status: PetStatus, operation: Treatment) -> TreatmentResult<()> {
    if status.allows(operation) {
        Ok(())
    } else {
        Err(rejected(TreatmentError::InvalidPetState {
            pet,
            status,
            operation,
        }))
    }
}

fn rejected(err: TreatmentError) -> TreatmentError {
    warn!(error = %err, "treatment rejected");
    err
}
