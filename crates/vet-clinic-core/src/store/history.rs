//! Append-only per-pet histories.

use std::collections::HashMap;

use crate::models::{DiseaseId, MedicineId, PetId};

/// Maps a pet to an ordered, append-only list of related ids.
#[derive(Debug)]
pub struct PetHistory<T> {
    entries: HashMap<PetId, Vec<T>>,
}

/// Diseases each pet has been diagnosed with.
pub type PetDiseaseStore = PetHistory<DiseaseId>;

/// Medicines each pet has been given.
pub type PetMedicineStore = PetHistory<MedicineId>;

impl<T> Default for PetHistory<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Copy> PetHistory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry to the pet's history.
    pub fn append(&mut self, pet: PetId, related: T) {
        self.entries.entry(pet).or_default().push(related);
    }

    /// Append a batch of entries, preserving their order.
    pub fn append_all<I>(&mut self, pet: PetId, related: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.entries.entry(pet).or_default().extend(related);
    }

    /// The pet's history, oldest first. Empty if the pet has none.
    pub fn related(&self, pet: PetId) -> &[T] {
        self.entries.get(&pet).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the pet has any history at all.
    pub fn exists(&self, pet: PetId) -> bool {
        self.entries.contains_key(&pet)
    }

    /// Number of pets with a history.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
