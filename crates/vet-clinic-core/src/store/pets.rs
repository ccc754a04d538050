//! Pet store.

use std::collections::HashMap;

use tracing::trace;

use crate::models::{Pet, PetId, PetRequest, PetStatus};

/// In-memory pet records keyed by [`PetId`].
#[derive(Debug, Default)]
pub struct PetStore {
    pets: HashMap<PetId, Pet>,
}

impl PetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pet and return its freshly assigned id.
    pub fn insert(&mut self, request: PetRequest) -> PetId {
        let id = PetId::new();
        trace!(pet = %id, name = %request.name, "registering pet");
        self.pets.insert(id, Pet::from_request(id, request));
        id
    }

    pub fn exists(&self, id: PetId) -> bool {
        self.pets.contains_key(&id)
    }

    pub fn get(&self, id: PetId) -> Option<&Pet> {
        self.pets.get(&id)
    }

    /// Replace a pet's status, keeping every other field.
    ///
    /// Returns `false` without touching anything if the pet is unknown.
    pub fn update_status(&mut self, id: PetId, status: PetStatus) -> bool {
        match self.pets.get(&id) {
            Some(pet) => {
                let updated = pet.with_status(status);
                self.pets.insert(id, updated);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}
