//! Disease and medicine stores.

use std::collections::HashMap;

use tracing::trace;

use crate::models::{Disease, DiseaseId, Medicine, MedicineId};

/// In-memory disease records keyed by [`DiseaseId`].
#[derive(Debug, Default)]
pub struct DiseaseStore {
    diseases: HashMap<DiseaseId, Disease>,
}

impl DiseaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a disease and return its freshly assigned id.
    pub fn insert(&mut self, name: impl Into<String>) -> DiseaseId {
        let id = DiseaseId::new();
        let disease = Disease::new(id, name);
        trace!(disease = %id, name = %disease.name, "registering disease");
        self.diseases.insert(id, disease);
        id
    }

    pub fn exists(&self, id: DiseaseId) -> bool {
        self.diseases.contains_key(&id)
    }

    pub fn get(&self, id: DiseaseId) -> Option<&Disease> {
        self.diseases.get(&id)
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}

/// In-memory medicine records keyed by [`MedicineId`].
#[derive(Debug, Default)]
pub struct MedicineStore {
    medicines: HashMap<MedicineId, Medicine>,
}

impl MedicineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a medicine recommended for `disease`.
    ///
    /// The disease reference is not checked here.
    pub fn insert(&mut self, name: impl Into<String>, disease: DiseaseId) -> MedicineId {
        let id = MedicineId::new();
        let medicine = Medicine::new(id, name, disease);
        trace!(medicine = %id, disease = %disease, name = %medicine.name, "registering medicine");
        self.medicines.insert(id, medicine);
        id
    }

    pub fn exists(&self, id: MedicineId) -> bool {
        self.medicines.contains_key(&id)
    }

    pub fn get(&self, id: MedicineId) -> Option<&Medicine> {
        self.medicines.get(&id)
    }

    /// All medicines recommended for `disease`, in no particular order.
    pub fn find_by_disease(&self, disease: DiseaseId) -> Vec<Medicine> {
        self.medicines
            .values()
            .filter(|m| m.treats(disease))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_disease_insert_and_get() {
        let mut store = DiseaseStore::new();

        let id = store.insert("Toxoplasmosis");

        assert!(store.exists(id));
        assert_eq!(store.get(id).unwrap().name, "Toxoplasmosis");
        assert!(!store.exists(DiseaseId::new()));
        assert!(store.get(DiseaseId::new()).is_none());
    }

    #[test]
    fn test_duplicate_disease_names_allowed() {
        let mut store = DiseaseStore::new();

        let a = store.insert("Rabies");
        let b = store.insert("Rabies");

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_by_disease() {
        let mut diseases = DiseaseStore::new();
        let mut medicines = MedicineStore::new();

        let toxo = diseases.insert("Toxoplasmosis");
        let rabies = diseases.insert("Rabies");

        let pyrimethamine = medicines.insert("Pyrimethamine", toxo);
        let clindamycin = medicines.insert("Clindamycin", toxo);
        medicines.insert("Postexposure prophylaxis", rabies);

        let found: HashSet<MedicineId> = medicines
            .find_by_disease(toxo)
            .into_iter()
            .map(|m| m.id)
            .collect();

        assert_eq!(found, HashSet::from([pyrimethamine, clindamycin]));
    }

    #[test]
    fn test_find_by_disease_without_medicines() {
        let mut diseases = DiseaseStore::new();
        let mut medicines = MedicineStore::new();

        let tapeworm = diseases.insert("Cat Tapeworm");
        medicines.insert("Ceftriaxone", diseases.insert("Salmonellosis"));

        assert!(medicines.find_by_disease(tapeworm).is_empty());
    }

    #[test]
    fn test_medicine_get() {
        let mut medicines = MedicineStore::new();
        let disease = DiseaseId::new();

        let id = medicines.insert("Nitazoxanide", disease);

        let medicine = medicines.get(id).unwrap();
        assert_eq!(medicine.name, "Nitazoxanide");
        assert_eq!(medicine.disease, disease);
        assert!(medicines.exists(id));
        assert!(!medicines.is_empty());
    }
}
