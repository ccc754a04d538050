//! Disease and medicine models.

use serde::{Deserialize, Serialize};

use super::{DiseaseId, MedicineId};

/// A known disease.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Disease {
    pub id: DiseaseId,
    pub name: String,
}

impl Disease {
    pub fn new(id: DiseaseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A medicine and the disease it is recommended for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Medicine {
    pub id: MedicineId,
    pub name: String,
    /// Disease this medicine treats
    pub disease: DiseaseId,
}

impl Medicine {
    pub fn new(id: MedicineId, name: impl Into<String>, disease: DiseaseId) -> Self {
        Self {
            id,
            name: name.into(),
            disease,
        }
    }

    /// Check if this medicine is recommended for `disease`.
    pub fn treats(&self, disease: DiseaseId) -> bool {
        self.disease == disease
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medicine_treats() {
        let toxoplasmosis = Disease::new(DiseaseId::new(), "Toxoplasmosis");
        let rabies = Disease::new(DiseaseId::new(), "Rabies");
        let pyrimethamine = Medicine::new(MedicineId::new(), "Pyrimethamine", toxoplasmosis.id);

        assert!(pyrimethamine.treats(toxoplasmosis.id));
        assert!(!pyrimethamine.treats(rabies.id));
    }
}
