//! Pet chart: a pet's record together with its resolved histories.

use serde::{Deserialize, Serialize};

use super::{Disease, Medicine, Pet};

/// Snapshot of everything the clinic knows about one pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetChart {
    pub pet: Pet,
    /// Diagnoses, oldest first
    pub diagnoses: Vec<Disease>,
    /// Administered medicines, oldest first
    pub treatments: Vec<Medicine>,
    /// Export timestamp
    pub exported_at: String,
}

impl PetChart {
    pub fn new(pet: Pet, diagnoses: Vec<Disease>, treatments: Vec<Medicine>) -> Self {
        Self {
            pet,
            diagnoses,
            treatments,
            exported_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Most recent diagnosis, if any.
    pub fn latest_diagnosis(&self) -> Option<&Disease> {
        self.diagnoses.last()
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
