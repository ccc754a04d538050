//! Pet health lifecycle and the treatment transition table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle stage of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetStatus {
    /// Sick, not yet examined
    Unhealthy,
    /// A disease has been assigned
    Diagnosed,
    /// Medicines have been administered
    CureInProgress,
    /// Recovered
    Healthy,
}

/// An operation the veterinarian can perform on a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    Diagnose,
    Cure,
    MarkHealthy,
}

/// Rows: current status. Columns: `[Diagnose, Cure, MarkHealthy]`.
const TRANSITIONS: [(PetStatus, [bool; 3]); 4] = [
    (PetStatus::Unhealthy, [true, false, true]),
    (PetStatus::Diagnosed, [false, true, true]),
    (PetStatus::CureInProgress, [true, false, true]),
    (PetStatus::Healthy, [false, false, true]),
];

impl PetStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [PetStatus; 4] = [
        PetStatus::Unhealthy,
        PetStatus::Diagnosed,
        PetStatus::CureInProgress,
        PetStatus::Healthy,
    ];

    /// Whether a pet in this status may undergo `treatment`.
    pub fn allows(self, treatment: Treatment) -> bool {
        TRANSITIONS
            .iter()
            .find(|(status, _)| *status == self)
            .map(|(_, row)| row[treatment.column()])
            .unwrap_or(false)
    }

    /// Treatments permitted from this status.
    pub fn allowed_treatments(self) -> Vec<Treatment> {
        Treatment::ALL
            .into_iter()
            .filter(|t| self.allows(*t))
            .collect()
    }

    /// Canonical upper-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            PetStatus::Unhealthy => "UNHEALTHY",
            PetStatus::Diagnosed => "DIAGNOSED",
            PetStatus::CureInProgress => "CURE_IN_PROGRESS",
            PetStatus::Healthy => "HEALTHY",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognized status name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown pet status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for PetStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UNHEALTHY" => Ok(PetStatus::Unhealthy),
            "DIAGNOSED" => Ok(PetStatus::Diagnosed),
            "CURE_IN_PROGRESS" => Ok(PetStatus::CureInProgress),
            "HEALTHY" => Ok(PetStatus::Healthy),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl Treatment {
    pub const ALL: [Treatment; 3] = [Treatment::Diagnose, Treatment::Cure, Treatment::MarkHealthy];

    /// Status a pet ends up in after this treatment succeeds.
    pub fn target(self) -> PetStatus {
        match self {
            Treatment::Diagnose => PetStatus::Diagnosed,
            Treatment::Cure => PetStatus::CureInProgress,
            Treatment::MarkHealthy => PetStatus::Healthy,
        }
    }

    /// Past participle used in error messages ("should not be diagnosed").
    pub fn past_tense(self) -> &'static str {
        match self {
            Treatment::Diagnose => "diagnosed",
            Treatment::Cure => "cured",
            Treatment::MarkHealthy => "marked as healthy",
        }
    }

    fn column(self) -> usize {
        match self {
            Treatment::Diagnose => 0,
            Treatment::Cure => 1,
            Treatment::MarkHealthy => 2,
        }
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Treatment::Diagnose => "diagnose",
            Treatment::Cure => "cure",
            Treatment::MarkHealthy => "mark_healthy",
        };
        f.write_str(name)
    }
}
