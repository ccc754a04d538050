//! Domain models for the vet clinic.

mod chart;
mod disease;
mod ids;
mod lifecycle;
mod pet;

pub use chart::*;
pub use disease::*;
pub use ids::*;
pub use lifecycle::*;
pub use pet::*;
