//! Clinic demo - walks one pet through the full treatment lifecycle.
//!
//! Usage: `clinic-demo [config.toml]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use vet_clinic_core::{init_tracing, Clinic, ClinicConfig, PetRequest};

fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ClinicConfig::load_or_default(config_path.as_deref());
    init_tracing(&config)?;

    info!("Clinic demo v{} starting", env!("CARGO_PKG_VERSION"));

    let clinic = Clinic::new();
    let marcel = clinic.register_pet(PetRequest::new("Marcel", "Birman Cat", 4))?;
    let toxoplasmosis = clinic.register_disease("Toxoplasmosis")?;
    clinic.register_medicine("Pyrimethamine", toxoplasmosis.id)?;

    let recommended = clinic.diagnose(&marcel, &toxoplasmosis)?;
    info!("Recommended {} medicine(s) for {}", recommended.len(), toxoplasmosis.name);

    clinic.cure(&marcel, &recommended)?;
    clinic.mark_healthy(&marcel)?;

    let chart = clinic
        .export_chart_json(marcel.id)
        .context("exporting chart")?;
    println!("{}", chart);

    Ok(())
}
