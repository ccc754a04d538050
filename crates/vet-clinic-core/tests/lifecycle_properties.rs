//! Property tests for the treatment lifecycle.

use proptest::prelude::*;
use vet_clinic_core::models::{Disease, Medicine, Pet, PetRequest, PetStatus, Treatment};
use vet_clinic_core::store::Stores;
use vet_clinic_core::TreatmentError;

fn arb_status() -> impl Strategy<Value = PetStatus> {
    prop::sample::select(PetStatus::ALL.to_vec())
}

#[derive(Debug, Clone)]
enum Op {
    /// Diagnose with the disease at this index
    Diagnose(usize),
    /// Cure with this many medicines of the last diagnosed disease
    Cure(usize),
    MarkHealthy,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3).prop_map(Op::Diagnose),
        (0usize..4).prop_map(Op::Cure),
        Just(Op::MarkHealthy),
    ]
}

struct Fixture {
    stores: Stores,
    pet: Pet,
    diseases: Vec<Disease>,
    medicines: Vec<Vec<Medicine>>,
}

/// A pet plus three diseases with 0, 1 and 2 medicines each.
fn fixture(status: PetStatus) -> Fixture {
    let mut stores = Stores::new();
    let pet_id = stores
        .pets
        .insert(PetRequest::new("Marcel", "Birman Cat", 4).with_status(status));
    let pet = stores.pets.get(pet_id).unwrap().clone();

    let mut diseases = Vec::new();
    let mut medicines = Vec::new();
    for (i, name) in ["Cat Tapeworm", "Toxoplasmosis", "Rabies"].iter().enumerate() {
        let id = stores.diseases.insert(*name);
        diseases.push(Disease::new(id, *name));
        let meds: Vec<Medicine> = (0..i)
            .map(|n| {
                let med_name = format!("{} remedy {}", name, n);
                let med_id = stores.medicines.insert(med_name.clone(), id);
                Medicine::new(med_id, med_name, id)
            })
            .collect();
        medicines.push(meds);
    }

    Fixture {
        stores,
        pet,
        diseases,
        medicines,
    }
}

proptest! {
    /// Diagnosis succeeds exactly when the table allows it, and a rejection
    /// changes nothing.
    #[test]
    fn diagnose_follows_transition_table(status in arb_status(), disease in 0usize..3) {
        let mut fx = fixture(status);
        let target = fx.diseases[disease].clone();

        let result = fx.stores.veterinarian().diagnose(&fx.pet, &target);
        let stored = fx.stores.pets.get(fx.pet.id).unwrap().status;

        if status.allows(Treatment::Diagnose) {
            let recommended = result.unwrap();
            let mut got: Vec<_> = recommended.iter().map(|m| m.id).collect();
            let mut expected: Vec<_> = fx.medicines[disease].iter().map(|m| m.id).collect();
            got.sort();
            expected.sort();
            prop_assert_eq!(got, expected);
            prop_assert_eq!(stored, PetStatus::Diagnosed);
            prop_assert_eq!(fx.stores.pet_diseases.related(fx.pet.id), &[target.id][..]);
        } else {
            let is_invalid_state = matches!(result, Err(TreatmentError::InvalidPetState { .. }));
            prop_assert!(is_invalid_state);
            prop_assert_eq!(stored, status);
            prop_assert!(fx.stores.pet_diseases.related(fx.pet.id).is_empty());
        }
    }

    /// After any sequence of operations, the stored status is what replaying
    /// the table predicts, and histories grow only on success.
    #[test]
    fn any_sequence_matches_model(
        status in arb_status(),
        ops in prop::collection::vec(arb_op(), 0..20),
    ) {
        let mut fx = fixture(status);
        let mut model = status;
        let mut diagnoses = 0usize;
        let mut treatments = 0usize;
        let mut last_disease = 0usize;

        for op in ops {
            let mut vet = fx.stores.veterinarian();
            match op {
                Op::Diagnose(i) => {
                    let ok = vet.diagnose(&fx.pet, &fx.diseases[i]).is_ok();
                    prop_assert_eq!(ok, model.allows(Treatment::Diagnose));
                    if ok {
                        model = Treatment::Diagnose.target();
                        diagnoses += 1;
                        last_disease = i;
                    }
                }
                Op::Cure(n) => {
                    let available = &fx.medicines[last_disease];
                    let given = &available[..n.min(available.len())];
                    let ok = vet.cure(&fx.pet, given).is_ok();
                    prop_assert_eq!(ok, model.allows(Treatment::Cure));
                    if ok {
                        model = Treatment::Cure.target();
                        treatments += given.len();
                    }
                }
                Op::MarkHealthy => {
                    prop_assert!(vet.mark_healthy(&fx.pet).is_ok());
                    model = Treatment::MarkHealthy.target();
                }
            }
        }

        prop_assert_eq!(fx.stores.pets.get(fx.pet.id).unwrap().status, model);
        prop_assert_eq!(fx.stores.pet_diseases.related(fx.pet.id).len(), diagnoses);
        prop_assert_eq!(fx.stores.pet_medicines.related(fx.pet.id).len(), treatments);
    }
}
