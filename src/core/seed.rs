use crate::{core::store::StoreSnapshotV1, doctor::DoctorRecord, error::StoreError};

const SEED_JSON: &str = include_str!("seed.json");

/// Decodes the five demo doctors shipped with the crate, in insertion order.
pub fn seed_records() -> Result<Vec<DoctorRecord>, StoreError> {
    Ok(serde_json::from_str(SEED_JSON)?)
}

/// Seed records wrapped as an importable snapshot.
pub fn seed_snapshot() -> Result<StoreSnapshotV1, StoreError> {
    Ok(StoreSnapshotV1 {
        records: seed_records()?,
    })
}
