//! Test utilities and module declarations for storage tests.

use crate::Storage;
use argo_core::Profile;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.sqlite");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_profile(sample_id: i64, depth_m: f64, latitude: f64, longitude: f64) -> Profile {
    Profile {
        sample_id,
        latitude,
        longitude,
        depth_m,
        temperature_c: 12.0 + sample_id as f64 * 0.1,
        salinity_psu: 35.0,
        density_kg_m3: 1026.0,
        current_speed_m_s: 0.2,
    }
}

/// Ten shallow profiles on a diagonal, `sample_id` 1..=10.
pub fn create_test_profiles() -> Vec<Profile> {
    (1..=10)
        .map(|i| create_test_profile(i, i as f64 * 10.0, i as f64, i as f64 * 2.0))
        .collect()
}

mod loader_tests;
mod profile_tests;
