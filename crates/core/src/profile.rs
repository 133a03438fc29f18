use serde::{Deserialize, Serialize};

/// Column names of the `profiles` table, in storage order.
pub const PROFILE_COLUMNS: [&str; 8] = [
    "sample_id",
    "latitude",
    "longitude",
    "depth_m",
    "temperature_C",
    "salinity_psu",
    "density_kg_m3",
    "current_speed_m_s",
];

/// One immutable sensor sample from an ARGO float.
///
/// Field names on the wire and in the store match the source CSV header,
/// including the capitalised `temperature_C`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub sample_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_m: f64,
    #[serde(rename = "temperature_C")]
    pub temperature_c: f64,
    pub salinity_psu: f64,
    pub density_kg_m3: f64,
    pub current_speed_m_s: f64,
}

impl Profile {
    /// Values in [`PROFILE_COLUMNS`] order, minus `sample_id`.
    pub fn measurements(&self) -> [f64; 7] {
        [
            self.latitude,
            self.longitude,
            self.depth_m,
            self.temperature_c,
            self.salinity_psu,
            self.density_kg_m3,
            self.current_speed_m_s,
        ]
    }

    /// Checks the positional invariants the store itself does not enforce.
    ///
    /// Returns a human-readable reason on violation.
    pub fn check_invariants(&self) -> Result<(), String> {
        if let Some(idx) = self.measurements().iter().position(|v| !v.is_finite()) {
            let column = PROFILE_COLUMNS.get(idx.saturating_add(1)).copied().unwrap_or("?");
            return Err(format!("sample {}: {column} is not a finite number", self.sample_id));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!(
                "sample {}: latitude {} outside [-90, 90]",
                self.sample_id, self.latitude
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!(
                "sample {}: longitude {} outside [-180, 180]",
                self.sample_id, self.longitude
            ));
        }
        if self.depth_m < 0.0 {
            return Err(format!("sample {}: negative depth {}", self.sample_id, self.depth_m));
        }
        Ok(())
    }
}

/// Extent of the loaded profile table, used to size dashboard inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileBounds {
    pub count: u64,
    pub max_depth_m: Option<f64>,
    pub min_sample_id: Option<i64>,
    pub max_sample_id: Option<i64>,
}
