//! Inclusive range filter over profiles.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_LAT_RANGE, DEFAULT_LON_RANGE, DEFAULT_MAX_DEPTH_M, FilterError, Profile};

/// Closed interval `[min, max]` in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordRange {
    pub min: f64,
    pub max: f64,
}

impl CoordRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both ends inclusive.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    fn check(&self, axis: &'static str) -> Result<(), FilterError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(FilterError::NonFinite { axis });
        }
        if self.min > self.max {
            return Err(FilterError::InvertedRange { axis, min: self.min, max: self.max });
        }
        Ok(())
    }
}

/// Bounding constraints selecting a subset of profiles.
///
/// A profile matches when `depth_m <= max_depth` and both coordinates lie
/// inside their ranges, all bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileFilter {
    pub max_depth: f64,
    pub latitude: CoordRange,
    pub longitude: CoordRange,
}

impl Default for ProfileFilter {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH_M,
            latitude: CoordRange::new(DEFAULT_LAT_RANGE.0, DEFAULT_LAT_RANGE.1),
            longitude: CoordRange::new(DEFAULT_LON_RANGE.0, DEFAULT_LON_RANGE.1),
        }
    }
}

impl ProfileFilter {
    pub const fn new(max_depth: f64, latitude: CoordRange, longitude: CoordRange) -> Self {
        Self { max_depth, latitude, longitude }
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        profile.depth_m <= self.max_depth
            && self.latitude.contains(profile.latitude)
            && self.longitude.contains(profile.longitude)
    }

    /// Rejects bounds that can only ever select nothing.
    ///
    /// # Errors
    /// Returns [`FilterError`] for NaN/infinite bounds or `min > max`.
    pub fn validate(&self) -> Result<(), FilterError> {
        if !self.max_depth.is_finite() {
            return Err(FilterError::NonFinite { axis: "max_depth" });
        }
        self.latitude.check("latitude")?;
        self.longitude.check("longitude")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(depth_m: f64, latitude: f64, longitude: f64) -> Profile {
        Profile {
            sample_id: 1,
            latitude,
            longitude,
            depth_m,
            temperature_c: 10.0,
            salinity_psu: 35.0,
            density_kg_m3: 1025.0,
            current_speed_m_s: 0.1,
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let filter = ProfileFilter::new(500.0, CoordRange::new(-30.0, 30.0), CoordRange::new(-60.0, 60.0));
        assert!(filter.matches(&at(500.0, 30.0, -60.0)));
        assert!(filter.matches(&at(0.0, -30.0, 60.0)));
        assert!(!filter.matches(&at(500.1, 0.0, 0.0)));
        assert!(!filter.matches(&at(10.0, 30.01, 0.0)));
        assert!(!filter.matches(&at(10.0, 0.0, -60.01)));
    }

    #[test]
    fn default_matches_dashboard_window() {
        let filter = ProfileFilter::default();
        assert_eq!(filter.max_depth, 500.0);
        assert_eq!(filter.latitude, CoordRange::new(-30.0, 30.0));
        assert_eq!(filter.longitude, CoordRange::new(-60.0, 60.0));
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn inverted_range_is_invalid_but_matches_nothing() {
        let filter = ProfileFilter::new(500.0, CoordRange::new(10.0, -10.0), CoordRange::new(-60.0, 60.0));
        assert!(matches!(
            filter.validate(),
            Err(FilterError::InvertedRange { axis: "latitude", .. })
        ));
        assert!(!filter.matches(&at(0.0, 0.0, 0.0)));
    }

    #[test]
    fn nan_bounds_are_invalid() {
        let filter = ProfileFilter::new(f64::NAN, CoordRange::new(-1.0, 1.0), CoordRange::new(-1.0, 1.0));
        assert_eq!(filter.validate(), Err(FilterError::NonFinite { axis: "max_depth" }));

        let filter = ProfileFilter::new(1.0, CoordRange::new(-1.0, 1.0), CoordRange::new(f64::NAN, 1.0));
        assert_eq!(filter.validate(), Err(FilterError::NonFinite { axis: "longitude" }));
    }
}
