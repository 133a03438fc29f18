//! Request/query types (Deserialize)

use argo_core::{CoordRange, DEFAULT_PROFILE_LIMIT, ProfileFilter};
use serde::Deserialize;

const fn default_limit() -> i64 {
    DEFAULT_PROFILE_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct ProfilesQuery {
    /// Signed: `limit <= 0` is rejected by the service with a 400.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Dashboard filter inputs. Missing values fall back to the dashboard
/// defaults of [`ProfileFilter::default`].
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub max_depth: Option<f64>,
    pub lat_min: Option<f64>,
    pub lat_max: Option<f64>,
    pub lon_min: Option<f64>,
    pub lon_max: Option<f64>,
}

impl FilterQuery {
    pub fn into_filter(self) -> ProfileFilter {
        let defaults = ProfileFilter::default();
        ProfileFilter::new(
            self.max_depth.unwrap_or(defaults.max_depth),
            CoordRange::new(
                self.lat_min.unwrap_or(defaults.latitude.min),
                self.lat_max.unwrap_or(defaults.latitude.max),
            ),
            CoordRange::new(
                self.lon_min.unwrap_or(defaults.longitude.min),
                self.lon_max.unwrap_or(defaults.longitude.max),
            ),
        )
    }
}
