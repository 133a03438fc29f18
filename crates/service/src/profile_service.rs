use std::sync::Arc;

use argo_core::{CoordRange, MAX_QUERY_LIMIT, Profile, ProfileBounds, ProfileFilter};
use argo_storage::Storage;

use crate::ServiceError;

/// Read access to `profiles`: range filtering and paginated listing.
pub struct ProfileService {
    storage: Arc<Storage>,
}

impl ProfileService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Profiles with `depth_m <= max_depth` inside both coordinate ranges
    /// (all bounds inclusive), ordered by `sample_id`.
    ///
    /// No match is an empty vector. Inverted or non-finite bounds are
    /// rejected rather than silently matching nothing.
    pub fn filter(
        &self,
        max_depth: f64,
        lat_range: CoordRange,
        lon_range: CoordRange,
    ) -> Result<Vec<Profile>, ServiceError> {
        self.filter_by(&ProfileFilter::new(max_depth, lat_range, lon_range))
    }

    pub fn filter_by(&self, filter: &ProfileFilter) -> Result<Vec<Profile>, ServiceError> {
        filter.validate()?;
        Ok(self.storage.query_profiles(filter)?)
    }

    /// First `limit` profiles by `sample_id`. Limits above
    /// [`MAX_QUERY_LIMIT`] are capped.
    pub fn paginated_profiles(&self, limit: i64) -> Result<Vec<Profile>, ServiceError> {
        if limit <= 0 {
            return Err(ServiceError::InvalidArgument(format!(
                "limit must be positive, got {limit}"
            )));
        }
        let capped = limit.min(MAX_QUERY_LIMIT);
        if capped < limit {
            tracing::debug!(requested = limit, capped, "profile limit capped");
        }
        let capped = usize::try_from(capped)
            .map_err(|_| ServiceError::InvalidArgument(format!("limit {limit} out of range")))?;
        Ok(self.storage.paginated_profiles(capped)?)
    }

    pub fn bounds(&self) -> Result<ProfileBounds, ServiceError> {
        Ok(self.storage.profile_bounds()?)
    }
}
