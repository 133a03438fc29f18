use std::collections::HashSet;

use argo_core::{Profile, ProfileBounds, ProfileFilter};
use rusqlite::params;

use super::{Storage, get_conn};
use crate::StorageError;
use crate::schema::{self, INSERT_PROFILE, PROFILE_SELECT, RECREATE_PROFILES};

impl Storage {
    /// Replace the whole `profiles` table with `rows`.
    ///
    /// Drop, recreate and insert run in one transaction: on any failure the
    /// previous table is left as it was. `annotations` is never touched.
    ///
    /// # Errors
    /// Returns [`StorageError::Schema`] if two rows share a `sample_id`,
    /// or a database error if the transaction fails.
    pub fn replace_profiles(&self, rows: &[Profile]) -> Result<usize, StorageError> {
        let mut seen = HashSet::with_capacity(rows.len());
        if let Some(dup) = rows.iter().find(|p| !seen.insert(p.sample_id)) {
            return Err(StorageError::Schema(format!(
                "sample_id {} appears more than once",
                dup.sample_id
            )));
        }

        let _guard = self.write_profiles_guard()?;
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        tx.execute_batch(RECREATE_PROFILES)?;
        {
            let mut stmt = tx.prepare(INSERT_PROFILE)?;
            for p in rows {
                stmt.execute(params![
                    p.sample_id,
                    p.latitude,
                    p.longitude,
                    p.depth_m,
                    p.temperature_c,
                    p.salinity_psu,
                    p.density_kg_m3,
                    p.current_speed_m_s,
                ])?;
            }
        }
        tx.commit()?;

        tracing::info!(rows = rows.len(), "profiles table replaced");
        Ok(rows.len())
    }

    /// All profiles matching `filter`, ordered by `sample_id`.
    ///
    /// Bounds are bound as parameters and applied inclusively. An inverted
    /// range simply matches nothing; validation is the caller's concern.
    /// Returns an empty vector if no load has run yet.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn query_profiles(&self, filter: &ProfileFilter) -> Result<Vec<Profile>, StorageError> {
        let _guard = self.read_profiles_guard()?;
        let conn = get_conn(&self.pool)?;
        if !schema::table_exists(&conn, "profiles")? {
            return Ok(Vec::new());
        }
        let sql = format!(
            "{PROFILE_SELECT} WHERE depth_m <= ?1
               AND latitude BETWEEN ?2 AND ?3
               AND longitude BETWEEN ?4 AND ?5
             ORDER BY sample_id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(
                params![
                    filter.max_depth,
                    filter.latitude.min,
                    filter.latitude.max,
                    filter.longitude.min,
                    filter.longitude.max,
                ],
                row_to_profile,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(matched = rows.len(), ?filter, "profile filter executed");
        Ok(rows)
    }

    /// Up to `limit` profiles ordered by `sample_id`.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidArgument`] if `limit` is zero, or a
    /// database error if the query fails.
    pub fn paginated_profiles(&self, limit: usize) -> Result<Vec<Profile>, StorageError> {
        if limit == 0 {
            return Err(StorageError::InvalidArgument("limit must be positive".to_owned()));
        }
        let _guard = self.read_profiles_guard()?;
        let conn = get_conn(&self.pool)?;
        if !schema::table_exists(&conn, "profiles")? {
            return Ok(Vec::new());
        }
        let sql = format!("{PROFILE_SELECT} ORDER BY sample_id LIMIT ?1");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![limit as i64], row_to_profile)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Row count, maximum depth and sample id extent of `profiles`.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn profile_bounds(&self) -> Result<ProfileBounds, StorageError> {
        let _guard = self.read_profiles_guard()?;
        let conn = get_conn(&self.pool)?;
        if !schema::table_exists(&conn, "profiles")? {
            return Ok(ProfileBounds::default());
        }
        let bounds = conn.query_row(
            "SELECT COUNT(*), MAX(depth_m), MIN(sample_id), MAX(sample_id) FROM profiles",
            [],
            |row| {
                let count: i64 = row.get(0)?;
                Ok(ProfileBounds {
                    count: count as u64,
                    max_depth_m: row.get(1)?,
                    min_sample_id: row.get(2)?,
                    max_sample_id: row.get(3)?,
                })
            },
        )?;
        Ok(bounds)
    }
}

fn row_to_profile(row: &rusqlite::Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        sample_id: row.get(0)?,
        latitude: row.get(1)?,
        longitude: row.get(2)?,
        depth_m: row.get(3)?,
        temperature_c: row.get(4)?,
        salinity_psu: row.get(5)?,
        density_kg_m3: row.get(6)?,
        current_speed_m_s: row.get(7)?,
    })
}
