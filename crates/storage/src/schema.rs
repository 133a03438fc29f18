//! Table definitions.
//!
//! There is no schema versioning: `profiles` is dropped and recreated on
//! every load, `annotations` is created once and never altered.

use rusqlite::{Connection, OptionalExtension as _, params};

pub(crate) const RECREATE_PROFILES: &str = r#"
DROP TABLE IF EXISTS profiles;

CREATE TABLE profiles (
    sample_id INTEGER PRIMARY KEY,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    depth_m REAL NOT NULL,
    "temperature_C" REAL NOT NULL,
    salinity_psu REAL NOT NULL,
    density_kg_m3 REAL NOT NULL,
    current_speed_m_s REAL NOT NULL
);

CREATE INDEX idx_profiles_depth ON profiles(depth_m);
"#;

pub(crate) const INSERT_PROFILE: &str = r#"
INSERT INTO profiles
    (sample_id, latitude, longitude, depth_m, "temperature_C", salinity_psu, density_kg_m3, current_speed_m_s)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

/// Column list shared by every profile read; order matches `row_to_profile`.
pub(crate) const PROFILE_SELECT: &str = r#"
SELECT sample_id, latitude, longitude, depth_m, "temperature_C", salinity_psu, density_kg_m3, current_speed_m_s
FROM profiles
"#;

pub(crate) const CREATE_ANNOTATIONS: &str = "
CREATE TABLE IF NOT EXISTS annotations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sample_id INTEGER NOT NULL,
    user TEXT NOT NULL,
    note TEXT NOT NULL,
    timestamp DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_annotations_sample ON annotations(sample_id);
";

pub(crate) fn table_exists(conn: &Connection, table: &str) -> Result<bool, rusqlite::Error> {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
}

pub(crate) fn ensure_annotations(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(CREATE_ANNOTATIONS)
}
