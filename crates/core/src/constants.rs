//! Shared constants for the ARGO data browser.
//!
//! Centralizes defaults used by the loader, the read API and the exports.

/// Store file name used when neither `--db` nor `ARGO_DB_PATH` is given.
pub const DEFAULT_DB_FILE: &str = "ocean_data.sqlite";

/// `SQLite` connection pool: default maximum connections.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// Number of profiles returned by `/profiles` when `limit` is omitted.
pub const DEFAULT_PROFILE_LIMIT: i64 = 10;

/// Maximum number of profiles for any paginated read (DoS protection).
pub const MAX_QUERY_LIMIT: i64 = 1000;

/// Rows rendered into the PDF export.
pub const PDF_ROW_LIMIT: usize = 20;

/// Maximum length of an annotation author, in characters.
pub const MAX_USER_LEN: usize = 100;

/// Maximum length of an annotation note, in characters.
pub const MAX_NOTE_LEN: usize = 5000;

/// Dashboard default for the maximum depth slider (metres).
pub const DEFAULT_MAX_DEPTH_M: f64 = 500.0;

/// Dashboard default latitude window.
pub const DEFAULT_LAT_RANGE: (f64, f64) = (-30.0, 30.0);

/// Dashboard default longitude window.
pub const DEFAULT_LON_RANGE: (f64, f64) = (-60.0, 60.0);
