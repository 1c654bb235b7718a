//! Shared constants for end-to-end tests
//!
//! These mirror the built-in seed albums.

// ============================================================================
// Seed Albums
// ============================================================================

/// Number of albums the server starts with
pub const SEED_ALBUMS_COUNT: usize = 10;

/// "Hybrid Theory" by Linkin Park
pub const ALBUM_2_ID: &str = "2";

/// "Ser Humano" by Tiro de Gracia
pub const ALBUM_3_ID: &str = "3";

/// "Master of Puppets" by Metallica
pub const ALBUM_5_ID: &str = "5";

pub const ALBUM_2_TITLE: &str = "Hybrid Theory";

pub const ALBUM_3_TITLE: &str = "Ser Humano";

pub const ALBUM_3_ARTIST: &str = "Tiro de Gracia";

pub const ALBUM_3_YEAR: i64 = 1997;

/// An id no seed album uses
pub const MISSING_ALBUM_ID: &str = "99";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
