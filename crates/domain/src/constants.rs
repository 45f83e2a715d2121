//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Display name reported for a session that never saved one.
pub const DEFAULT_DISPLAY_NAME: &str = "Jogador";

/// Base URL of the diary backend.
pub const DEFAULT_API_BASE_URL: &str = "https://api-jogadores.onrender.com";

/// Request timeout applied to API calls unless configured otherwise.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Default on-device database file name.
pub const DEFAULT_DB_FILE: &str = "playerlog.db";

/// Default session document file name.
pub const DEFAULT_SESSION_FILE: &str = "session.json";

// Date handling. The backend sends ISO dates (optionally with a time suffix);
// the UI renders Brazilian day-first dates.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
pub const EMPTY_DATE_PLACEHOLDER: &str = "--/--/----";
