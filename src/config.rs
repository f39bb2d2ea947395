/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the dashboard API. Override at build time with `MGNREGA_API_URL`.
    pub const API_BASE_URL: &'static str = match option_env!("MGNREGA_API_URL") {
        Some(url) => url,
        None => "http://localhost:8001/api",
    };

    /// Region filter applied to the district catalog (Uttar Pradesh)
    pub const STATE_CODE: &'static str = "UP";

    /// Number of months requested for the historical trend
    pub const HISTORY_MONTHS: u32 = 6;

    /// Upper bound on a single view's fetch, in milliseconds
    pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

    /// localStorage key holding the language preference
    pub const LANGUAGE_STORAGE_KEY: &'static str = "language";
}
