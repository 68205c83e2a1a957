use seat_client::ClientConfig;
use seat_client::config::{
    DEFAULT_FACE_PORT, DEFAULT_TABLES_PORT, DEFAULT_UPDATE_PORT, DEFAULT_USAGE_PORT,
};

/// Kiosk configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SEAT_SERVER_HOST | http://127.0.0.1 | seat server host |
/// | FACE_PORT | 5001 | face identification service |
/// | TABLES_PORT | 5002 | table list service |
/// | UPDATE_PORT | 5003 | table update service |
/// | USAGE_PORT | 5004 | usage check and cancellation service |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP timeout |
/// | LOG_LEVEL | info | log filter |
/// | LOG_JSON | false | JSON console logs |
/// | LOG_DIR | (unset) | directory for rolling log files |
/// | LAYOUT_SHEET | (unset) | layout sheet file; shows the board offline |
/// | END_TIMES | (unset) | end-time file for the layout sheet |
///
/// # Example
///
/// ```ignore
/// SEAT_SERVER_HOST=http://192.168.50.55 LOG_LEVEL=debug cargo run -p kiosk
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Seat server endpoints
    pub client: ClientConfig,
    /// Log filter, e.g. "info" or "kiosk=debug"
    pub log_level: String,
    /// JSON console output (production)
    pub log_json: bool,
    /// File logging directory
    pub log_dir: Option<String>,
    /// Layout sheet used instead of the table server for the usage board
    pub layout_sheet: Option<String>,
    /// `key: HH:mm` end times for the layout sheet
    pub end_times: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let host = std::env::var("SEAT_SERVER_HOST").unwrap_or_else(|_| "http://127.0.0.1".into());
        let client = ClientConfig::with_ports(
            host,
            env_parse("FACE_PORT", DEFAULT_FACE_PORT),
            env_parse("TABLES_PORT", DEFAULT_TABLES_PORT),
            env_parse("UPDATE_PORT", DEFAULT_UPDATE_PORT),
            env_parse("USAGE_PORT", DEFAULT_USAGE_PORT),
        )
        .with_timeout(env_parse("REQUEST_TIMEOUT_SECS", 30));

        Self {
            client,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON", false),
            log_dir: env_path("LOG_DIR"),
            layout_sheet: env_path("LAYOUT_SHEET"),
            end_times: env_path("END_TIMES"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            layout_sheet: None,
            end_times: None,
        }
    }
}

fn env_path(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|p| !p.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
