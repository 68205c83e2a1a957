//! Client configuration

use std::time::Duration;

/// Default service ports on the seat server host
pub const DEFAULT_FACE_PORT: u16 = 5001;
pub const DEFAULT_TABLES_PORT: u16 = 5002;
pub const DEFAULT_UPDATE_PORT: u16 = 5003;
pub const DEFAULT_USAGE_PORT: u16 = 5004;

/// Client configuration for connecting to the seat server
///
/// The server runs one service per concern, each on its own port, so every
/// concern gets its own base URL.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Face identification service (`/uploadFace`)
    pub face_url: String,

    /// Table list service (`/all_tables`)
    pub tables_url: String,

    /// Table update service (`/updateTable`)
    pub update_url: String,

    /// Usage check and cancellation service
    pub usage_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration for `host` (e.g. "http://192.168.0.10") using
    /// the default ports.
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_ports(
            host,
            DEFAULT_FACE_PORT,
            DEFAULT_TABLES_PORT,
            DEFAULT_UPDATE_PORT,
            DEFAULT_USAGE_PORT,
        )
    }

    /// Create a configuration for `host` with explicit service ports.
    pub fn with_ports(
        host: impl Into<String>,
        face_port: u16,
        tables_port: u16,
        update_port: u16,
        usage_port: u16,
    ) -> Self {
        let host = host.into();
        let host = host.trim_end_matches('/');
        Self {
            face_url: format!("{host}:{face_port}"),
            tables_url: format!("{host}:{tables_port}"),
            update_url: format!("{host}:{update_port}"),
            usage_url: format!("{host}:{usage_port}"),
            timeout: 30,
        }
    }

    /// Point every service at one base URL.
    pub fn single(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            face_url: base_url.clone(),
            tables_url: base_url.clone(),
            update_url: base_url.clone(),
            usage_url: base_url,
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports() {
        let config = ClientConfig::new("http://10.0.0.5/");
        assert_eq!(config.face_url, "http://10.0.0.5:5001");
        assert_eq!(config.tables_url, "http://10.0.0.5:5002");
        assert_eq!(config.update_url, "http://10.0.0.5:5003");
        assert_eq!(config.usage_url, "http://10.0.0.5:5004");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_single_base_url() {
        let config = ClientConfig::single("http://127.0.0.1:9000/").with_timeout(5);
        assert_eq!(config.tables_url, "http://127.0.0.1:9000");
        assert_eq!(config.usage_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, 5);
    }
}
