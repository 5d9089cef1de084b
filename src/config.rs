//! Configuration for parkdesk
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional `parkdesk.toml` file, and `PARKDESK__*` environment variables
//! (e.g. `PARKDESK__SERVER__PORT=9000`). CLI flags override all of these in
//! `main`.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Address to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

/// Parking lot settings
#[derive(Debug, Clone, Deserialize)]
pub struct LotSettings {
    /// Number of slots created at startup; fixed for the process lifetime
    pub slots: u32,
}

/// Full application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP server settings
    pub server: ServerSettings,
    /// Parking lot settings
    pub lot: LotSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            lot: LotSettings { slots: 20 },
        }
    }
}

impl Settings {
    /// Loads settings from defaults, an optional config file, and environment
    ///
    /// When `path` is given the file must exist; otherwise `parkdesk.toml` in
    /// the working directory is picked up if present.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file is missing (explicit path
    /// only), malformed, or holds values of the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("lot.slots", i64::from(defaults.lot.slots))?;

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name("parkdesk").required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix("PARKDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.lot.slots, 20);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let settings = Settings::load(None).expect("defaults should load");
        assert_eq!(settings.lot.slots, 20);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let missing = Path::new("/definitely/not/here/parkdesk.toml");
        assert!(Settings::load(Some(missing)).is_err());
    }
}
