// =============================================================================
// CONFIGURATION MODULE
// =============================================================================
// This module handles loading configuration from environment variables.
//
// LEARNING NOTES:
// - Environment variables are the standard way to configure containers
// - We parse them into a strongly-typed Config struct
// - This makes configuration errors obvious at startup, not runtime
// =============================================================================

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000)
    pub port: u16,

    /// Optional JSON file with the initial catalog.
    /// When unset, the built-in seed products are used.
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Creates a Config by reading environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` if every set variable is valid
    /// - `Err` if PORT is not a number
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Failed to parse PORT as a number")?,

            // An empty SEED_FILE counts as unset
            seed_file: env::var("SEED_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
// Environment variables are process-global, so everything touching them runs
// inside a single test to avoid races between parallel tests.
#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("SEED_FILE");
        let config = Config::from_env().expect("Failed to load default config");
        assert_eq!(config.port, 3000);
        assert!(config.seed_file.is_none());

        env::set_var("PORT", "9000");
        env::set_var("SEED_FILE", "/data/products.json");
        let config = Config::from_env().expect("Failed to load config");
        assert_eq!(config.port, 9000);
        assert_eq!(config.seed_file, Some(PathBuf::from("/data/products.json")));

        env::set_var("PORT", "not-a-port");
        assert!(Config::from_env().is_err());

        // Clean up
        env::remove_var("PORT");
        env::remove_var("SEED_FILE");
    }
}
