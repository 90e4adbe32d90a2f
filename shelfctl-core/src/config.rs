use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

/// Load environment variables from .env files in multiple locations
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.shelfctl/.env
///
/// dotenvy never overwrites variables that are already present, so exported
/// values always win over file contents.
pub fn load_dotenv() {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(format!("current directory ({})", path.display()));
        debug!("Loaded .env from current directory: {}", path.display());
    }

    if let Some(config_dir) = config_dir() {
        let env_file = config_dir.join(".env");
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(_) => {
                    loaded_from.push(format!("~/.shelfctl/.env ({})", env_file.display()));
                    debug!("Loaded .env from ~/.shelfctl: {}", env_file.display());
                }
                Err(e) => {
                    debug!("Failed to load ~/.shelfctl/.env: {}", e);
                }
            }
        }
    }

    if loaded_from.is_empty() {
        debug!("No .env files found (current dir or ~/.shelfctl)");
    } else {
        info!("Loaded configuration from: {}", loaded_from.join(", "));
    }
}

/// Get the shelfctl config directory path (~/.shelfctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".shelfctl"))
}

/// Resolve the PostgreSQL connection string.
///
/// A value passed on the command line wins; otherwise DATABASE_URL from the
/// environment (including anything `load_dotenv` pulled in). Fails hard with
/// an actionable error when neither is present.
pub fn database_url(override_url: Option<String>) -> Result<String> {
    if let Some(url) = override_url {
        return Ok(url);
    }
    std::env::var("DATABASE_URL")
        .context("DATABASE_URL not set (pass --database-url or add it to .env)")
}
