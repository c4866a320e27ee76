use std::convert::Infallible;
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Set to "development" to include diagnostic details in error responses.
    pub const NOTES_ENV: &str = "NOTES_ENV";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3001;
    pub const DATABASE_URL: &str = "./.db/notes.db";
}

/// Runtime mode; only development mode exposes error diagnostics to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

/// Anything other than "development" (or "dev") means production
impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        })
    }
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the process env in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("PORT must be a valid number ({}): {}", raw, e))?,
            None => defaults::PORT,
        };

        Ok(Self {
            port,
            database_url: lookup(env_vars::DATABASE_URL)
                .unwrap_or_else(|| defaults::DATABASE_URL.to_string()),
            environment: lookup(env_vars::NOTES_ENV)
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        })
    }
}

/// Create the parent directory of a file-backed database URL
pub fn ensure_database_dir(database_url: &str) -> std::io::Result<()> {
    if database_url == ":memory:" {
        return Ok(());
    }
    match Path::new(database_url).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
