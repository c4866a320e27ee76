use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Base URL of the notes backend, without the `/api/notes` suffix
    pub const NOTES_API_URL: &str = "NOTES_API_URL";
}

/// Default values
pub mod defaults {
    pub const NOTES_API_URL: &str = "http://localhost:3001";
}

/// Get the notes backend base URL
pub fn api_url() -> String {
    api_url_from(|key| env::var(key).ok())
}

pub fn api_url_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(env_vars::NOTES_API_URL)
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| defaults::NOTES_API_URL.to_string())
}
