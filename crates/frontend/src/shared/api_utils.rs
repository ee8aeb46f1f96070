//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing catalog API URLs.

/// Compile-time override for the API base URL.
///
/// Set `CATALOG_API_URL` when building to point the app at a deployed
/// backend; unset, the URL is derived from the window location.
const API_URL_OVERRIDE: Option<&str> = option_env!("CATALOG_API_URL");

/// Port the local catalog service listens on.
const DEFAULT_API_PORT: u16 = 5127;

/// Get the base URL for API requests
///
/// Returns the configured `CATALOG_API_URL` if one was baked in, otherwise
/// constructs the base URL from the current window location and the default
/// backend port.
///
/// # Returns
/// - API base URL like "http://localhost:5127/api"
/// - Empty string if window is not available and no override is set
///
/// # Example
/// ```ignore
/// let url = format!("{}/products/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(url) = API_URL_OVERRIDE {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}/api", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
