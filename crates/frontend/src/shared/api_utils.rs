//! API utilities for frontend-platform communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for platform API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the platform gateway.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000", "/api/system/profile/current"),
            "http://localhost:3000/api/system/profile/current"
        );
        assert_eq!(join_url("", "/api/opportunity/1/lines"), "/api/opportunity/1/lines");
    }
}
