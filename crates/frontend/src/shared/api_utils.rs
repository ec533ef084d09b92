//! API location helpers
//!
//! The backend listens on [`API_PORT`] of the host that served the page.

/// Port of the backend API server
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
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
    base_from_location(&protocol, &hostname)
}

fn base_from_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        assert_eq!(
            base_from_location("https:", "feedback.example.com"),
            "https://feedback.example.com:3000"
        );
        assert_eq!(base_from_location("http:", "127.0.0.1"), "http://127.0.0.1:3000");
    }
}
