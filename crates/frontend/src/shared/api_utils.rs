//! API utilities for frontend-backend communication
//!
//! The console talks to two services: the GraphQL API that owns all business
//! data, and the local print proxy (`wms-backend`) serving the print endpoints.

/// Port of the print proxy on the console host
pub const PRINT_PROXY_PORT: u16 = 3000;

/// Path of the GraphQL endpoint on the console origin
pub const GRAPHQL_PATH: &str = "/graphql";

/// Get the base URL of the print proxy
///
/// Constructs the URL from the current window location, using
/// [`PRINT_PROXY_PORT`].
///
/// # Returns
/// - Base URL like "http://localhost:3000"
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
    format!("{}//{}:{}", protocol, hostname, PRINT_PROXY_PORT)
}

/// Build a full print proxy URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/barcodes/print/label");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GraphQL endpoint on the console origin
pub fn graphql_url() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, GRAPHQL_PATH)
}
