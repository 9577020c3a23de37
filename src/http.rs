// src/http.rs
// Shared HTTP client for outbound search requests

/// User agent sent with every outbound request
pub const USER_AGENT: &str = concat!("job-links/", env!("CARGO_PKG_VERSION"));

/// Create the shared HTTP client.
///
/// Built once at startup and handed to the search client. No request timeout
/// is set here; calls rely on the transport defaults.
pub fn create_shared_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
