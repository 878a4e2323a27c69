use std::net::SocketAddr;

/// Settings for the proxy relay server.
///
/// Holds the one secret in the system (`ebird_api_key`), which never leaves
/// the server process.
#[derive(Clone)]
pub struct ProxyConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub ebird_api_key: String,
    pub upstream_base_url: String,
    pub upstream_timeout_secs: u64,
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("ebird_api_key", &"[redacted]")
            .field("upstream_base_url", &self.upstream_base_url)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .finish()
    }
}

/// Settings for clients that talk to the proxy and the geocoder.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub geocoder_url: String,
    pub user_agent: String,
}
