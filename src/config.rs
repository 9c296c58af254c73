use anyhow::Context;
use serde::Deserialize;

/// Origin the proxy is allowed to fetch images from.
pub const ALLOWED_HOST: &str = "fusioncalc.com";

/// Path prefix on the allowed host; anything outside it is rejected.
pub const ALLOWED_PATH_PREFIX: &str = "/wp-content/themes/twentytwentyone/pokemon/";

/// User-Agent sent on every outbound fetch.
pub const USER_AGENT: &str = "spin-a-fusion-image-proxy/1.0";

/// Cache policy attached to successfully relayed images.
pub const CACHE_CONTROL: &str = "public, max-age=21600, s-maxage=86400";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the TCP listener binds to.
    pub listen_addr: String,
    /// Wall-clock budget for a single handler invocation, in seconds.
    /// Exceeding it aborts the connection without a response.
    pub handler_timeout_secs: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            handler_timeout_secs: 20,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
            request_timeout_secs: 20,
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `PROXY_CONFIG`,
    /// falling back to defaults when unset. A `LISTEN` env var overrides
    /// the listen address either way.
    ///
    /// The allow-list, user agent and cache policy are deliberately NOT
    /// configurable; they are the constants above.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("PROXY_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("Invalid config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }
}
