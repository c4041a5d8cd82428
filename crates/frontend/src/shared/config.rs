use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub images: ImageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub crypto_path: String,
    pub fiat_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImageConfig {
    pub allowed_hosts: Vec<String>,
}

/// Configuration embedded in the bundle at build time
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api-stg.transak.com/api/v2".to_string(),
                crypto_path: "/currencies/crypto-currencies".to_string(),
                fiat_path: "/currencies/fiat-currencies".to_string(),
            },
            images: ImageConfig {
                allowed_hosts: vec![
                    "assets-stg.transak.com".to_string(),
                    "assets.transak.com".to_string(),
                ],
            },
        }
    }
}

/// Load the application configuration
///
/// Order:
/// 1. Embedded `config.toml`
/// 2. Falls back to compiled-in defaults if it does not parse
/// 3. `CURRENCY_API_BASE` / `CURRENCY_IMAGE_HOSTS` set at build time win
pub fn load_config() -> AppConfig {
    let config = parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::warn!("Embedded config.toml is invalid, using defaults: {}", e);
        AppConfig::default()
    });
    config.with_overrides(
        option_env!("CURRENCY_API_BASE"),
        option_env!("CURRENCY_IMAGE_HOSTS"),
    )
}

fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

impl AppConfig {
    pub fn with_overrides(mut self, api_base: Option<&str>, image_hosts: Option<&str>) -> Self {
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api.base_url = base.to_string();
        }
        if let Some(hosts) = image_hosts {
            let hosts: Vec<String> = hosts
                .split(',')
                .map(|h| h.trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect();
            if !hosts.is_empty() {
                self.images.allowed_hosts = hosts;
            }
        }
        self
    }
}

impl ApiConfig {
    pub fn crypto_url(&self) -> String {
        join_url(&self.base_url, &self.crypto_path)
    }

    pub fn fiat_url(&self) -> String {
        join_url(&self.base_url, &self.fiat_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl ImageConfig {
    /// Only https images on an allow-listed host with the default port
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        if parsed.scheme() != "https" || parsed.port().is_some() {
            return false;
        }
        match parsed.host_str() {
            Some(host) => self
                .allowed_hosts
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(host)),
            None => false,
        }
    }
}
