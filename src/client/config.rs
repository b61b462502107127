use std::default::Default;
use std::env;
use std::time::Duration;

use failure::Error;

use crate::client::credentials::Credentials;
use crate::common::constants::{DEFAULT_VALIDITY_WINDOW, TCIM_API_BASE};
use crate::common::error::ImError;

pub const ENV_BASE_URL: &str = "TCIM_BASE_URL";
pub const ENV_VALIDITY_SECS: &str = "TCIM_VALIDITY_SECS";

/// Settings for the default reqwest-backed transport.
#[derive(Clone, Debug)]
pub struct HttpConfig {
    pub user_agent: String,
    /// `None` leaves reqwest's own default in place.
    pub timeout: Option<Duration>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("tcim-rs/", env!("CARGO_PKG_VERSION")).to_owned(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub credentials: Credentials,
    /// REST root including the version segment, e.g. `https://console.tim.qq.com/v4`.
    pub base_url: String,
    pub validity_window: Duration,
    pub http: HttpConfig,
}

impl Config {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: TCIM_API_BASE.to_owned(),
            validity_window: DEFAULT_VALIDITY_WINDOW,
            http: HttpConfig::default(),
        }
    }

    /// Reads credentials plus the optional `TCIM_BASE_URL` and
    /// `TCIM_VALIDITY_SECS` overrides from the environment.
    pub fn from_env() -> Result<Self, Error> {
        let mut config = Self::new(Credentials::from_env()?);
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }
        if let Ok(raw) = env::var(ENV_VALIDITY_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ImError::InvalidEnv {
                name: ENV_VALIDITY_SECS,
                value: raw.clone(),
            })?;
            config = config.with_validity_window(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_validity_window(mut self, validity_window: Duration) -> Self {
        self.validity_window = validity_window;
        self
    }

    pub fn with_http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}
