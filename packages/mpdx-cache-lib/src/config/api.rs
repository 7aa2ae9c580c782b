use crate::{
    config::{utils::derive_http_url, CacheConfigResult, Env},
    defaults,
    utils::{is_opt_env_var, trim_opt_env_key},
};
use http::Uri;
use serde::{Deserialize, Serialize};

/// Donor GraphQL API configuration.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct ApiConfig {
    /// Host of the donor GraphQL API.
    #[serde(default)]
    pub host: String,

    /// Listening port of the donor GraphQL API.
    #[serde(default)]
    pub port: String,
}

impl ApiConfig {
    pub fn graphql_uri(self) -> Uri {
        let base = Uri::from(self);
        format!("{}{}", base, "graphql")
            .parse()
            .unwrap_or_else(|e| panic!("Failed to build graphql Uri: {e}"))
    }
}

impl Env for ApiConfig {
    fn inject_opt_env_vars(&mut self) -> CacheConfigResult<()> {
        if is_opt_env_var(&self.host) {
            self.host = std::env::var(trim_opt_env_key(&self.host))?;
        }
        if is_opt_env_var(&self.port) {
            self.port = std::env::var(trim_opt_env_key(&self.port))?;
        }
        Ok(())
    }
}

impl From<ApiConfig> for Uri {
    fn from(config: ApiConfig) -> Self {
        let uri = derive_http_url(&config.host, &config.port);
        uri.parse().unwrap_or_else(|e| {
            panic!("Cannot parse HTTP URI from API config {config:?}: {e}")
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: defaults::API_HOST.into(),
            port: defaults::API_PORT.into(),
        }
    }
}

impl std::string::ToString for ApiConfig {
    fn to_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
