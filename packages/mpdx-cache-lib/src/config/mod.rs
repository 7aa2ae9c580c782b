pub mod api;
pub mod fields;
pub mod utils;

pub use crate::{
    config::{api::ApiConfig, fields::FieldPolicyConfig},
    defaults,
};
pub use clap::Parser;
use serde::Deserialize;
use std::{
    fs::File,
    io::Error,
    path::{Path, PathBuf},
};
use strum::{AsRefStr, EnumString};
use thiserror::Error;

/// Error type returned by configuration operations.
#[derive(Error, Debug)]
pub enum CacheConfigError {
    #[error("Error parsing env variables from config")]
    EnvVarParseError(#[from] std::env::VarError),
    #[error("Error processing file: {0:?}")]
    ConfigFileError(#[from] Error),
    #[error("Error processing YAML file: {0:?}")]
    SerdeYamlError(#[from] serde_yaml::Error),
    #[error("Error processing URI: {0:?}")]
    InvalidUriError(#[from] http::uri::InvalidUri),
}

/// Result type returned by configuration operations.
pub type CacheConfigResult<T> = core::result::Result<T, CacheConfigError>;

/// Set of environment variables recognized by the cache tooling.
#[derive(Debug, EnumString, AsRefStr)]
pub enum EnvVar {
    #[strum(serialize = "MPDX_API_HOST")]
    ApiHost,
    #[strum(serialize = "MPDX_API_PORT")]
    ApiPort,
}

/// Return the value of an environment variable or a default value.
pub fn env_or_default(var: EnvVar, default: String) -> String {
    std::env::var(var.as_ref()).unwrap_or(default)
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "MPDX Cache",
    about = "Cache tooling for the MPDX donor API client.",
    version
)]
pub struct CacheArgs {
    /// Log level passed to the cache tooling.
    #[clap(long, default_value = defaults::LOG_LEVEL, value_parser(["info", "debug", "error", "warn"]), help = "Log level passed to the cache tooling.")]
    pub log_level: String,

    /// Cache tooling config file.
    #[clap(
        short,
        long,
        value_name = "FILE",
        help = "Cache tooling config file."
    )]
    pub config: Option<PathBuf>,

    /// Recorded page responses to replay, one JSON object per line.
    #[clap(
        short,
        long,
        value_name = "FILE",
        help = "Recorded page responses to replay, one JSON object per line."
    )]
    pub input: PathBuf,

    /// Host of the donor GraphQL API.
    #[clap(long, help = "Host of the donor GraphQL API.")]
    pub api_host: Option<String>,

    /// Listening port of the donor GraphQL API.
    #[clap(long, help = "Listening port of the donor GraphQL API.")]
    pub api_port: Option<String>,

    /// Enable verbose logging.
    #[clap(short, long, help = "Enable verbose logging.")]
    pub verbose: bool,
}

pub trait Env {
    fn inject_opt_env_vars(&mut self) -> CacheConfigResult<()>;
}

/// MPDX cache tooling configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct CacheConfig {
    pub log_level: String,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub fields: Vec<FieldPolicyConfig>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::LOG_LEVEL.into(),
            verbose: false,
            api: ApiConfig::default(),
            fields: Vec::new(),
        }
    }
}

impl From<CacheArgs> for CacheConfig {
    fn from(args: CacheArgs) -> Self {
        let mut config = CacheConfig {
            log_level: args.log_level,
            verbose: args.verbose,
            api: ApiConfig {
                host: args.api_host.unwrap_or_else(|| {
                    env_or_default(EnvVar::ApiHost, defaults::API_HOST.to_string())
                }),
                port: args.api_port.unwrap_or_else(|| {
                    env_or_default(EnvVar::ApiPort, defaults::API_PORT.to_string())
                }),
            },
            fields: Vec::new(),
        };

        config
            .inject_opt_env_vars()
            .expect("Failed to inject env vars.");

        config
    }
}

impl CacheConfig {
    pub fn from_file(path: impl AsRef<Path>) -> CacheConfigResult<Self> {
        let file = File::open(path)?;

        let mut config = CacheConfig::default();

        let content: serde_yaml::Value = serde_yaml::from_reader(file)?;

        let log_level_key = serde_yaml::Value::String("log_level".into());
        let verbose_key = serde_yaml::Value::String("verbose".into());
        let api_key = serde_yaml::Value::String("api".into());
        let fields_key = serde_yaml::Value::String("fields".into());

        if let Some(log_level) = content.get(log_level_key) {
            config.log_level = log_level.as_str().unwrap().to_string();
        }

        if let Some(verbose) = content.get(verbose_key) {
            config.verbose = verbose.as_bool().unwrap();
        }

        if let Some(api) = content.get(api_key) {
            config.api = serde_yaml::from_value(api.clone())?;
        }

        if let Some(fields) = content.get(fields_key) {
            config.fields = serde_yaml::from_value(fields.clone())?;
        }

        config.inject_opt_env_vars()?;

        Ok(config)
    }

    pub fn from_opts(args: CacheArgs) -> Self {
        args.into()
    }
}

impl Env for CacheConfig {
    fn inject_opt_env_vars(&mut self) -> CacheConfigResult<()> {
        self.api.inject_opt_env_vars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_cache_config_will_supplement_missing_sections() {
        let file_path: &str = "cache-config.yaml";
        let config_str = r#"
## Cache tooling configuration

log_level: debug

fields:
  - field: contacts
    key_args: [status]
"#;

        let mut file = fs::File::create(file_path).unwrap();
        file.write_all(config_str.as_bytes()).unwrap();

        let config = CacheConfig::from_file(file_path).unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(!config.verbose);
        assert_eq!(config.api.host, defaults::API_HOST);
        assert_eq!(config.fields.len(), 1);
        assert_eq!(config.fields[0].field, "contacts");
        assert_eq!(config.fields[0].key_args, vec!["status".to_string()]);

        fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_cache_config_injects_env_vars() {
        let file_path: &str = "cache-config-env.yaml";
        let config_str = r#"
api:
  host: ${MPDX_TEST_API_HOST}
  port: "8044"
"#;

        let mut file = fs::File::create(file_path).unwrap();
        file.write_all(config_str.as_bytes()).unwrap();

        std::env::set_var("MPDX_TEST_API_HOST", "api.stage.mpdx.org");

        let config = CacheConfig::from_file(file_path).unwrap();

        assert_eq!(config.api.host, "api.stage.mpdx.org");
        assert_eq!(config.api.port, "8044");

        std::env::remove_var("MPDX_TEST_API_HOST");
        fs::remove_file(file_path).unwrap();
    }
}
