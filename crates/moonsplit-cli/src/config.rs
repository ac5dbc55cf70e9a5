use anyhow::{Context, Result};
use moonsplit_calculator::engine::DEFAULT_CACHE_CAPACITY;
use moonsplit_calculator::policy::{DEFAULT_MAX_TENANTS, DEFAULT_MIN_TENANTS};
use moonsplit_calculator::{CurrencyFormat, SplitResult, TenantCountPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "MOONSPLIT_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "moonsplit.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PolicyConfig {
    pub min_tenants: usize,
    pub max_tenants: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self { min_tenants: DEFAULT_MIN_TENANTS, max_tenants: DEFAULT_MAX_TENANTS }
    }
}

impl PolicyConfig {
    pub fn to_policy(&self) -> SplitResult<TenantCountPolicy> {
        TenantCountPolicy::new(self.min_tenants, self.max_tenants)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of computed distributions kept in memory; 0 disables caching.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CACHE_CAPACITY }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { json: false, filter: "moonsplit=info".to_string() }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MoonSplitConfig {
    pub policy: PolicyConfig,
    pub currency: CurrencyFormat,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

/// Where the configuration came from, reported once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults { missing: PathBuf },
}

impl MoonSplitConfig {
    /// Loads configuration from `path`, `MOONSPLIT_CONFIG_PATH` or
    /// `moonsplit.toml`, in that order. A missing file yields the defaults; a
    /// file that exists but does not parse is an error.
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => std::env::var(CONFIG_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
        };

        if !config_path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults { missing: config_path }));
        }

        let source = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file '{}'", config_path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("failed to parse config file '{}'", config_path.display()))?;
        Ok((config, ConfigSource::File(config_path)))
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Applies `MOONSPLIT_*` environment overrides. Unparseable values are ignored.
    pub fn apply_env_overrides(mut self) -> Self {
        if let Some(min) = env_parse::<usize>("MOONSPLIT_MIN_TENANTS") {
            self.policy.min_tenants = min;
        }
        if let Some(max) = env_parse::<usize>("MOONSPLIT_MAX_TENANTS") {
            self.policy.max_tenants = max;
        }
        if let Ok(symbol) = std::env::var("MOONSPLIT_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }
        if let Some(capacity) = env_parse::<usize>("MOONSPLIT_CACHE_CAPACITY") {
            self.cache.capacity = capacity;
        }
        if let Some(json) = env_parse::<bool>("MOONSPLIT_LOG_JSON") {
            self.logging.json = json;
        }
        self
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|value| value.trim().parse().ok())
}
