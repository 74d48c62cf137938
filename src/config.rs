use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use menuplan_user::PasswordCost;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub password: PasswordCost,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MENUPLAN__PASSWORD__ITERATIONS, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let cost = PasswordCost::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", default_log_level())?
            .set_default("password.memory_kib", i64::from(cost.memory_kib))?
            .set_default("password.iterations", i64::from(cost.iterations))?
            .set_default("password.parallelism", i64::from(cost.parallelism))?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MENUPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.password.iterations < 1 {
            return Err("Password iterations must be at least 1".to_string());
        }
        if self.password.parallelism < 1 {
            return Err("Password parallelism must be at least 1".to_string());
        }
        if self.password.memory_kib < 8 * self.password.parallelism {
            return Err("Password memory_kib must be at least 8 times parallelism".to_string());
        }
        Ok(())
    }
}
