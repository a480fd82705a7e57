use std::fmt;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub jwt: JwtConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Token issuer settings: who signs, for whom, with what key and for how long.
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub audience: String,
    /// HMAC signing key.
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_valid_for")]
    pub valid_for_secs: u64,
    #[serde(default)]
    pub leeway_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            issuer: String::new(),
            audience: String::new(),
            secret: String::new(),
            algorithm: default_algorithm(),
            valid_for_secs: default_valid_for(),
            leeway_secs: 0,
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("valid_for_secs", &self.valid_for_secs)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
}

/// Algorithms accepted for HMAC signing.
pub const SUPPORTED_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

fn default_algorithm() -> String { "HS256".into() }
fn default_valid_for() -> u64 { 7200 }

pub fn load_default() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    AppConfig::from_toml_str(&content)
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(content)?;
        Ok(cfg)
    }

    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.jwt.normalize_from_env();
        self.jwt.validate()?;
        Ok(())
    }
}

impl JwtConfig {
    /// Fill empty fields from `JWT_SECRET`, `JWT_ISSUER` and `JWT_AUDIENCE`.
    pub fn normalize_from_env(&mut self) {
        fill_from_env(&mut self.secret, "JWT_SECRET");
        fill_from_env(&mut self.issuer, "JWT_ISSUER");
        fill_from_env(&mut self.audience, "JWT_AUDIENCE");
        self.algorithm = self.algorithm.trim().to_uppercase();
    }

    pub fn validate(&self) -> Result<()> {
        if self.secret.trim().is_empty() {
            return Err(anyhow!("jwt.secret is empty; set it in config.toml or JWT_SECRET"));
        }
        if self.issuer.trim().is_empty() {
            return Err(anyhow!("jwt.issuer is empty; set it in config.toml or JWT_ISSUER"));
        }
        if self.audience.trim().is_empty() {
            return Err(anyhow!("jwt.audience is empty; set it in config.toml or JWT_AUDIENCE"));
        }
        if self.valid_for_secs == 0 {
            return Err(anyhow!("jwt.valid_for_secs must be a positive number of seconds"));
        }
        if !SUPPORTED_ALGORITHMS.contains(&self.algorithm.trim().to_uppercase().as_str()) {
            return Err(anyhow!(
                "jwt.algorithm {} is not supported (expected one of {})",
                self.algorithm,
                SUPPORTED_ALGORITHMS.join(", ")
            ));
        }
        Ok(())
    }
}

fn fill_from_env(field: &mut String, var: &str) {
    if field.trim().is_empty() {
        if let Ok(value) = std::env::var(var) {
            *field = value;
        }
    }
}
