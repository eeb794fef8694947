use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoints: Endpoints,
    pub timeouts: Timeouts,
    pub user_agent: String,
}

/// Base URLs of the upstream providers, without trailing slashes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub bcb: String,
    pub viacep: String,
    pub brasilapi: String,
    pub receitaws: String,
    pub ibge: String,
}

/// Per-call timeouts in seconds. They bound a single GET, not a whole action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    pub default_secs: u64,
    pub cep_secs: u64,
    pub cnpj_secs: u64,
    pub cnae_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeouts: Timeouts::default(),
            user_agent: format!("brdata/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            bcb: "https://api.bcb.gov.br/dados/serie".to_string(),
            viacep: "https://viacep.com.br/ws".to_string(),
            brasilapi: "https://brasilapi.com.br/api".to_string(),
            receitaws: "https://www.receitaws.com.br/v1".to_string(),
            ibge: "https://servicodados.ibge.gov.br/api".to_string(),
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            default_secs: 5,
            cep_secs: 3,
            cnpj_secs: 10,
            cnae_secs: 10,
        }
    }
}

impl Endpoints {
    /// Points every provider at the same base URL.
    pub fn all_at(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            bcb: base.clone(),
            viacep: base.clone(),
            brasilapi: base.clone(),
            receitaws: base.clone(),
            ibge: base,
        }
    }
}

impl Timeouts {
    pub fn default_timeout(&self) -> Duration {
        Duration::from_secs(self.default_secs)
    }

    pub fn cep(&self) -> Duration {
        Duration::from_secs(self.cep_secs)
    }

    pub fn cnpj(&self) -> Duration {
        Duration::from_secs(self.cnpj_secs)
    }

    pub fn cnae(&self) -> Duration {
        Duration::from_secs(self.cnae_secs)
    }
}

impl Config {
    /// Defaults, then the optional TOML file, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn with_env_overrides(mut self) -> Self {
        let endpoints = &mut self.endpoints;
        for (var, slot) in [
            ("BRDATA_BCB_URL", &mut endpoints.bcb),
            ("BRDATA_VIACEP_URL", &mut endpoints.viacep),
            ("BRDATA_BRASILAPI_URL", &mut endpoints.brasilapi),
            ("BRDATA_RECEITAWS_URL", &mut endpoints.receitaws),
            ("BRDATA_IBGE_URL", &mut endpoints.ibge),
        ] {
            if let Ok(value) = std::env::var(var) {
                *slot = value.trim_end_matches('/').to_string();
            }
        }

        if let Some(secs) = std::env::var("BRDATA_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeouts.default_secs = secs;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_provider_conventions() {
        let config = Config::default();
        assert_eq!(config.timeouts.cep_secs, 3);
        assert_eq!(config.timeouts.cnpj_secs, 10);
        assert_eq!(config.timeouts.default_timeout(), Duration::from_secs(5));
        assert!(config.endpoints.bcb.starts_with("https://api.bcb.gov.br"));
        assert!(config.user_agent.starts_with("brdata/"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [endpoints]
            viacep = "http://localhost:9000/ws"

            [timeouts]
            cnae_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoints.viacep, "http://localhost:9000/ws");
        assert_eq!(config.endpoints.ibge, Endpoints::default().ibge);
        assert_eq!(config.timeouts.cnae_secs, 30);
        assert_eq!(config.timeouts.cep_secs, 3);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "user_agent = \"test-agent\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.timeouts.cep_secs, 3);
        assert_eq!(config.timeouts.cnpj_secs, 10);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(Config::from_toml("timeouts = 3").is_err());
    }

    #[test]
    fn test_all_at_strips_trailing_slash() {
        let endpoints = Endpoints::all_at("http://127.0.0.1:4000/");
        assert_eq!(endpoints.bcb, "http://127.0.0.1:4000");
        assert_eq!(endpoints.receitaws, "http://127.0.0.1:4000");
    }
}
