//! IBGE localities and CNAE classification APIs.

use serde::Deserialize;
use std::time::Duration;

use super::{lenient, or_na, JsonClient};
use crate::config::Config;
use crate::error::QueryError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub sigla: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
}

/// A federative unit.
#[derive(Debug, Clone, Deserialize)]
pub struct State {
    pub id: u64,
    pub sigla: String,
    pub nome: String,
    #[serde(default)]
    pub regiao: Option<Region>,
}

impl State {
    pub fn region_name(&self) -> &str {
        self.regiao.as_ref().map_or(super::NOT_AVAILABLE, |r| or_na(&r.nome))
    }

    pub fn region_code(&self) -> &str {
        self.regiao.as_ref().map_or(super::NOT_AVAILABLE, |r| or_na(&r.sigla))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateRef {
    #[serde(default)]
    pub sigla: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mesoregion {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default, rename = "UF")]
    pub uf: Option<StateRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Microregion {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub mesorregiao: Option<Mesoregion>,
}

/// A municipality with its region -> sub-region -> state chain.
#[derive(Debug, Clone, Deserialize)]
pub struct Municipality {
    pub id: u64,
    pub nome: String,
    #[serde(default)]
    pub microrregiao: Option<Microregion>,
}

impl Municipality {
    fn mesoregion(&self) -> Option<&Mesoregion> {
        self.microrregiao.as_ref()?.mesorregiao.as_ref()
    }

    fn state(&self) -> Option<&StateRef> {
        self.mesoregion()?.uf.as_ref()
    }

    pub fn microregion_name(&self) -> &str {
        self.microrregiao.as_ref().map_or(super::NOT_AVAILABLE, |m| or_na(&m.nome))
    }

    pub fn mesoregion_name(&self) -> &str {
        self.mesoregion().map_or(super::NOT_AVAILABLE, |m| or_na(&m.nome))
    }

    pub fn state_code(&self) -> &str {
        self.state().map_or(super::NOT_AVAILABLE, |s| or_na(&s.sigla))
    }

    pub fn state_name(&self) -> &str {
        self.state().map_or(super::NOT_AVAILABLE, |s| or_na(&s.nome))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CnaeSubclass {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IbgeClient {
    http: JsonClient,
    base_url: String,
    timeout: Duration,
    cnae_timeout: Duration,
}

impl IbgeClient {
    pub fn new(http: JsonClient, config: &Config) -> Self {
        Self {
            http,
            base_url: config.endpoints.ibge.clone(),
            timeout: config.timeouts.default_timeout(),
            cnae_timeout: config.timeouts.cnae(),
        }
    }

    /// Every federative unit, in IBGE's order.
    pub async fn states(&self) -> Result<Vec<State>, QueryError> {
        let url = format!("{}/v1/localidades/estados/", self.base_url);
        self.http.get_json(&url, &[], self.timeout).await
    }

    /// Municipalities IBGE matches against `name`.
    pub async fn municipalities(&self, name: &str) -> Result<Vec<Municipality>, QueryError> {
        let url = format!("{}/v1/localidades/municipios", self.base_url);
        self.http.get_json(&url, &[("nome", name)], self.timeout).await
    }

    /// The whole CNAE subclass table. There is no server-side text search.
    pub async fn cnae_subclasses(&self) -> Result<Vec<CnaeSubclass>, QueryError> {
        let url = format!("{}/v2/cnae/subclasses", self.base_url);
        self.http.get_json(&url, &[], self.cnae_timeout).await
    }
}
