use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::JsonClient;
use crate::config::Config;
use crate::error::QueryError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CepAddress {
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,
}

/// ViaCEP answers 200 for unknown codes and flags them with an `erro` key.
#[derive(Debug, Deserialize)]
struct CepResponse {
    #[serde(default)]
    erro: Option<Value>,
    #[serde(flatten)]
    address: CepAddress,
}

#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: JsonClient,
    base_url: String,
    timeout: Duration,
}

impl ViaCepClient {
    pub fn new(http: JsonClient, config: &Config) -> Self {
        Self {
            http,
            base_url: config.endpoints.viacep.clone(),
            timeout: config.timeouts.cep(),
        }
    }

    /// Looks up an 8-digit code. `Ok(None)` means ViaCEP does not know it.
    pub async fn lookup(&self, cep: &str) -> Result<Option<CepAddress>, QueryError> {
        let url = format!("{}/{}/json/", self.base_url, cep);
        let response: CepResponse = self.http.get_json(&url, &[], self.timeout).await?;

        if response.erro.is_some() {
            return Ok(None);
        }
        Ok(Some(response.address))
    }
}
