use serde::Deserialize;
use std::time::Duration;

use super::JsonClient;
use crate::config::Config;
use crate::error::QueryError;

const ERROR_STATUS: &str = "ERROR";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub text: Option<String>,
}

/// Company record as ReceitaWS shapes it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReceitaWsCompany {
    pub status: Option<String>,
    pub message: Option<String>,
    pub nome: Option<String>,
    pub fantasia: Option<String>,
    pub cnpj: Option<String>,
    pub situacao: Option<String>,
    pub abertura: Option<String>,
    pub atividade_principal: Option<Vec<Activity>>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub cep: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
}

impl ReceitaWsCompany {
    pub fn main_activity(&self) -> Option<&str> {
        self.atividade_principal
            .as_ref()?
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct ReceitaWsClient {
    http: JsonClient,
    base_url: String,
    timeout: Duration,
}

impl ReceitaWsClient {
    pub fn new(http: JsonClient, config: &Config) -> Self {
        Self {
            http,
            base_url: config.endpoints.receitaws.clone(),
            timeout: config.timeouts.cnpj(),
        }
    }

    /// Fetches a company. A body with `status: "ERROR"` becomes
    /// [`QueryError::Provider`].
    pub async fn company(&self, cnpj: &str) -> Result<ReceitaWsCompany, QueryError> {
        let url = format!("{}/cnpj/{}", self.base_url, cnpj);
        let company: ReceitaWsCompany = self.http.get_json(&url, &[], self.timeout).await?;

        if company.status.as_deref() == Some(ERROR_STATUS) {
            return Err(QueryError::Provider {
                provider: "ReceitaWS",
                message: company.message.unwrap_or_default(),
            });
        }
        Ok(company)
    }
}
