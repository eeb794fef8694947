//! BrasilAPI endpoints: banks, company registry fallback, holidays and FIPE.

use serde::Deserialize;
use std::time::Duration;

use super::{lenient, JsonClient};
use crate::config::Config;
use crate::error::QueryError;

#[derive(Debug, Clone, Deserialize)]
pub struct Bank {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Holiday {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FipeBrand {
    #[serde(default)]
    pub nome: Option<String>,
}

/// Company record as BrasilAPI shapes it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BrasilApiCompany {
    pub razao_social: Option<String>,
    pub nome_fantasia: Option<String>,
    pub cnpj: Option<String>,
    pub descricao_situacao_cadastral: Option<String>,
    pub data_situacao_cadastral: Option<String>,
    pub data_inicio_atividade: Option<String>,
    pub cnae_fiscal_descricao: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub cep: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub capital_social: Option<String>,
}

/// Vehicle categories of the FIPE table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Cars,
    Motorcycles,
    Trucks,
}

impl VehicleType {
    /// Anything outside the known set, including absence, means cars.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("motos") => VehicleType::Motorcycles,
            Some("caminhoes") => VehicleType::Trucks,
            _ => VehicleType::Cars,
        }
    }

    pub fn path_segment(self) -> &'static str {
        match self {
            VehicleType::Cars => "carros",
            VehicleType::Motorcycles => "motos",
            VehicleType::Trucks => "caminhoes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Cars => "Carros",
            VehicleType::Motorcycles => "Motos",
            VehicleType::Trucks => "Caminhões",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrasilApiClient {
    http: JsonClient,
    base_url: String,
    timeout: Duration,
    company_timeout: Duration,
}

impl BrasilApiClient {
    pub fn new(http: JsonClient, config: &Config) -> Self {
        Self {
            http,
            base_url: config.endpoints.brasilapi.clone(),
            timeout: config.timeouts.default_timeout(),
            company_timeout: config.timeouts.cnpj(),
        }
    }

    pub async fn banks(&self) -> Result<Vec<Bank>, QueryError> {
        let url = format!("{}/banks/v1", self.base_url);
        self.http.get_json(&url, &[], self.timeout).await
    }

    pub async fn company(&self, cnpj: &str) -> Result<BrasilApiCompany, QueryError> {
        let url = format!("{}/cnpj/v1/{}", self.base_url, cnpj);
        self.http.get_json(&url, &[], self.company_timeout).await
    }

    pub async fn holidays(&self, year: &str) -> Result<Vec<Holiday>, QueryError> {
        let url = format!("{}/feriados/v1/{}", self.base_url, year);
        self.http.get_json(&url, &[], self.timeout).await
    }

    pub async fn fipe_brands(&self, vehicle_type: VehicleType) -> Result<Vec<FipeBrand>, QueryError> {
        let url = format!("{}/fipe/marcas/v1/{}", self.base_url, vehicle_type.path_segment());
        self.http.get_json(&url, &[], self.timeout).await
    }
}
