//! Banco Central do Brasil SGS time-series API.

use serde::Deserialize;
use std::time::Duration;

use super::JsonClient;
use crate::config::Config;
use crate::error::QueryError;

/// The SGS series this adapter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    /// Commercial dollar, sell rate
    DollarSell,
    /// Commercial euro, sell rate
    EuroSell,
    /// Daily CDI rate
    Cdi,
    /// Selic target, yearly
    Selic,
    /// IPCA monthly inflation
    Ipca,
}

/// How a series writes its `valor` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalSeparator {
    Comma,
    Dot,
}

impl Series {
    pub fn code(self) -> u32 {
        match self {
            Series::DollarSell => 10813,
            Series::EuroSell => 21619,
            Series::Cdi => 12,
            Series::Selic => 432,
            Series::Ipca => 433,
        }
    }

    pub fn decimal_separator(self) -> DecimalSeparator {
        match self {
            Series::DollarSell | Series::Cdi | Series::Ipca => DecimalSeparator::Comma,
            Series::EuroSell | Series::Selic => DecimalSeparator::Dot,
        }
    }
}

impl DecimalSeparator {
    pub fn parse(self, raw: &str) -> Result<f64, QueryError> {
        let normalized = match self {
            DecimalSeparator::Comma => raw.trim().replace(',', "."),
            DecimalSeparator::Dot => raw.trim().to_string(),
        };
        normalized
            .parse::<f64>()
            .map_err(|_| QueryError::InvalidPayload(format!("invalid numeric value '{raw}'")))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesPoint {
    pub data: String,
    pub valor: String,
}

impl SeriesPoint {
    pub fn value(&self, series: Series) -> Result<f64, QueryError> {
        series.decimal_separator().parse(&self.valor)
    }
}

#[derive(Debug, Clone)]
pub struct BcbClient {
    http: JsonClient,
    base_url: String,
    timeout: Duration,
}

impl BcbClient {
    pub fn new(http: JsonClient, config: &Config) -> Self {
        Self {
            http,
            base_url: config.endpoints.bcb.clone(),
            timeout: config.timeouts.default_timeout(),
        }
    }

    /// The most recent point of `series`.
    pub async fn latest(&self, series: Series) -> Result<SeriesPoint, QueryError> {
        let url = format!("{}/bcdata.sgs.{}/dados/ultimos/1", self.base_url, series.code());
        let points: Vec<SeriesPoint> = self
            .http
            .get_json(&url, &[("formato", "json")], self.timeout)
            .await?;

        points
            .into_iter()
            .next()
            .ok_or_else(|| QueryError::InvalidPayload("empty series response".to_string()))
    }
}
