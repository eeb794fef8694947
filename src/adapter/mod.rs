//! The request dispatcher and the handlers behind each action.
//!
//! Handlers return `Result<String, QueryError>`; [`messages`] is the only
//! place failures turn into text, so [`PublicDataAdapter::handle`] never
//! fails.

mod banks;
mod cep;
mod cnae;
mod cnpj;
mod fipe;
mod holidays;
mod indicators;
mod localities;
pub mod messages;

pub use cnae::{collect_matches, CnaeMatch, MAX_COLLECTED, MAX_SHOWN};
pub use localities::find_state;

use anyhow::Result;

use crate::config::Config;
use crate::error::QueryError;
use crate::providers::{BcbClient, BrasilApiClient, IbgeClient, JsonClient, ReceitaWsClient, ViaCepClient};
use crate::types::{Action, Request};

/// Stateless adapter over the Brazilian public data providers.
///
/// It only holds configuration and a pooled HTTP client; every call is
/// independent of the previous ones.
#[derive(Debug, Clone)]
pub struct PublicDataAdapter {
    bcb: BcbClient,
    viacep: ViaCepClient,
    brasilapi: BrasilApiClient,
    receitaws: ReceitaWsClient,
    ibge: IbgeClient,
}

impl PublicDataAdapter {
    pub fn new(config: &Config) -> Result<Self> {
        let http = JsonClient::new(&config.user_agent)?;

        Ok(Self {
            bcb: BcbClient::new(http.clone(), config),
            viacep: ViaCepClient::new(http.clone(), config),
            brasilapi: BrasilApiClient::new(http.clone(), config),
            receitaws: ReceitaWsClient::new(http.clone(), config),
            ibge: IbgeClient::new(http, config),
        })
    }

    /// Entry point for serialized requests. Always returns display text.
    pub async fn handle(&self, raw: &str) -> String {
        match Request::parse(raw) {
            Ok(request) => self.dispatch(&request).await,
            Err(err) => {
                log::error!("Malformed request: {}", err);
                messages::describe(None, &err)
            }
        }
    }

    /// Runs a parsed request and renders either outcome as text.
    pub async fn dispatch(&self, request: &Request) -> String {
        match self.execute(request).await {
            Ok(text) => text,
            Err(err) => messages::describe(request.action().ok(), &err),
        }
    }

    /// Runs a parsed request, keeping the failure reason.
    pub async fn execute(&self, request: &Request) -> Result<String, QueryError> {
        let action = request.action()?;
        let params = request.params();

        let outcome = match action {
            Action::GetDolarPrice => self.dollar_price().await,
            Action::GetEuroPrice => self.euro_price().await,
            Action::GetCdiRate => self.cdi_rate().await,
            Action::GetSelicRate => self.selic_rate().await,
            Action::GetIpcaRate => self.ipca_rate().await,
            Action::GetCepInfo => self.cep_info(params.text("cep").as_deref()).await,
            Action::GetBanksList => self.banks_list().await,
            Action::GetCnpjInfo => self.cnpj_info(params.text("cnpj").as_deref()).await,
            Action::GetHolidays => self.holidays(params.text("year").as_deref()).await,
            Action::GetFipeBrands => self.fipe_brands(params.text("vehicle_type").as_deref()).await,
            Action::GetIbgeUfInfo => self.uf_info(params.text("uf_code").as_deref()).await,
            Action::GetIbgeCityInfo => self.city_info(params.text("city_name").as_deref()).await,
            Action::SearchCnae => self.search_cnae(params.text("query_term").as_deref()).await,
        };

        if let Err(err) = &outcome {
            if err.is_upstream() {
                log::error!("Failed to {} ({}): {}", action.operation(), action, err);
            }
        }
        outcome
    }
}

/// Strips every non-digit and checks the remaining length.
pub(crate) fn digits_only(
    value: Option<&str>,
    param: &'static str,
    expected: usize,
) -> Result<String, QueryError> {
    let value = value.ok_or(QueryError::MissingParameter(param))?;
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != expected {
        return Err(QueryError::InvalidDigits { param, expected });
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_strips_punctuation() {
        assert_eq!(digits_only(Some("01001-000"), "cep", 8).unwrap(), "01001000");
        assert_eq!(
            digits_only(Some("00.000.000/0001-91"), "cnpj", 14).unwrap(),
            "00000000000191"
        );
    }

    #[test]
    fn test_digits_only_rejects_wrong_length() {
        let err = digits_only(Some("0100-100"), "cep", 8).unwrap_err();
        assert!(matches!(err, QueryError::InvalidDigits { param: "cep", expected: 8 }));

        let err = digits_only(Some("abc"), "cnpj", 14).unwrap_err();
        assert!(matches!(err, QueryError::InvalidDigits { param: "cnpj", .. }));
    }

    #[test]
    fn test_digits_only_requires_value() {
        let err = digits_only(None, "cep", 8).unwrap_err();
        assert!(matches!(err, QueryError::MissingParameter("cep")));
    }

    #[tokio::test]
    async fn test_unknown_action_needs_no_network() {
        let adapter = PublicDataAdapter::new(&Config::default()).unwrap();
        let text = adapter.handle(r#"{"action": "get_moon_phase"}"#).await;
        assert!(text.starts_with("Ação não reconhecida."));
        for action in Action::ALL {
            assert!(text.contains(action.as_str()));
        }
    }

    #[tokio::test]
    async fn test_non_string_action_gets_action_list() {
        let adapter = PublicDataAdapter::new(&Config::default()).unwrap();
        for raw in [r#"{"action": 5}"#, r#"{"action": "get_moon_phase", "params": []}"#] {
            let text = adapter.handle(raw).await;
            assert_eq!(text, messages::unknown_action(), "{raw}");
        }
    }

    #[tokio::test]
    async fn test_malformed_request_text() {
        let adapter = PublicDataAdapter::new(&Config::default()).unwrap();
        assert_eq!(
            adapter.handle("{not json").await,
            "Erro de formato JSON na entrada do agente."
        );
    }
}
