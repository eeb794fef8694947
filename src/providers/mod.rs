pub mod bcb;
pub mod brasilapi;
pub mod http;
pub mod ibge;
pub mod receitaws;
pub mod viacep;

pub use bcb::{BcbClient, DecimalSeparator, Series, SeriesPoint};
pub use brasilapi::BrasilApiClient;
pub use http::JsonClient;
pub use ibge::IbgeClient;
pub use receitaws::ReceitaWsClient;
pub use viacep::ViaCepClient;

/// Placeholder rendered for fields a provider left out.
pub const NOT_AVAILABLE: &str = "N/A";

pub(crate) fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

/// Providers disagree on whether codes and amounts are strings or numbers;
/// this accepts either and keeps the text.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient::string")]
        code: Option<String>,
    }

    #[test]
    fn test_lenient_string_accepts_numbers_and_null() {
        let s: Sample = serde_json::from_str(r#"{"code": 341}"#).unwrap();
        assert_eq!(s.code.as_deref(), Some("341"));

        let s: Sample = serde_json::from_str(r#"{"code": "001"}"#).unwrap();
        assert_eq!(s.code.as_deref(), Some("001"));

        let s: Sample = serde_json::from_str(r#"{"code": null}"#).unwrap();
        assert_eq!(s.code, None);

        let s: Sample = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(or_na(&s.code), NOT_AVAILABLE);
    }
}
