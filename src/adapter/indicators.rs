use super::PublicDataAdapter;
use crate::error::QueryError;
use crate::providers::{Series, SeriesPoint};

const SOURCE: &str = "Fonte: Banco Central do Brasil";

impl PublicDataAdapter {
    pub async fn dollar_price(&self) -> Result<String, QueryError> {
        self.indicator(Series::DollarSell).await
    }

    pub async fn euro_price(&self) -> Result<String, QueryError> {
        self.indicator(Series::EuroSell).await
    }

    pub async fn cdi_rate(&self) -> Result<String, QueryError> {
        self.indicator(Series::Cdi).await
    }

    pub async fn selic_rate(&self) -> Result<String, QueryError> {
        self.indicator(Series::Selic).await
    }

    pub async fn ipca_rate(&self) -> Result<String, QueryError> {
        self.indicator(Series::Ipca).await
    }

    async fn indicator(&self, series: Series) -> Result<String, QueryError> {
        let point = self.bcb.latest(series).await?;
        render_indicator(series, &point)
    }
}

/// Currency quotes get four decimals, rates two.
pub(crate) fn render_indicator(series: Series, point: &SeriesPoint) -> Result<String, QueryError> {
    let value = point.value(series)?;
    let date = &point.data;

    Ok(match series {
        Series::DollarSell => format!(
            "🇺🇸 **Dólar Comercial (Venda)**\nData: {date}\nValor: R$ {value:.4}\n{SOURCE}"
        ),
        Series::EuroSell => format!(
            "🇪🇺 **Euro Comercial (Venda)**\nValor: R$ {value:.4}\nData: {date}\n{SOURCE}"
        ),
        Series::Cdi => format!("📉 **Taxa CDI Diária:** {value:.2}%\nData: {date}\n{SOURCE}"),
        Series::Selic => format!(
            "📉 **Taxa Selic Meta Anual**\nMeta Atual: {value:.2}% ao ano\nData: {date}\n{SOURCE} (COPOM)"
        ),
        Series::Ipca => format!("📈 **IPCA (Inflação):** {value:.2}%\nData: {date}\n{SOURCE} (IBGE)"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(valor: &str) -> SeriesPoint {
        SeriesPoint {
            data: "16/10/2026".to_string(),
            valor: valor.to_string(),
        }
    }

    #[test]
    fn test_dollar_quote() {
        let text = render_indicator(Series::DollarSell, &point("5,43")).unwrap();
        assert_eq!(
            text,
            "🇺🇸 **Dólar Comercial (Venda)**\nData: 16/10/2026\nValor: R$ 5.4300\nFonte: Banco Central do Brasil"
        );
    }

    #[test]
    fn test_selic_parses_dot_decimal() {
        let text = render_indicator(Series::Selic, &point("10.75")).unwrap();
        assert!(text.contains("Meta Atual: 10.75% ao ano"));
        assert!(text.ends_with("Fonte: Banco Central do Brasil (COPOM)"));
    }

    #[test]
    fn test_selic_rejects_comma_decimal() {
        assert!(render_indicator(Series::Selic, &point("10,75")).is_err());
    }

    #[test]
    fn test_rates_use_two_decimals() {
        let text = render_indicator(Series::Cdi, &point("0,055131")).unwrap();
        assert!(text.starts_with("📉 **Taxa CDI Diária:** 0.06%"));

        let text = render_indicator(Series::Ipca, &point("0,44")).unwrap();
        assert!(text.starts_with("📈 **IPCA (Inflação):** 0.44%"));
    }

    #[test]
    fn test_euro_quote_puts_value_first() {
        let text = render_indicator(Series::EuroSell, &point("6.3121")).unwrap();
        assert!(text.contains("Valor: R$ 6.3121\nData: 16/10/2026"));
    }
}
