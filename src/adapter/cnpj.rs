use super::{digits_only, PublicDataAdapter};
use crate::error::QueryError;
use crate::providers::brasilapi::BrasilApiCompany;
use crate::providers::receitaws::ReceitaWsCompany;
use crate::providers::{or_na, NOT_AVAILABLE};

const CNPJ_DIGITS: usize = 14;

impl PublicDataAdapter {
    /// ReceitaWS first; BrasilAPI whenever ReceitaWS flags an error or the
    /// call itself fails.
    pub async fn cnpj_info(&self, cnpj: Option<&str>) -> Result<String, QueryError> {
        let cnpj = digits_only(cnpj, "cnpj", CNPJ_DIGITS)?;

        match self.receitaws.company(&cnpj).await {
            Ok(company) => return Ok(render_receitaws(&company)),
            Err(QueryError::Provider { message, .. }) => {
                log::warn!("ReceitaWS rejected {}, trying BrasilAPI: {}", cnpj, message);
            }
            Err(err) => {
                log::error!("ReceitaWS unavailable, trying BrasilAPI: {}", err);
            }
        }

        match self.brasilapi.company(&cnpj).await {
            Ok(company) => Ok(render_brasilapi(&company)),
            Err(err) => {
                log::error!("BrasilAPI CNPJ lookup failed: {}", err);
                Err(QueryError::SourcesExhausted)
            }
        }
    }
}

fn render_receitaws(c: &ReceitaWsCompany) -> String {
    format!(
        "🏢 **Dados da Empresa:**\n\
         Razão Social: {}\n\
         Nome Fantasia: {}\n\
         CNPJ: {}\n\
         Situação: {}\n\
         Abertura: {}\n\
         Atividade Principal: {}\n\
         Endereço: {}, {} - {}\n\
         Cidade: {} - {}\n\
         CEP: {}\n\
         Telefone: {}\n\
         Email: {}\n\
         Fonte: ReceitaWS (Receita Federal)",
        or_na(&c.nome),
        or_na(&c.fantasia),
        or_na(&c.cnpj),
        or_na(&c.situacao),
        or_na(&c.abertura),
        c.main_activity().unwrap_or(NOT_AVAILABLE),
        or_na(&c.logradouro),
        or_na(&c.numero),
        or_na(&c.bairro),
        or_na(&c.municipio),
        or_na(&c.uf),
        or_na(&c.cep),
        or_na(&c.telefone),
        or_na(&c.email),
    )
}

fn render_brasilapi(c: &BrasilApiCompany) -> String {
    format!(
        "🏢 **Dados da Empresa:**\n\
         Razão Social: {}\n\
         Nome Fantasia: {}\n\
         CNPJ: {}\n\
         Situação: {}\n\
         Data Situação: {}\n\
         Abertura: {}\n\
         Atividade Principal: {}\n\
         Endereço: {}, {} - {}\n\
         Cidade: {} - {}\n\
         CEP: {}\n\
         Capital Social: R$ {}\n\
         Fonte: BrasilAPI (Receita Federal)",
        or_na(&c.razao_social),
        or_na(&c.nome_fantasia),
        or_na(&c.cnpj),
        or_na(&c.descricao_situacao_cadastral),
        or_na(&c.data_situacao_cadastral),
        or_na(&c.data_inicio_atividade),
        or_na(&c.cnae_fiscal_descricao),
        or_na(&c.logradouro),
        or_na(&c.numero),
        or_na(&c.bairro),
        or_na(&c.municipio),
        or_na(&c.uf),
        or_na(&c.cep),
        or_na(&c.capital_social),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receitaws_render() {
        let company: ReceitaWsCompany = serde_json::from_str(
            r#"{
                "status": "OK",
                "nome": "BANCO DO BRASIL SA",
                "fantasia": "DIRECAO GERAL",
                "cnpj": "00.000.000/0001-91",
                "situacao": "ATIVA",
                "abertura": "01/08/1966",
                "atividade_principal": [{"text": "Bancos múltiplos, com carteira comercial"}],
                "logradouro": "Q SAUN QUADRA 5 LOTE B TORRES I, II E III",
                "numero": "SN",
                "bairro": "ASA NORTE",
                "municipio": "BRASILIA",
                "uf": "DF",
                "cep": "70.040-912"
            }"#,
        )
        .unwrap();

        let text = render_receitaws(&company);
        assert!(text.starts_with("🏢 **Dados da Empresa:**\nRazão Social: BANCO DO BRASIL SA\n"));
        assert!(text.contains("Atividade Principal: Bancos múltiplos, com carteira comercial\n"));
        assert!(text.contains("Cidade: BRASILIA - DF\n"));
        assert!(text.contains("Telefone: N/A\nEmail: N/A\n"));
        assert!(text.ends_with("Fonte: ReceitaWS (Receita Federal)"));
    }

    #[test]
    fn test_brasilapi_render() {
        let company = BrasilApiCompany {
            razao_social: Some("BANCO DO BRASIL SA".to_string()),
            descricao_situacao_cadastral: Some("ATIVA".to_string()),
            capital_social: Some("120000000000".to_string()),
            ..Default::default()
        };

        let text = render_brasilapi(&company);
        assert!(text.contains("Situação: ATIVA\nData Situação: N/A\n"));
        assert!(text.contains("Capital Social: R$ 120000000000\n"));
        assert!(text.ends_with("Fonte: BrasilAPI (Receita Federal)"));
    }
}
