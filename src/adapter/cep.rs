use super::{digits_only, PublicDataAdapter};
use crate::error::QueryError;
use crate::providers::or_na;
use crate::providers::viacep::CepAddress;

const CEP_DIGITS: usize = 8;

impl PublicDataAdapter {
    pub async fn cep_info(&self, cep: Option<&str>) -> Result<String, QueryError> {
        let cep = digits_only(cep, "cep", CEP_DIGITS)?;

        match self.viacep.lookup(&cep).await? {
            Some(address) => Ok(render_address(&address)),
            None => Err(QueryError::NotFound(cep)),
        }
    }
}

fn render_address(address: &CepAddress) -> String {
    format!(
        "📍 **Endereço Completo:**\n\
         Logradouro: {}\n\
         Complemento: {}\n\
         Bairro: {}\n\
         Cidade: {} - {}\n\
         CEP: {}\n\
         Fonte: ViaCEP",
        or_na(&address.logradouro),
        or_na(&address.complemento),
        or_na(&address.bairro),
        or_na(&address.localidade),
        or_na(&address.uf),
        or_na(&address.cep),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_address_with_placeholders() {
        let address = CepAddress {
            cep: Some("01001-000".to_string()),
            logradouro: Some("Praça da Sé".to_string()),
            complemento: Some(String::new()),
            bairro: Some("Sé".to_string()),
            localidade: Some("São Paulo".to_string()),
            uf: None,
        };

        assert_eq!(
            render_address(&address),
            "📍 **Endereço Completo:**\nLogradouro: Praça da Sé\nComplemento: \nBairro: Sé\n\
             Cidade: São Paulo - N/A\nCEP: 01001-000\nFonte: ViaCEP"
        );
    }
}
