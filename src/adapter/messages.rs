//! Display text for every failure the adapter can produce.

use crate::error::QueryError;
use crate::types::Action;

pub const MALFORMED_REQUEST: &str = "Erro de formato JSON na entrada do agente.";

pub fn unknown_action() -> String {
    let names: Vec<&str> = Action::ALL.iter().map(Action::as_str).collect();
    format!("Ação não reconhecida. Ações disponíveis: {}.", names.join(", "))
}

/// Maps a failure to the text returned to the caller. `action` is `None`
/// when the request never resolved to one.
pub fn describe(action: Option<Action>, err: &QueryError) -> String {
    match err {
        QueryError::MalformedRequest(_) => MALFORMED_REQUEST.to_string(),
        QueryError::UnknownAction(_) => unknown_action(),
        _ => match action {
            Some(action) => describe_for(action, err),
            None => format!("Erro ao processar dados públicos: {}", err),
        },
    }
}

fn describe_for(action: Action, err: &QueryError) -> String {
    match err {
        QueryError::MissingParameter(_) => missing_parameter(action),
        QueryError::InvalidDigits { param: "cep", expected } => {
            format!("CEP inválido. Deve conter {} dígitos.", expected)
        }
        QueryError::InvalidDigits { param: "cnpj", expected } => {
            format!("CNPJ inválido. Deve conter {} dígitos.", expected)
        }
        QueryError::NotFound(subject) => not_found(action, subject),
        QueryError::SourcesExhausted => {
            "Erro ao consultar CNPJ (ambas as fontes falharam): ReceitaWS e BrasilAPI indisponíveis."
                .to_string()
        }
        QueryError::EmptyDataset => "Erro: API CNAE não retornou dados.".to_string(),
        _ => format!("Erro ao {}: {}", action.operation(), err),
    }
}

fn missing_parameter(action: Action) -> String {
    match action {
        Action::GetCepInfo => "Por favor, forneça um CEP numérico (ex: 01001000 ou 01001-000).",
        Action::GetCnpjInfo => "Por favor, forneça um CNPJ (apenas números, 14 dígitos).",
        Action::GetIbgeUfInfo => {
            "Por favor, forneça a sigla ou nome do estado (ex: 'SP', 'São Paulo')."
        }
        Action::GetIbgeCityInfo => {
            "Por favor, forneça o nome da cidade (ex: 'São Paulo', 'Vitória')."
        }
        Action::SearchCnae => {
            "Por favor, forneça um termo de busca (ex: 'informática', 'restaurante', '6200')."
        }
        _ => "Parâmetro obrigatório ausente.",
    }
    .to_string()
}

fn not_found(action: Action, subject: &str) -> String {
    match action {
        Action::GetCepInfo => format!("CEP {} não encontrado na base ViaCEP.", subject),
        Action::GetIbgeUfInfo => format!("Estado '{}' não encontrado no IBGE.", subject),
        Action::GetIbgeCityInfo => format!("Cidade '{}' não encontrada no IBGE.", subject),
        Action::SearchCnae => format!("Nenhuma atividade CNAE encontrada para '{}'.", subject),
        _ => format!("Nenhum resultado encontrado para '{}'.", subject),
    }
}
