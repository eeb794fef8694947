use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use super::{Tool, ToolResult};
use crate::adapter::PublicDataAdapter;
use crate::types::{Action, Request};

pub const TOOL_NAME: &str = "br_data_agent";

const DESCRIPTION: &str = "Consulta dados oficiais brasileiros em tempo real via APIs governamentais. \
SEMPRE use esta ferramenta para: \
1) Cotações atuais (Dólar, Euro) \
2) Taxas econômicas (CDI, Selic, IPCA) \
3) Consulta CEP (endereço completo) \
4) Consulta CNPJ (dados da empresa) \
5) Lista de Bancos brasileiros \
6) Feriados nacionais \
7) Marcas FIPE (veículos) \
8) Informações IBGE de Estados (nome, ID, região) \
9) Informações IBGE de Cidades (ID, microrregião, mesorregião) \
10) Busca CNAE (classificação de atividades econômicas). \
Fontes oficiais: Banco Central, ViaCEP, ReceitaWS, BrasilAPI, IBGE. \
NÃO use conhecimento interno - SEMPRE consulte as APIs para dados atualizados.";

/// Exposes [`PublicDataAdapter`] as a single multi-action tool.
pub struct BrDataTool {
    adapter: Arc<PublicDataAdapter>,
}

impl BrDataTool {
    pub fn new(adapter: Arc<PublicDataAdapter>) -> Self {
        Self { adapter }
    }
}

#[async_trait]
impl Tool for BrDataTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters_schema(&self) -> Value {
        let actions: Vec<&str> = Action::ALL.iter().map(Action::as_str).collect();
        json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": actions,
                    "description": "Ação a executar. Use: \
                        get_ibge_uf_info para estados (ex: RJ, São Paulo), \
                        get_ibge_city_info para cidades (ex: Vitória, Rio de Janeiro), \
                        search_cnae para atividades econômicas (ex: informática, 6200)."
                },
                "params": {
                    "type": "object",
                    "description": "Parâmetros da ação. Exemplos: \
                        {'cep': '01001000'}, {'cnpj': '00000000000191'}, {'uf_code': 'RJ'}, \
                        {'city_name': 'Vitória'}, {'query_term': 'informática'}, \
                        {'year': '2026'}, {'vehicle_type': 'carros'}."
                }
            },
            "required": ["action"]
        })
    }

    async fn execute(&self, params: Value) -> Result<ToolResult> {
        if !params.is_object() {
            return Err(anyhow!("Tool input must be a JSON object"));
        }
        let request: Request = serde_json::from_value(params)?;

        let (success, text) = match self.adapter.execute(&request).await {
            Ok(text) => (true, text),
            Err(err) => (
                false,
                crate::adapter::messages::describe(request.action().ok(), &err),
            ),
        };

        Ok(ToolResult {
            success,
            output: json!({ "text": text }),
        })
    }
}
