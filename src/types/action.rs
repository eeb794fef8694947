use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    GetDolarPrice,
    GetEuroPrice,
    GetCepInfo,
    GetBanksList,
    GetCdiRate,
    GetSelicRate,
    GetIpcaRate,
    GetCnpjInfo,
    GetHolidays,
    GetFipeBrands,
    GetIbgeUfInfo,
    GetIbgeCityInfo,
    SearchCnae,
}

impl Action {
    /// Every action, in the order they are advertised to callers.
    pub const ALL: [Action; 13] = [
        Action::GetDolarPrice,
        Action::GetEuroPrice,
        Action::GetCepInfo,
        Action::GetBanksList,
        Action::GetCdiRate,
        Action::GetSelicRate,
        Action::GetIpcaRate,
        Action::GetCnpjInfo,
        Action::GetHolidays,
        Action::GetFipeBrands,
        Action::GetIbgeUfInfo,
        Action::GetIbgeCityInfo,
        Action::SearchCnae,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetDolarPrice => "get_dolar_price",
            Action::GetEuroPrice => "get_euro_price",
            Action::GetCepInfo => "get_cep_info",
            Action::GetBanksList => "get_banks_list",
            Action::GetCdiRate => "get_cdi_rate",
            Action::GetSelicRate => "get_selic_rate",
            Action::GetIpcaRate => "get_ipca_rate",
            Action::GetCnpjInfo => "get_cnpj_info",
            Action::GetHolidays => "get_holidays",
            Action::GetFipeBrands => "get_fipe_brands",
            Action::GetIbgeUfInfo => "get_ibge_uf_info",
            Action::GetIbgeCityInfo => "get_ibge_city_info",
            Action::SearchCnae => "search_cnae",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == s)
    }

    /// Phrase completing "Erro ao ..." when the action fails upstream.
    pub fn operation(&self) -> &'static str {
        match self {
            Action::GetDolarPrice => "consultar cotação do dólar no Banco Central",
            Action::GetEuroPrice => "consultar cotação do Euro",
            Action::GetCepInfo => "consultar CEP",
            Action::GetBanksList => "consultar lista de bancos",
            Action::GetCdiRate => "consultar taxa CDI",
            Action::GetSelicRate => "consultar Selic",
            Action::GetIpcaRate => "consultar IPCA",
            Action::GetCnpjInfo => "consultar CNPJ",
            Action::GetHolidays => "consultar feriados",
            Action::GetFipeBrands => "consultar Tabela FIPE",
            Action::GetIbgeUfInfo => "consultar IBGE",
            Action::GetIbgeCityInfo => "buscar cidade",
            Action::SearchCnae => "consultar CNAE",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
