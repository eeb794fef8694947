use super::PublicDataAdapter;
use crate::error::QueryError;
use crate::providers::ibge::{Municipality, State};

const IBGE_SOURCE: &str = "Fonte: IBGE (Instituto Brasileiro de Geografia e Estatística)";
const MAX_CANDIDATES: usize = 3;

impl PublicDataAdapter {
    /// Finds a state by code, numeric id or part of its name.
    pub async fn uf_info(&self, query: Option<&str>) -> Result<String, QueryError> {
        let query = query.ok_or(QueryError::MissingParameter("uf_code"))?;
        let states = self.ibge.states().await?;

        find_state(&states, query)
            .map(render_state)
            .ok_or_else(|| QueryError::NotFound(query.to_string()))
    }

    pub async fn city_info(&self, name: Option<&str>) -> Result<String, QueryError> {
        let name = name.ok_or(QueryError::MissingParameter("city_name"))?;
        let cities = self.ibge.municipalities(name).await?;

        match cities.as_slice() {
            [] => Err(QueryError::NotFound(name.to_string())),
            [city] => Ok(render_city(city)),
            _ => Ok(render_candidates(name, &cities)),
        }
    }
}

/// First state in provider order whose code or id equals the trimmed,
/// upper-cased query, or whose upper-cased name contains it.
pub fn find_state<'a>(states: &'a [State], query: &str) -> Option<&'a State> {
    let needle = query.trim().to_uppercase();
    states.iter().find(|state| {
        state.sigla == needle
            || state.id.to_string() == needle
            || state.nome.to_uppercase().contains(&needle)
    })
}

fn render_state(state: &State) -> String {
    format!(
        "🏛️ **Estado: {} ({})**\n🆔 IBGE ID: {}\n🌎 Região: {} ({})\n{}",
        state.nome,
        state.sigla,
        state.id,
        state.region_name(),
        state.region_code(),
        IBGE_SOURCE
    )
}

fn render_city(city: &Municipality) -> String {
    format!(
        "🏙️ **Município: {} - {}**\n\
         🆔 IBGE ID: {}\n\
         🗺️ Estado: {}\n\
         📍 Microrregião: {}\n\
         📍 Mesorregião: {}\n\
         {}",
        city.nome,
        city.state_code(),
        city.id,
        city.state_name(),
        city.microregion_name(),
        city.mesoregion_name(),
        IBGE_SOURCE
    )
}

fn render_candidates(name: &str, cities: &[Municipality]) -> String {
    let lines: Vec<String> = cities
        .iter()
        .take(MAX_CANDIDATES)
        .map(|c| format!("- {} - {} (ID: {})", c.nome, c.state_code(), c.id))
        .collect();

    format!(
        "🏙️ **Múltiplas cidades encontradas para '{}':**\n{}\nFonte: IBGE",
        name,
        lines.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ibge::Region;

    fn state(id: u64, sigla: &str, nome: &str) -> State {
        State {
            id,
            sigla: sigla.to_string(),
            nome: nome.to_string(),
            regiao: Some(Region {
                sigla: Some("SE".to_string()),
                nome: Some("Sudeste".to_string()),
            }),
        }
    }

    fn states() -> Vec<State> {
        vec![
            state(11, "RO", "Rondônia"),
            state(12, "AC", "Acre"),
            state(33, "RJ", "Rio de Janeiro"),
            state(35, "SP", "São Paulo"),
        ]
    }

    #[test]
    fn test_match_by_code_id_and_name() {
        let states = states();
        assert_eq!(find_state(&states, " rj ").unwrap().sigla, "RJ");
        assert_eq!(find_state(&states, "35").unwrap().sigla, "SP");
        assert_eq!(find_state(&states, "são paulo").unwrap().sigla, "SP");
        assert_eq!(find_state(&states, "janeiro").unwrap().sigla, "RJ");
        assert!(find_state(&states, "Bahia").is_none());
    }

    #[test]
    fn test_ambiguous_query_takes_first_in_provider_order() {
        let states = states();
        // "A" is in every name; Rondônia comes first, not Acre.
        assert_eq!(find_state(&states, "a").unwrap().sigla, "RO");
        assert_eq!(find_state(&states, "ac").unwrap().sigla, "AC");
    }

    fn city(id: u64, nome: &str) -> Municipality {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "nome": nome,
            "microrregiao": {
                "nome": "Micro",
                "mesorregiao": {"nome": "Meso", "UF": {"sigla": format!("U{id}"), "nome": "Estado"}}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_candidates_keep_first_three_in_provider_order() {
        let cities: Vec<Municipality> = (1..=5).map(|id| city(id, "Santa Rita")).collect();

        let text = render_candidates("Santa Rita", &cities);
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), MAX_CANDIDATES);
        assert_eq!(
            text,
            "🏙️ **Múltiplas cidades encontradas para 'Santa Rita':**\n\
             - Santa Rita - U1 (ID: 1)\n\
             - Santa Rita - U2 (ID: 2)\n\
             - Santa Rita - U3 (ID: 3)\n\
             Fonte: IBGE"
        );
    }

    #[test]
    fn test_render_state() {
        let text = render_state(&state(33, "RJ", "Rio de Janeiro"));
        assert_eq!(
            text,
            "🏛️ **Estado: Rio de Janeiro (RJ)**\n🆔 IBGE ID: 33\n🌎 Região: Sudeste (SE)\n\
             Fonte: IBGE (Instituto Brasileiro de Geografia e Estatística)"
        );
    }
}
