use super::PublicDataAdapter;
use crate::error::QueryError;
use crate::providers::ibge::CnaeSubclass;

/// Scanning stops once this many matches are collected.
pub const MAX_COLLECTED: usize = 10;
/// Matches rendered out of the collected ones.
pub const MAX_SHOWN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnaeMatch {
    pub code: String,
    pub description: String,
}

impl PublicDataAdapter {
    /// Fetches the whole subclass table and filters it locally.
    pub async fn search_cnae(&self, term: Option<&str>) -> Result<String, QueryError> {
        let term = term.ok_or(QueryError::MissingParameter("query_term"))?;
        let subclasses = self.ibge.cnae_subclasses().await?;

        if subclasses.is_empty() {
            return Err(QueryError::EmptyDataset);
        }

        let matches = collect_matches(&subclasses, term);
        if matches.is_empty() {
            return Err(QueryError::NotFound(term.to_string()));
        }
        Ok(render_matches(term, &matches))
    }
}

/// Case-insensitive substring match on code or description, in table
/// order, stopping at [`MAX_COLLECTED`]. Later matches are never seen, so
/// the count is a lower bound.
pub fn collect_matches(subclasses: &[CnaeSubclass], term: &str) -> Vec<CnaeMatch> {
    let needle = term.to_lowercase();
    let mut matches = Vec::new();

    for subclass in subclasses {
        let code = subclass.id.as_deref().unwrap_or_default();
        let description = subclass.descricao.as_deref().unwrap_or_default();

        if code.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle) {
            matches.push(CnaeMatch {
                code: code.to_string(),
                description: description.to_string(),
            });
        }

        if matches.len() >= MAX_COLLECTED {
            break;
        }
    }

    matches
}

fn render_matches(term: &str, matches: &[CnaeMatch]) -> String {
    let mut lines = vec![format!("🔎 **Resultados CNAE para '{}':**\n", term)];
    lines.extend(
        matches
            .iter()
            .take(MAX_SHOWN)
            .map(|m| format!("• **{}**: {}", m.code, m.description)),
    );
    lines.push(format!(
        "\n✅ Encontrados {} resultados (mostrando top {})",
        matches.len(),
        MAX_SHOWN
    ));
    lines.push("Fonte: IBGE (Classificação Nacional de Atividades Econômicas)".to_string());
    lines.join("\n")
}
