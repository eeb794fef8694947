use super::PublicDataAdapter;
use crate::error::QueryError;
use crate::providers::brasilapi::Bank;
use crate::providers::or_na;

const MAX_BANKS: usize = 10;

impl PublicDataAdapter {
    pub async fn banks_list(&self) -> Result<String, QueryError> {
        let banks = self.brasilapi.banks().await?;
        Ok(render_banks(&banks))
    }
}

/// Keeps the provider's order and drops everything past the first ten.
fn render_banks(banks: &[Bank]) -> String {
    let lines: Vec<String> = banks
        .iter()
        .take(MAX_BANKS)
        .map(|b| format!("- {} (Código: {})", or_na(&b.name), or_na(&b.code)))
        .collect();

    format!(
        "🏦 **Bancos Brasileiros (Top 10):**\n{}\nFonte: BrasilAPI",
        lines.join("\n")
    )
}
