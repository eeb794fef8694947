use chrono::Datelike;

use super::PublicDataAdapter;
use crate::error::QueryError;
use crate::providers::brasilapi::Holiday;
use crate::providers::or_na;

const MAX_HOLIDAYS: usize = 15;

impl PublicDataAdapter {
    /// National holidays of `year`, defaulting to the current local year.
    pub async fn holidays(&self, year: Option<&str>) -> Result<String, QueryError> {
        let year = year.map_or_else(current_year, str::to_string);
        let holidays = self.brasilapi.holidays(&year).await?;
        Ok(render_holidays(&year, &holidays))
    }
}

pub(crate) fn current_year() -> String {
    chrono::Local::now().year().to_string()
}

fn render_holidays(year: &str, holidays: &[Holiday]) -> String {
    let lines: Vec<String> = holidays
        .iter()
        .take(MAX_HOLIDAYS)
        .map(|h| format!("- {}: {} ({})", or_na(&h.date), or_na(&h.name), or_na(&h.kind)))
        .collect();

    format!(
        "📅 **Feriados Nacionais de {}:**\n{}\nFonte: BrasilAPI",
        year,
        lines.join("\n")
    )
}
