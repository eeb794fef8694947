use super::PublicDataAdapter;
use crate::error::QueryError;
use crate::providers::brasilapi::{FipeBrand, VehicleType};
use crate::providers::or_na;

const MAX_BRANDS: usize = 15;

impl PublicDataAdapter {
    /// Unknown vehicle types fall back to cars rather than failing.
    pub async fn fipe_brands(&self, vehicle_type: Option<&str>) -> Result<String, QueryError> {
        let vehicle_type = VehicleType::from_param(vehicle_type);
        let brands = self.brasilapi.fipe_brands(vehicle_type).await?;
        Ok(render_brands(vehicle_type, &brands))
    }
}

fn render_brands(vehicle_type: VehicleType, brands: &[FipeBrand]) -> String {
    let lines: Vec<String> = brands
        .iter()
        .take(MAX_BRANDS)
        .map(|b| format!("- {}", or_na(&b.nome)))
        .collect();

    format!(
        "🚗 **Marcas de {} (Tabela FIPE - Top 15):**\n{}\nFonte: BrasilAPI (FIPE)",
        vehicle_type.label(),
        lines.join("\n")
    )
}
