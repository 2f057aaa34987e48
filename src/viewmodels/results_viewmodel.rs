// ============================================================================
// RESULTS VIEWMODEL - Transformación resultado → modelo de presentación
// ============================================================================
// Función pura: sin red, sin timing, sin DOM.
// ============================================================================

use crate::models::{AirlineCard, DisplayModel, RecommendationResult};

/// Construir el modelo de presentación de un resultado de recomendación.
///
/// El retraso se formatea con exactamente 2 decimales. El rank sale del
/// resultado tal cual (posición 1-based en la respuesta del servidor); acá
/// no se reordena nada. Un éxito sin rankings y un fallo del servidor
/// producen ambos la variante sin resultados.
pub fn build_display_model(result: &RecommendationResult) -> DisplayModel {
    match result {
        RecommendationResult::Success {
            destination,
            message,
            rankings,
        } if !rankings.is_empty() => DisplayModel::Results {
            destination: destination.clone(),
            message: message.clone(),
            cards: rankings
                .iter()
                .map(|ranking| AirlineCard {
                    rank: ranking.rank,
                    name: ranking.name.clone(),
                    delay_text: format!("{:.2}", ranking.average_delay_minutes),
                    logo_url: ranking.logo_url.clone(),
                })
                .collect(),
        },
        RecommendationResult::Success { message, .. } => DisplayModel::NoResults {
            message: message.clone(),
        },
        RecommendationResult::Failure { reason } => DisplayModel::NoResults {
            message: reason.clone(),
        },
    }
}
