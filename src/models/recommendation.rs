// ============================================================================
// RECOMMENDATION - Resultado de recomendación por destino
// ============================================================================

use crate::models::Destination;

/// Aerolínea rankeada, tal como la entrega el servidor.
/// El rank es 1-based y lo asigna el cliente por posición en la respuesta;
/// nunca se recalcula ni se reordena (el orden del servidor es autoritativo).
#[derive(Clone, Debug, PartialEq)]
pub struct AirlineRanking {
    pub rank: u32,
    pub name: String,
    pub average_delay_minutes: f64,
    pub logo_url: String,
}

/// Resultado normalizado de `GET /api/recommend/{destino}`.
///
/// `Failure` es una llamada que SÍ llegó al servidor y este reportó fallo
/// (success=false); los fallos de transporte o parseo son `ApiError`.
#[derive(Clone, Debug, PartialEq)]
pub enum RecommendationResult {
    Success {
        destination: Destination,
        message: String,
        rankings: Vec<AirlineRanking>,
    },
    Failure {
        reason: String,
    },
}
