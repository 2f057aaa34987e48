// ============================================================================
// DISPLAY MODEL - Modelo de presentación de resultados
// ============================================================================
// Datos ya formateados, listos para volcar al DOM. Sin red ni timing.
// ============================================================================

use crate::models::Destination;

/// Card de aerolínea lista para renderizar.
/// `delay_text` ya viene redondeado a 2 decimales.
#[derive(Clone, Debug, PartialEq)]
pub struct AirlineCard {
    pub rank: u32,
    pub name: String,
    pub delay_text: String,
    pub logo_url: String,
}

/// Modelo de presentación: o resultados rankeados, o un mensaje sin resultados.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayModel {
    Results {
        destination: Destination,
        message: String,
        cards: Vec<AirlineCard>,
    },
    NoResults {
        message: String,
    },
}
