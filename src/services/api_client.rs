// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP y normaliza las
// respuestas a tipos del dominio. Sin caché, sin reintentos, sin timeouts
// propios (se usa el del transporte). Exactamente una request por llamada.
// ============================================================================

use gloo_net::http::Request;

use crate::error::ApiError;
use crate::models::{AirlineRanking, Destination, RecommendationResult};
use crate::utils::constants::API_BASE;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE.to_string(),
        }
    }

    /// Listar destinos disponibles
    pub async fn list_destinations(&self) -> Result<Vec<Destination>, ApiError> {
        let url = format!("{}/api/destinations", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body: DestinationsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Protocol(e.to_string()))?;

        if !body.success {
            return Err(ApiError::Protocol("success=false".to_string()));
        }

        log::info!("🌍 Destinos recibidos: {}", body.destinations.len());

        Ok(body
            .destinations
            .into_iter()
            .map(Destination::new)
            .collect())
    }

    /// Obtener recomendación de aerolíneas para un destino
    pub async fn get_recommendation(
        &self,
        destination: &Destination,
    ) -> Result<RecommendationResult, ApiError> {
        if destination.is_empty() {
            return Err(ApiError::InvalidArgument);
        }

        let encoded = String::from(js_sys::encode_uri_component(destination.as_str()));
        let url = format!("{}/api/recommend/{}", self.base_url, encoded);

        log::info!("🔎 Buscando recomendación para: {}", destination);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // El servidor responde el fallo como JSON con status no-2xx: parsear
        // el body sin mirar el status, como hace el fetch original.
        let body: RecommendResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Protocol(e.to_string()))?;

        Ok(normalize_recommendation(body))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizar el DTO de wire al resultado del dominio, asignando ranks
/// 1-based por posición (el orden del servidor es autoritativo).
fn normalize_recommendation(body: RecommendResponse) -> RecommendationResult {
    if !body.success {
        return RecommendationResult::Failure {
            reason: body.error.unwrap_or_default(),
        };
    }

    let rankings = body
        .airlines
        .into_iter()
        .enumerate()
        .map(|(i, airline)| AirlineRanking {
            rank: (i + 1) as u32,
            name: airline.name,
            average_delay_minutes: airline.delay,
            logo_url: airline.logo,
        })
        .collect();

    RecommendationResult::Success {
        destination: Destination::new(body.destination.unwrap_or_default()),
        message: body.message.unwrap_or_default(),
        rankings,
    }
}

#[derive(serde::Deserialize)]
struct DestinationsResponse {
    success: bool,
    #[serde(default)]
    destinations: Vec<String>,
}

#[derive(serde::Deserialize)]
struct RecommendResponse {
    success: bool,
    #[serde(default)]
    destination: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    airlines: Vec<AirlineWire>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(serde::Deserialize)]
struct AirlineWire {
    name: String,
    delay: f64,
    logo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_gets_positional_ranks() {
        let body: RecommendResponse = serde_json::from_str(
            r#"{
                "success": true,
                "destination": "Tokyo",
                "message": "top 3",
                "airlines": [
                    {"name": "A", "delay": 12.345, "logo": "a.png"},
                    {"name": "B", "delay": 20.1, "logo": "b.png"}
                ],
                "total_available": 5
            }"#,
        )
        .unwrap();

        match normalize_recommendation(body) {
            RecommendationResult::Success {
                destination,
                message,
                rankings,
            } => {
                assert_eq!(destination, Destination::new("Tokyo"));
                assert_eq!(message, "top 3");
                assert_eq!(rankings.len(), 2);
                assert_eq!(rankings[0].rank, 1);
                assert_eq!(rankings[0].name, "A");
                assert_eq!(rankings[1].rank, 2);
                assert_eq!(rankings[1].average_delay_minutes, 20.1);
            }
            other => panic!("se esperaba Success, llegó {:?}", other),
        }
    }

    #[test]
    fn failure_body_keeps_server_reason() {
        let body: RecommendResponse =
            serde_json::from_str(r#"{"success": false, "error": "no data"}"#).unwrap();

        assert_eq!(
            normalize_recommendation(body),
            RecommendationResult::Failure {
                reason: "no data".to_string()
            }
        );
    }

    #[test]
    fn failure_body_without_reason_is_empty_string() {
        let body: RecommendResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();

        assert_eq!(
            normalize_recommendation(body),
            RecommendationResult::Failure {
                reason: String::new()
            }
        );
    }

    #[test]
    fn destinations_body_decodes() {
        let body: DestinationsResponse =
            serde_json::from_str(r#"{"success": true, "destinations": ["Paris", "Tokyo"]}"#)
                .unwrap();
        assert!(body.success);
        assert_eq!(body.destinations, vec!["Paris", "Tokyo"]);
    }
}
