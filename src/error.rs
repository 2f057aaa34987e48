// ============================================================================
// ERROR - Taxonomía de errores de la API
// ============================================================================

use thiserror::Error;

/// Errores de las llamadas a la API de recomendaciones.
///
/// Las respuestas obsoletas (request superada por otra más nueva) no son un
/// error: el controlador las descarta en silencio comparando el request id.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Fallo de transporte/conexión.
    #[error("error de red: {0}")]
    Network(String),

    /// Respuesta malformada, o el servidor reportó fallo donde no hay
    /// contrato de payload de error.
    #[error("respuesta inválida: {0}")]
    Protocol(String),

    /// Destino vacío. El UI lo previene deshabilitando el botón, pero se
    /// chequea defensivamente igual.
    #[error("destino vacío")]
    InvalidArgument,
}
