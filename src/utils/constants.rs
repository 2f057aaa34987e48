/// URL base de la API
/// Configurada en tiempo de compilación:
/// - Por defecto: cadena vacía (mismo origen)
/// - Override: via API_BASE env var (cargada por build.rs desde .env)
pub const API_BASE: &str = match option_env!("API_BASE") {
    Some(url) => url,
    None => "",
};

/// Idioma por defecto de la UI
pub const DEFAULT_LANG: &str = "HE";

/// Tiempo máximo (ms) que se espera la señal de fin de animación de reset
/// antes de continuar igual. El timeline de reset dura menos de un segundo;
/// pasado este plazo se re-habilita el input sin esperar más.
pub const RESET_GRACE_MS: u32 = 2000;
