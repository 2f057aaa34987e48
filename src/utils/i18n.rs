// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Selector
            translations.insert("select_destination_placeholder", "-- Select destination --");

            // Mensajes de estado
            translations.insert(
                "error_loading_destinations",
                "Failed to load destinations. Please refresh the page.",
            );
            translations.insert("no_results_fallback", "No results found");
            translations.insert(
                "server_connection_error",
                "Error connecting to the server. Please try again.",
            );

            // Cards
            translations.insert("delay_unit", "minutes average delay");
        }
        _ => {
            // Hebreo (idioma por defecto de la app)
            translations.insert("select_destination_placeholder", "-- בחר יעד --");

            // Mensajes de estado
            translations.insert(
                "error_loading_destinations",
                "שגיאה בטעינת היעדים. אנא רענן את הדף.",
            );
            translations.insert("no_results_fallback", "לא נמצאו תוצאות");
            translations.insert("server_connection_error", "שגיאה בחיבור לשרת. אנא נסה שוב.");

            // Cards
            translations.insert("delay_unit", "דקות עיכוב ממוצע");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("HE" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hebrew_is_the_default() {
        assert_eq!(t("no_results_fallback", "HE"), "לא נמצאו תוצאות");
        assert_eq!(t("no_results_fallback", "he"), "לא נמצאו תוצאות");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("clave_inexistente", "EN"), "clave_inexistente");
    }
}
