// ============================================================================
// DESTINATION - Identificador opaco de destino
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de destino tal como lo entrega el servidor.
/// La comparación es exacta: dos destinos con distinta capitalización o
/// espacios NO son iguales.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destination(String);

impl Destination {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_is_exact() {
        assert_ne!(Destination::new("Paris"), Destination::new("paris"));
        assert_ne!(Destination::new("Paris"), Destination::new("Paris "));
        assert_eq!(Destination::new("Paris"), Destination::new("Paris"));
    }

    #[test]
    fn sorts_alphabetically() {
        let mut dests = vec![
            Destination::new("Tokyo"),
            Destination::new("Amsterdam"),
            Destination::new("Paris"),
        ];
        dests.sort();
        let names: Vec<&str> = dests.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, vec!["Amsterdam", "Paris", "Tokyo"]);
    }
}
