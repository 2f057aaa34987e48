// ============================================================================
// SEARCH SESSION - Estado de la sesión de búsqueda
// ============================================================================
// Una sola instancia, creada al arrancar la app y mutada únicamente por el
// SearchViewModel vía las transiciones definidas. Nunca se destruye, solo
// vuelve a Idle.
// ============================================================================

use crate::models::Destination;
use uuid::Uuid;

/// Token opaco que identifica la request en vuelo más reciente.
/// Una respuesta cuyo id no coincide con el actual es obsoleta y se descarta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Fase de la sesión de búsqueda.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    ShowingResults,
    ShowingError,
}

/// Estado mutable de la sesión.
///
/// Invariante: `phase == Loading` si y solo si `in_flight` es `Some`.
/// Invariante: a lo sumo una request lógica en vuelo; una búsqueda nueva
/// supera (cancela lógicamente) a la anterior sobreescribiendo el id.
#[derive(Debug)]
pub struct SearchSession {
    selected_destination: Option<Destination>,
    phase: SearchPhase,
    in_flight: Option<RequestId>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            selected_destination: None,
            phase: SearchPhase::Idle,
            in_flight: None,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn selected_destination(&self) -> Option<&Destination> {
        self.selected_destination.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// Registrar la selección del usuario. No dispara ninguna request.
    pub fn set_selection(&mut self, destination: Option<Destination>) {
        self.selected_destination = destination;
    }

    pub fn clear_selection(&mut self) {
        self.selected_destination = None;
    }

    /// Pasar a Loading y emitir un request id nuevo. Si ya había una request
    /// en vuelo, queda superada: su respuesta se descartará por id.
    pub fn begin_loading(&mut self) -> RequestId {
        let id = RequestId::fresh();
        self.phase = SearchPhase::Loading;
        self.in_flight = Some(id);
        id
    }

    /// ¿La respuesta con este id corresponde a la request en vuelo actual?
    pub fn is_current(&self, id: RequestId) -> bool {
        self.in_flight == Some(id)
    }

    /// Cerrar la request en vuelo y pasar a la fase terminal de la búsqueda.
    pub fn finish_loading(&mut self, phase: SearchPhase) {
        debug_assert!(self.in_flight.is_some());
        debug_assert!(matches!(
            phase,
            SearchPhase::ShowingResults | SearchPhase::ShowingError
        ));
        self.in_flight = None;
        self.phase = phase;
    }

    /// Volver a Idle. Solo válido sin request en vuelo.
    pub fn reset_phase(&mut self) {
        debug_assert!(self.in_flight.is_none());
        self.phase = SearchPhase::Idle;
    }

    /// Chequeo del invariante fase/request, usado por los tests de propiedad.
    pub fn invariant_holds(&self) -> bool {
        (self.phase == SearchPhase::Loading) == self.in_flight.is_some()
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_without_selection() {
        let session = SearchSession::new();
        assert_eq!(session.phase(), SearchPhase::Idle);
        assert!(session.selected_destination().is_none());
        assert!(session.invariant_holds());
    }

    #[test]
    fn loading_iff_in_flight() {
        let mut session = SearchSession::new();
        assert!(session.invariant_holds());

        let id = session.begin_loading();
        assert!(session.is_loading());
        assert!(session.is_current(id));
        assert!(session.invariant_holds());

        session.finish_loading(SearchPhase::ShowingResults);
        assert!(!session.is_loading());
        assert!(!session.is_current(id));
        assert!(session.invariant_holds());
    }

    #[test]
    fn newer_request_supersedes_older() {
        let mut session = SearchSession::new();
        let first = session.begin_loading();
        let second = session.begin_loading();

        assert!(!session.is_current(first));
        assert!(session.is_current(second));
        assert!(session.invariant_holds());
    }
}
