// ============================================================================
// SEARCH VIEWMODEL - Máquina de estados de la búsqueda
// ============================================================================
// Coordina selección → Loading → (ShowingResults | ShowingError) → reset.
// SIN dependencias de DOM: todos los efectos salen por el trait
// SearchPresenter, implementado por el adaptador de presentación. Eso permite
// testear las transiciones sin navegador.
// ============================================================================

use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{Destination, DisplayModel, RecommendationResult};
use crate::state::{RequestId, SearchPhase, SearchSession};
use crate::utils::i18n::t;
use crate::viewmodels::results_viewmodel::build_display_model;

/// Notificaciones de ciclo de vida hacia el Animator.
/// Todas fire-and-forget salvo el reset, cuya señal de fin se espera con
/// plazo acotado en la tarea de reset (ver app.rs / animator_ffi).
#[derive(Clone, Debug, PartialEq)]
pub enum AnimatorEvent {
    LoadingStarted,
    ResultsShown { cards: usize },
    NoResultsShown { message: String },
    ResetStarted,
    PageNavigated { from: String, to: String },
}

/// Capacidades de presentación que necesita la máquina de estados.
/// El adaptador real manipula el DOM; los tests registran los efectos.
pub trait SearchPresenter {
    fn populate_destinations(&self, destinations: &[Destination]);
    fn render_display_model(&self, model: &DisplayModel);
    fn set_loading_visible(&self, visible: bool);
    fn clear_results(&self);
    fn set_search_enabled(&self, enabled: bool);
    fn set_selector_enabled(&self, enabled: bool);
    fn set_reset_visible(&self, visible: bool);
    fn clear_selection(&self);
    fn focus_selector(&self);
    fn notify_animator(&self, event: AnimatorEvent);
}

/// ViewModel de búsqueda - dueño único de la SearchSession
pub struct SearchViewModel {
    session: SearchSession,
    destinations: Vec<Destination>,
    language: String,
    presenter: Rc<dyn SearchPresenter>,
}

impl SearchViewModel {
    pub fn new(presenter: Rc<dyn SearchPresenter>, language: impl Into<String>) -> Self {
        Self {
            session: SearchSession::new(),
            destinations: Vec::new(),
            language: language.into(),
            presenter,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Destinos cargados al arrancar. Se ofrecen ordenados alfabéticamente.
    /// Una lista vacía deja la búsqueda deshabilitada para siempre: es una
    /// condición terminal válida, no un error.
    pub fn destinations_loaded(&mut self, mut destinations: Vec<Destination>) {
        destinations.sort();
        if destinations.is_empty() {
            log::warn!("⚠️ El servidor no devolvió destinos; búsqueda deshabilitada");
        } else {
            log::info!("✅ {} destinos disponibles", destinations.len());
        }
        self.destinations = destinations;
        self.presenter.populate_destinations(&self.destinations);
        self.sync_search_enabled();
    }

    /// Fallo cargando destinos: mensaje localizado, la selección queda
    /// imposible hasta recargar la página.
    pub fn destinations_failed(&mut self, error: ApiError) {
        log::error!("❌ Error cargando destinos: {}", error);
        self.presenter.render_display_model(&DisplayModel::NoResults {
            message: t("error_loading_destinations", &self.language),
        });
        self.sync_search_enabled();
    }

    /// Transición 1: registrar la selección, sin request. La búsqueda queda
    /// habilitada solo con selección no vacía y sin request en vuelo.
    pub fn select_destination(&mut self, raw: Option<String>) {
        let destination = raw.filter(|value| !value.is_empty()).map(Destination::new);
        self.session.set_selection(destination);
        self.sync_search_enabled();
    }

    /// Transición 2: arrancar la búsqueda. Devuelve el request id y el
    /// destino a consultar; el caller dispara la llamada async y reporta el
    /// resultado con `complete_search`.
    ///
    /// Con destino vacío no hay transición (chequeo defensivo: el botón ya
    /// estaba deshabilitado). Si había una request en vuelo, la nueva la
    /// supera y la respuesta vieja se descartará por id.
    pub fn begin_search(&mut self) -> Option<(RequestId, Destination)> {
        let destination = match self.session.selected_destination() {
            Some(destination) => destination.clone(),
            None => {
                log::warn!("⚠️ Búsqueda sin destino seleccionado, ignorada");
                return None;
            }
        };

        let id = self.session.begin_loading();
        log::info!("🔎 Buscando aerolíneas para: {}", destination);

        self.presenter.clear_results();
        self.presenter.set_loading_visible(true);
        self.presenter.set_search_enabled(false);
        self.presenter.notify_animator(AnimatorEvent::LoadingStarted);

        Some((id, destination))
    }

    /// Transiciones 3, 4, 5 y 8: llegó la respuesta de la request `id`.
    pub fn complete_search(
        &mut self,
        id: RequestId,
        outcome: Result<RecommendationResult, ApiError>,
    ) {
        // Transición 5: respuesta obsoleta, descarte silencioso sin tocar
        // nada observable.
        if !self.session.is_current(id) {
            log::debug!("💤 Respuesta obsoleta descartada");
            return;
        }

        self.presenter.set_loading_visible(false);

        match outcome {
            Ok(result) => {
                let mut model = build_display_model(&result);
                if let DisplayModel::NoResults { message } = &mut model {
                    if message.is_empty() {
                        *message = t("no_results_fallback", &self.language);
                    }
                }
                self.apply_display_model(model);
            }
            Err(error) => {
                // Transición 8: fallo de red/protocolo → mensaje localizado,
                // nunca un error sin manejar.
                log::error!("❌ Error consultando recomendaciones: {}", error);
                self.apply_display_model(DisplayModel::NoResults {
                    message: t("server_connection_error", &self.language),
                });
            }
        }
    }

    /// Transiciones 6 y 7 (parte 1): arrancar el reset. Devuelve true si hay
    /// que esperar la señal del animator y luego llamar `finish_reset`.
    /// Clicks duplicados son idempotentes: en Idle no pasa nada.
    pub fn begin_reset(&mut self) -> bool {
        match self.session.phase() {
            SearchPhase::ShowingResults | SearchPhase::ShowingError => {
                self.session.reset_phase();
                log::info!("🔄 Reset de la búsqueda");
                self.presenter.notify_animator(AnimatorEvent::ResetStarted);
                true
            }
            SearchPhase::Idle | SearchPhase::Loading => false,
        }
    }

    /// Transición 6 (parte 2): tras la señal de fin del animator (o el plazo
    /// de gracia), limpiar la selección y re-habilitar el input.
    pub fn finish_reset(&mut self) {
        self.session.clear_selection();
        self.presenter.clear_results();
        self.presenter.clear_selection();
        self.presenter.set_selector_enabled(true);
        self.presenter.set_reset_visible(false);
        self.sync_search_enabled();
        self.presenter.focus_selector();
    }

    fn apply_display_model(&mut self, model: DisplayModel) {
        match &model {
            DisplayModel::Results { cards, .. } => {
                // Transición 3: resultados visibles, selector bloqueado,
                // aparece el reset.
                self.session.finish_loading(SearchPhase::ShowingResults);
                self.presenter.render_display_model(&model);
                self.presenter.notify_animator(AnimatorEvent::ResultsShown {
                    cards: cards.len(),
                });
                self.presenter.set_selector_enabled(false);
                self.presenter.set_reset_visible(true);
                self.sync_search_enabled();
            }
            DisplayModel::NoResults { message } => {
                // Transición 4: sin resultados o fallo del servidor. El
                // selector sigue habilitado para reintentar (transición 7).
                self.session.finish_loading(SearchPhase::ShowingError);
                self.presenter.render_display_model(&model);
                self.presenter
                    .notify_animator(AnimatorEvent::NoResultsShown {
                        message: message.clone(),
                    });
                self.sync_search_enabled();
            }
        }
    }

    fn sync_search_enabled(&self) {
        let enabled =
            self.session.selected_destination().is_some() && !self.session.is_loading();
        self.presenter.set_search_enabled(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AirlineRanking;
    use std::cell::RefCell;

    /// Presenter que registra los efectos en orden, sin DOM.
    #[derive(Default)]
    struct RecordingPresenter {
        effects: RefCell<Vec<Effect>>,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Effect {
        Populate(Vec<String>),
        Render(DisplayModel),
        LoadingVisible(bool),
        ClearResults,
        SearchEnabled(bool),
        SelectorEnabled(bool),
        ResetVisible(bool),
        ClearSelection,
        FocusSelector,
        Animator(AnimatorEvent),
    }

    impl RecordingPresenter {
        fn effects(&self) -> Vec<Effect> {
            self.effects.borrow().clone()
        }

        fn last_search_enabled(&self) -> Option<bool> {
            self.effects
                .borrow()
                .iter()
                .rev()
                .find_map(|effect| match effect {
                    Effect::SearchEnabled(enabled) => Some(*enabled),
                    _ => None,
                })
        }

        fn clear(&self) {
            self.effects.borrow_mut().clear();
        }
    }

    impl SearchPresenter for RecordingPresenter {
        fn populate_destinations(&self, destinations: &[Destination]) {
            self.effects.borrow_mut().push(Effect::Populate(
                destinations.iter().map(|d| d.as_str().to_string()).collect(),
            ));
        }

        fn render_display_model(&self, model: &DisplayModel) {
            self.effects.borrow_mut().push(Effect::Render(model.clone()));
        }

        fn set_loading_visible(&self, visible: bool) {
            self.effects.borrow_mut().push(Effect::LoadingVisible(visible));
        }

        fn clear_results(&self) {
            self.effects.borrow_mut().push(Effect::ClearResults);
        }

        fn set_search_enabled(&self, enabled: bool) {
            self.effects.borrow_mut().push(Effect::SearchEnabled(enabled));
        }

        fn set_selector_enabled(&self, enabled: bool) {
            self.effects.borrow_mut().push(Effect::SelectorEnabled(enabled));
        }

        fn set_reset_visible(&self, visible: bool) {
            self.effects.borrow_mut().push(Effect::ResetVisible(visible));
        }

        fn clear_selection(&self) {
            self.effects.borrow_mut().push(Effect::ClearSelection);
        }

        fn focus_selector(&self) {
            self.effects.borrow_mut().push(Effect::FocusSelector);
        }

        fn notify_animator(&self, event: AnimatorEvent) {
            self.effects.borrow_mut().push(Effect::Animator(event));
        }
    }

    fn setup() -> (Rc<RecordingPresenter>, SearchViewModel) {
        let presenter = Rc::new(RecordingPresenter::default());
        let vm = SearchViewModel::new(presenter.clone(), "HE");
        (presenter, vm)
    }

    fn tokyo_success() -> RecommendationResult {
        RecommendationResult::Success {
            destination: Destination::new("Tokyo"),
            message: "top 2".to_string(),
            rankings: vec![
                AirlineRanking {
                    rank: 1,
                    name: "A".to_string(),
                    average_delay_minutes: 12.345,
                    logo_url: "a.png".to_string(),
                },
                AirlineRanking {
                    rank: 2,
                    name: "B".to_string(),
                    average_delay_minutes: 20.1,
                    logo_url: "b.png".to_string(),
                },
            ],
        }
    }

    #[test]
    fn destinations_are_offered_sorted_alphabetically() {
        let (presenter, mut vm) = setup();

        vm.destinations_loaded(vec![Destination::new("Tokyo"), Destination::new("Paris")]);

        assert!(presenter.effects().contains(&Effect::Populate(vec![
            "Paris".to_string(),
            "Tokyo".to_string()
        ])));
        // Sin selección todavía: búsqueda deshabilitada.
        assert_eq!(presenter.last_search_enabled(), Some(false));
    }

    #[test]
    fn empty_destination_list_keeps_search_disabled() {
        let (presenter, mut vm) = setup();

        vm.destinations_loaded(vec![]);

        assert!(presenter.effects().contains(&Effect::Populate(vec![])));
        assert_eq!(presenter.last_search_enabled(), Some(false));
        assert_eq!(vm.session().phase(), SearchPhase::Idle);
    }

    #[test]
    fn selection_alone_does_not_start_a_request() {
        let (presenter, mut vm) = setup();

        vm.select_destination(Some("Tokyo".to_string()));

        assert_eq!(vm.session().phase(), SearchPhase::Idle);
        assert!(vm.session().invariant_holds());
        assert_eq!(presenter.last_search_enabled(), Some(true));
    }

    #[test]
    fn search_without_selection_is_a_defensive_no_op() {
        let (presenter, mut vm) = setup();

        assert!(vm.begin_search().is_none());
        assert_eq!(vm.session().phase(), SearchPhase::Idle);
        assert!(presenter.effects().is_empty());
    }

    #[test]
    fn invariant_holds_after_every_transition() {
        let (_presenter, mut vm) = setup();

        vm.destinations_loaded(vec![Destination::new("Tokyo")]);
        assert!(vm.session().invariant_holds());

        vm.select_destination(Some("Tokyo".to_string()));
        assert!(vm.session().invariant_holds());

        let (id, _dest) = vm.begin_search().unwrap();
        assert!(vm.session().invariant_holds());
        assert_eq!(vm.session().phase(), SearchPhase::Loading);

        vm.complete_search(id, Ok(tokyo_success()));
        assert!(vm.session().invariant_holds());
        assert_eq!(vm.session().phase(), SearchPhase::ShowingResults);

        assert!(vm.begin_reset());
        assert!(vm.session().invariant_holds());

        vm.finish_reset();
        assert!(vm.session().invariant_holds());
        assert_eq!(vm.session().phase(), SearchPhase::Idle);
    }

    #[test]
    fn successful_search_shows_ranked_cards() {
        let (presenter, mut vm) = setup();
        vm.select_destination(Some("Tokyo".to_string()));
        let (id, dest) = vm.begin_search().unwrap();
        assert_eq!(dest, Destination::new("Tokyo"));

        vm.complete_search(id, Ok(tokyo_success()));

        assert_eq!(vm.session().phase(), SearchPhase::ShowingResults);

        let rendered = presenter
            .effects()
            .into_iter()
            .find_map(|effect| match effect {
                Effect::Render(model) => Some(model),
                _ => None,
            })
            .expect("no se renderizó ningún modelo");

        match rendered {
            DisplayModel::Results { cards, .. } => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].rank, 1);
                assert_eq!(cards[0].delay_text, "12.35");
                assert_eq!(cards[1].rank, 2);
                assert_eq!(cards[1].delay_text, "20.10");
            }
            other => panic!("se esperaba Results, llegó {:?}", other),
        }

        // Selector bloqueado y reset visible tras mostrar resultados.
        let effects = presenter.effects();
        assert!(effects.contains(&Effect::SelectorEnabled(false)));
        assert!(effects.contains(&Effect::ResetVisible(true)));
        assert!(effects.contains(&Effect::Animator(AnimatorEvent::ResultsShown { cards: 2 })));
    }

    #[test]
    fn stale_response_changes_nothing_observable() {
        let (presenter, mut vm) = setup();
        vm.select_destination(Some("Paris".to_string()));

        let (first, _) = vm.begin_search().unwrap();
        let (second, _) = vm.begin_search().unwrap();
        assert_ne!(first, second);

        presenter.clear();

        // La respuesta de la primera request llega tarde: descarte total.
        vm.complete_search(first, Ok(tokyo_success()));
        assert_eq!(vm.session().phase(), SearchPhase::Loading);
        assert!(presenter.effects().is_empty());
        assert!(vm.session().invariant_holds());

        // La vigente sí transiciona.
        vm.complete_search(second, Ok(tokyo_success()));
        assert_eq!(vm.session().phase(), SearchPhase::ShowingResults);
    }

    #[test]
    fn server_failure_reaches_the_user_with_its_reason() {
        let (presenter, mut vm) = setup();
        vm.select_destination(Some("Tokyo".to_string()));
        let (id, _) = vm.begin_search().unwrap();

        vm.complete_search(
            id,
            Ok(RecommendationResult::Failure {
                reason: "no data".to_string(),
            }),
        );

        assert_eq!(vm.session().phase(), SearchPhase::ShowingError);
        assert!(presenter.effects().contains(&Effect::Render(
            DisplayModel::NoResults {
                message: "no data".to_string()
            }
        )));
    }

    #[test]
    fn failure_without_reason_gets_localized_fallback() {
        let (presenter, mut vm) = setup();
        vm.select_destination(Some("Tokyo".to_string()));
        let (id, _) = vm.begin_search().unwrap();

        vm.complete_search(
            id,
            Ok(RecommendationResult::Failure {
                reason: String::new(),
            }),
        );

        assert!(presenter.effects().contains(&Effect::Render(
            DisplayModel::NoResults {
                message: t("no_results_fallback", "HE")
            }
        )));
    }

    #[test]
    fn network_error_becomes_localized_message_not_a_panic() {
        let (presenter, mut vm) = setup();
        vm.select_destination(Some("Tokyo".to_string()));
        let (id, _) = vm.begin_search().unwrap();

        vm.complete_search(id, Err(ApiError::Network("fetch falló".to_string())));

        assert_eq!(vm.session().phase(), SearchPhase::ShowingError);
        assert!(vm.session().invariant_holds());
        assert!(presenter.effects().contains(&Effect::Render(
            DisplayModel::NoResults {
                message: t("server_connection_error", "HE")
            }
        )));
        assert!(presenter.effects().contains(&Effect::Animator(
            AnimatorEvent::NoResultsShown {
                message: t("server_connection_error", "HE")
            }
        )));
    }

    #[test]
    fn reset_round_trip_restores_idle_invariants() {
        let (presenter, mut vm) = setup();
        vm.select_destination(Some("Tokyo".to_string()));
        let (id, _) = vm.begin_search().unwrap();
        vm.complete_search(id, Ok(tokyo_success()));

        assert!(vm.begin_reset());
        assert_eq!(vm.session().phase(), SearchPhase::Idle);
        assert!(presenter
            .effects()
            .contains(&Effect::Animator(AnimatorEvent::ResetStarted)));

        presenter.clear();
        vm.finish_reset();

        assert!(vm.session().selected_destination().is_none());
        let effects = presenter.effects();
        assert!(effects.contains(&Effect::ClearSelection));
        assert!(effects.contains(&Effect::SelectorEnabled(true)));
        assert!(effects.contains(&Effect::ResetVisible(false)));
        assert!(effects.contains(&Effect::FocusSelector));
        // Como en el arranque: sin selección, búsqueda deshabilitada.
        assert_eq!(presenter.last_search_enabled(), Some(false));
    }

    #[test]
    fn duplicate_reset_clicks_are_idempotent() {
        let (presenter, mut vm) = setup();
        vm.select_destination(Some("Tokyo".to_string()));
        let (id, _) = vm.begin_search().unwrap();
        vm.complete_search(id, Ok(tokyo_success()));

        assert!(vm.begin_reset());
        presenter.clear();

        // Segundo click: ya en Idle, sin efecto.
        assert!(!vm.begin_reset());
        assert!(presenter.effects().is_empty());
    }

    #[test]
    fn reset_also_leaves_showing_error() {
        let (_presenter, mut vm) = setup();
        vm.select_destination(Some("Tokyo".to_string()));
        let (id, _) = vm.begin_search().unwrap();
        vm.complete_search(
            id,
            Ok(RecommendationResult::Failure {
                reason: "no data".to_string(),
            }),
        );
        assert_eq!(vm.session().phase(), SearchPhase::ShowingError);

        assert!(vm.begin_reset());
        assert_eq!(vm.session().phase(), SearchPhase::Idle);
    }

    #[test]
    fn retry_from_showing_error_goes_back_to_loading() {
        let (_presenter, mut vm) = setup();
        vm.select_destination(Some("Tokyo".to_string()));
        let (id, _) = vm.begin_search().unwrap();
        vm.complete_search(id, Err(ApiError::Network("caída".to_string())));
        assert_eq!(vm.session().phase(), SearchPhase::ShowingError);

        // Transición 7: nueva búsqueda válida directo desde el error.
        assert!(vm.begin_search().is_some());
        assert_eq!(vm.session().phase(), SearchPhase::Loading);
        assert!(vm.session().invariant_holds());
    }

    #[test]
    fn search_disables_button_while_loading() {
        let (presenter, mut vm) = setup();
        vm.select_destination(Some("Tokyo".to_string()));
        vm.begin_search().unwrap();

        assert_eq!(presenter.last_search_enabled(), Some(false));
        assert!(presenter
            .effects()
            .contains(&Effect::Animator(AnimatorEvent::LoadingStarted)));
        assert!(presenter.effects().contains(&Effect::LoadingVisible(true)));
        assert!(presenter.effects().contains(&Effect::ClearResults));
    }
}
