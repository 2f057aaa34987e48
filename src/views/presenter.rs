// ============================================================================
// DOM PRESENTER - Adaptador de presentación sobre el DOM real
// ============================================================================
// Única implementación de SearchPresenter en producción. El markup vive en
// index.html; acá solo se buscan elementos por id y se mutan. La máquina de
// estados no sabe nada de esto.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

use crate::dom::{
    add_class, append_child, get_element_by_id, query_selector, remove_class, set_disabled,
    set_inner_html, set_text_content, ElementBuilder,
};
use crate::models::{Destination, DisplayModel};
use crate::utils::animator_ffi;
use crate::utils::i18n::t;
use crate::viewmodels::{AnimatorEvent, SearchPresenter};
use crate::views::render_airline_card;

const SELECT_ID: &str = "destination-select";
const SEARCH_BTN_ID: &str = "search-btn";
const RESET_BTN_ID: &str = "reset-btn";
const LOADING_ID: &str = "loading";
const RESULTS_ID: &str = "results";
const NO_RESULTS_ID: &str = "no-results";
const CARDS_CONTAINER_ID: &str = "airline-cards";
const RESULTS_MESSAGE_ID: &str = "results-message";
const NO_RESULTS_MESSAGE_ID: &str = "no-results-message";

pub struct DomPresenter {
    language: String,
}

impl DomPresenter {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    fn show(&self, id: &str) {
        if let Some(element) = get_element_by_id(id) {
            let _ = remove_class(&element, "hidden");
        }
    }

    fn hide(&self, id: &str) {
        if let Some(element) = get_element_by_id(id) {
            let _ = add_class(&element, "hidden");
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = get_element_by_id(id) {
            set_text_content(&element, text);
        }
    }

    fn render_results(
        &self,
        destination: &Destination,
        message: &str,
        cards: &[crate::models::AirlineCard],
    ) -> Result<(), JsValue> {
        if let Ok(Some(header)) = query_selector(".destination-name") {
            set_text_content(&header, destination.as_str());
        }
        self.set_text(RESULTS_MESSAGE_ID, message);

        let container = get_element_by_id(CARDS_CONTAINER_ID)
            .ok_or_else(|| JsValue::from_str("No #airline-cards element found"))?;
        set_inner_html(&container, "");

        let delay_unit = t("delay_unit", &self.language);
        for card in cards {
            let card_el = render_airline_card(card, &delay_unit)?;
            append_child(&container, &card_el)?;
        }

        self.show(RESULTS_ID);
        Ok(())
    }

    fn try_populate(&self, destinations: &[Destination]) -> Result<(), JsValue> {
        let select = get_element_by_id(SELECT_ID)
            .ok_or_else(|| JsValue::from_str("No #destination-select element found"))?;
        set_inner_html(&select, "");

        let placeholder = ElementBuilder::new("option")?
            .attr("value", "")?
            .text(&t("select_destination_placeholder", &self.language))
            .build();
        append_child(&select, &placeholder)?;

        for destination in destinations {
            let option = ElementBuilder::new("option")?
                .attr("value", destination.as_str())?
                .text(destination.as_str())
                .build();
            append_child(&select, &option)?;
        }
        Ok(())
    }
}

impl SearchPresenter for DomPresenter {
    fn populate_destinations(&self, destinations: &[Destination]) {
        if let Err(e) = self.try_populate(destinations) {
            log::error!("❌ Error poblando el selector de destinos: {:?}", e);
        }
    }

    fn render_display_model(&self, model: &DisplayModel) {
        match model {
            DisplayModel::Results {
                destination,
                message,
                cards,
            } => {
                if let Err(e) = self.render_results(destination, message, cards) {
                    log::error!("❌ Error renderizando resultados: {:?}", e);
                }
            }
            DisplayModel::NoResults { message } => {
                self.set_text(NO_RESULTS_MESSAGE_ID, message);
                self.show(NO_RESULTS_ID);
            }
        }
    }

    fn set_loading_visible(&self, visible: bool) {
        if visible {
            self.show(LOADING_ID);
        } else {
            self.hide(LOADING_ID);
        }
    }

    fn clear_results(&self) {
        self.hide(RESULTS_ID);
        self.hide(NO_RESULTS_ID);
    }

    fn set_search_enabled(&self, enabled: bool) {
        if let Some(button) = get_element_by_id(SEARCH_BTN_ID) {
            let _ = set_disabled(&button, !enabled);
        }
    }

    fn set_selector_enabled(&self, enabled: bool) {
        if let Some(select) = get_element_by_id(SELECT_ID) {
            let _ = set_disabled(&select, !enabled);
        }
        if enabled {
            animator_ffi::animate_dropdown_enable();
        }
    }

    fn set_reset_visible(&self, visible: bool) {
        if visible {
            self.show(RESET_BTN_ID);
            self.hide(SEARCH_BTN_ID);
        } else {
            self.hide(RESET_BTN_ID);
            self.show(SEARCH_BTN_ID);
        }
    }

    fn clear_selection(&self) {
        if let Some(select) = get_element_by_id(SELECT_ID) {
            if let Some(select) = select.dyn_ref::<HtmlSelectElement>() {
                select.set_value("");
            }
        }
    }

    fn focus_selector(&self) {
        if let Some(select) = get_element_by_id(SELECT_ID) {
            crate::dom::focus(&select);
        }
    }

    fn notify_animator(&self, event: AnimatorEvent) {
        match event {
            AnimatorEvent::LoadingStarted => animator_ffi::animate_loading(),
            AnimatorEvent::ResultsShown { .. } => animator_ffi::animate_show_results(),
            AnimatorEvent::NoResultsShown { .. } => {
                // El animator no tiene timeline para este estado
                log::debug!("💤 no-results sin animación asociada");
            }
            AnimatorEvent::ResetStarted => {
                // La señal visual del reset corre en la tarea de reset
                // (animator_ffi::reset_out_settled), con plazo acotado.
            }
            AnimatorEvent::PageNavigated { from, to } => {
                let from_el = get_element_by_id(&from);
                let to_el = get_element_by_id(&to);
                if let (Some(from_el), Some(to_el)) = (from_el, to_el) {
                    if !animator_ffi::animate_page_transition(&from_el, &to_el) {
                        // Sin animator: togglear las clases directamente
                        let _ = remove_class(&from_el, "active");
                        let _ = add_class(&to_el, "active");
                    }
                }
            }
        }
    }
}
