// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Cablea los eventos del DOM a la máquina de estados y orquesta el trabajo
// async (fetch de destinos/recomendaciones, plazo de gracia del reset). Toda
// la lógica de transiciones vive en SearchViewModel.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlSelectElement};

use crate::dom::{get_attribute, get_element_by_id, on_change, on_click, on_keypress, query_selector, query_selector_all};
use crate::services::ApiClient;
use crate::utils::constants::{DEFAULT_LANG, RESET_GRACE_MS};
use crate::utils::animator_ffi;
use crate::viewmodels::{AnimatorEvent, SearchPresenter, SearchViewModel};
use crate::views::DomPresenter;

/// Aplicación principal
pub struct App {
    controller: Rc<RefCell<SearchViewModel>>,
    presenter: Rc<DomPresenter>,
    api: ApiClient,
}

impl App {
    /// Crear la aplicación y cablear los listeners. Falla si el markup no
    /// tiene los controles de búsqueda.
    pub fn new() -> Result<Self, JsValue> {
        let presenter = Rc::new(DomPresenter::new(DEFAULT_LANG));
        let controller = Rc::new(RefCell::new(SearchViewModel::new(
            presenter.clone(),
            DEFAULT_LANG,
        )));

        let app = Self {
            controller,
            presenter,
            api: ApiClient::new(),
        };
        app.wire_events()?;
        Ok(app)
    }

    /// Carga inicial: poblar el selector de destinos desde la API
    pub fn init(&self) {
        let api = self.api.clone();
        let controller = self.controller.clone();
        spawn_local(async move {
            match api.list_destinations().await {
                Ok(destinations) => controller.borrow_mut().destinations_loaded(destinations),
                Err(error) => controller.borrow_mut().destinations_failed(error),
            }
        });
    }

    fn wire_events(&self) -> Result<(), JsValue> {
        let select = get_element_by_id("destination-select")
            .ok_or_else(|| JsValue::from_str("No #destination-select element found"))?;
        let search_btn = get_element_by_id("search-btn")
            .ok_or_else(|| JsValue::from_str("No #search-btn element found"))?;
        let reset_btn = get_element_by_id("reset-btn")
            .ok_or_else(|| JsValue::from_str("No #reset-btn element found"))?;

        // Cambio de selección en el dropdown
        {
            let controller = self.controller.clone();
            let select_el = select.clone();
            on_change(&select, move |_event| {
                let value = select_el
                    .dyn_ref::<HtmlSelectElement>()
                    .map(|select| select.value());
                controller.borrow_mut().select_destination(value);
            })?;
        }

        // Enter sobre el selector dispara la búsqueda
        {
            let controller = self.controller.clone();
            let api = self.api.clone();
            let select_el = select.clone();
            on_keypress(&select, move |event| {
                let has_value = select_el
                    .dyn_ref::<HtmlSelectElement>()
                    .map(|select| !select.value().is_empty())
                    .unwrap_or(false);
                if event.key() == "Enter" && has_value {
                    dispatch_search(&controller, &api);
                }
            })?;
        }

        // Botón de búsqueda
        {
            let controller = self.controller.clone();
            let api = self.api.clone();
            on_click(&search_btn, move |_event| {
                dispatch_search(&controller, &api);
            })?;
        }

        // Botón de reset
        {
            let controller = self.controller.clone();
            on_click(&reset_btn, move |_event| {
                dispatch_reset(&controller);
            })?;
        }

        // Links de navegación entre páginas
        let nav_links = query_selector_all(".nav-link")?;
        for link in nav_links.iter() {
            if let Ok(link) = link.dyn_into::<Element>() {
                let presenter = self.presenter.clone();
                let link_el = link.clone();
                on_click(&link, move |event| {
                    event.prevent_default();
                    if let Some(page) = get_attribute(&link_el, "data-page") {
                        navigate_to_page(&presenter, &page);
                    }
                })?;
            }
        }

        // Botón de arranque de la landing
        if let Ok(Some(start_btn)) = query_selector(".start-btn") {
            let presenter = self.presenter.clone();
            on_click(&start_btn, move |_event| {
                navigate_to_page(&presenter, "app");
            })?;
        }

        Ok(())
    }
}

/// Arrancar una búsqueda y reportar su resultado al controller. La respuesta
/// viaja junto al request id: si otra búsqueda la superó mientras tanto, el
/// controller la descarta.
fn dispatch_search(controller: &Rc<RefCell<SearchViewModel>>, api: &ApiClient) {
    let begun = controller.borrow_mut().begin_search();
    if let Some((id, destination)) = begun {
        let api = api.clone();
        let controller = controller.clone();
        spawn_local(async move {
            let outcome = api.get_recommendation(&destination).await;
            controller.borrow_mut().complete_search(id, outcome);
        });
    }
}

/// Arrancar el reset: la señal de fin del animator se espera con plazo
/// acotado, y recién entonces se re-habilita el input.
fn dispatch_reset(controller: &Rc<RefCell<SearchViewModel>>) {
    if controller.borrow_mut().begin_reset() {
        let controller = controller.clone();
        spawn_local(async move {
            animator_ffi::reset_out_settled(RESET_GRACE_MS).await;
            controller.borrow_mut().finish_reset();
        });
    }
}

/// Navegar a otra página: actualizar los links activos, delegar la
/// transición visual al animator y volver arriba de todo.
fn navigate_to_page(presenter: &Rc<DomPresenter>, page: &str) {
    if let Ok(links) = query_selector_all(".nav-link") {
        for link in links.iter() {
            if let Ok(link) = link.dyn_into::<Element>() {
                let is_target = get_attribute(&link, "data-page").as_deref() == Some(page);
                let _ = if is_target {
                    crate::dom::add_class(&link, "active")
                } else {
                    crate::dom::remove_class(&link, "active")
                };
            }
        }
    }

    let current = query_selector(".page.active")
        .ok()
        .flatten()
        .and_then(|element| get_attribute(&element, "id"));

    if let Some(from) = current {
        if from != page {
            presenter.notify_animator(AnimatorEvent::PageNavigated {
                from,
                to: page.to_string(),
            });
        }
    }

    // Scroll suave al tope
    let _ = js_sys::eval("window.scrollTo({ top: 0, behavior: 'smooth' })");
}
