// ============================================================================
// FLIGHT RECOMMENDER - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: adaptador de presentación sobre el DOM (sin lógica)
// - ViewModels: máquina de estados de búsqueda + shaping de resultados
// - Services: SOLO comunicación API
// - State: sesión de búsqueda (selección, fase, request en vuelo)
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod dom;
mod error;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Instancia global de la app: viva durante toda la sesión de la pestaña
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("✈️ Flight Recommender arrancando...");

    let app = App::new()?;
    app.init();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}
