// ============================================================================
// ANIMATOR FFI - Foreign Function Interface para window.FlightAnimations
// ============================================================================
// Solo wrappers para el colaborador de animaciones JS - Sin estado, sin
// lógica. Si FlightAnimations no está cargado, cada wrapper es un no-op: la
// corrección de la app nunca depende del animator.
// ============================================================================

use futures_util::future::select;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

/// Obtener window.FlightAnimations si existe
fn animations_object() -> Option<js_sys::Object> {
    let window = web_sys::window()?;
    let animations = js_sys::Reflect::get(&window, &JsValue::from_str("FlightAnimations")).ok()?;
    animations.dyn_into::<js_sys::Object>().ok()
}

/// Llamar una función del animator sin argumentos. Devuelve el valor JS
/// retornado, o None si el animator o la función no existen.
fn call_animation(name: &str) -> Option<JsValue> {
    let animations = animations_object()?;
    let function = js_sys::Reflect::get(&animations, &JsValue::from_str(name)).ok()?;
    let function = function.dyn_ref::<js_sys::Function>()?;
    function.call0(&animations).ok()
}

/// Animación del estado de carga (fire-and-forget)
pub fn animate_loading() {
    let _ = call_animation("animateLoading");
}

/// Animación de aparición de resultados (fire-and-forget)
pub fn animate_show_results() {
    let _ = call_animation("animateShowResults");
}

/// Animación de re-habilitación del dropdown tras el reset (fire-and-forget)
pub fn animate_dropdown_enable() {
    let _ = call_animation("animateDropdownEnable");
}

/// Transición animada entre páginas. Devuelve false si el animator no está
/// disponible y el caller debe togglear las clases por su cuenta.
pub fn animate_page_transition(from: &Element, to: &Element) -> bool {
    let Some(animations) = animations_object() else {
        return false;
    };
    let Ok(function) = js_sys::Reflect::get(&animations, &JsValue::from_str("animatePageTransition"))
    else {
        return false;
    };
    let Some(function) = function.dyn_ref::<js_sys::Function>() else {
        return false;
    };
    function
        .call2(&animations, from.unchecked_ref(), to.unchecked_ref())
        .is_ok()
}

/// Disparar la animación de salida del reset y esperar su señal de fin,
/// acotada por `grace_ms`: si el animator nunca resuelve (o no existe), se
/// continúa igual pasado el plazo.
pub async fn reset_out_settled(grace_ms: u32) {
    let Some(value) = call_animation("animateResetOut") else {
        return;
    };

    let Ok(promise) = value.dyn_into::<js_sys::Promise>() else {
        return;
    };

    let settled = Box::pin(async {
        let _ = JsFuture::from(promise).await;
    });
    let deadline = Box::pin(TimeoutFuture::new(grace_ms));

    // Lo primero que resuelva gana; el rechazo de la promise también cuenta
    // como señal de fin.
    let _ = select(settled, deadline).await;
}
