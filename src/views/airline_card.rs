// ============================================================================
// AIRLINE CARD VIEW - Card de aerolínea rankeada
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use crate::dom::{append_child, create_element, set_inner_html, ElementBuilder};
use crate::models::AirlineCard;

/// Renderizar la card de una aerolínea rankeada
pub fn render_airline_card(card: &AirlineCard, delay_unit: &str) -> Result<Element, JsValue> {
    let rank_el = ElementBuilder::new("div")?
        .class("airline-rank")
        .text(&card.rank.to_string())
        .build();

    let name_el = ElementBuilder::new("div")?
        .class("airline-name")
        .text(&card.name)
        .build();

    let delay_value = ElementBuilder::new("span")?
        .class("delay-value")
        .text(&card.delay_text)
        .build();

    let delay_unit_el = ElementBuilder::new("span")?
        .class("delay-unit")
        .text(delay_unit)
        .build();

    let delay_el = ElementBuilder::new("div")?
        .class("airline-delay")
        .child(delay_value)?
        .child(delay_unit_el)?
        .build();

    let info_el = ElementBuilder::new("div")?
        .class("airline-info")
        .child(name_el)?
        .child(delay_el)?
        .build();

    // Glifo placeholder inmediato; el logo real se difiere a su evento load
    let placeholder = ElementBuilder::new("span")?
        .class("airline-logo-placeholder")
        .text("✈️")
        .build();

    let logo_el = ElementBuilder::new("div")?
        .class("airline-logo")
        .child(placeholder)?
        .build();

    attach_deferred_logo(&logo_el, &card.logo_url, &card.name)?;

    let card_el = ElementBuilder::new("div")?
        .class(&format!("airline-card rank-{}", card.rank))
        .child(rank_el)?
        .child(info_el)?
        .child(logo_el)?
        .build();

    Ok(card_el)
}

/// Cargar el logo fuera del DOM y recién reemplazar el placeholder cuando la
/// imagen cargó. Si la carga falla, el glifo queda.
fn attach_deferred_logo(container: &Element, logo_url: &str, name: &str) -> Result<(), JsValue> {
    let img: HtmlImageElement = create_element("img")?.dyn_into()?;
    img.set_alt(name);

    {
        let container = container.clone();
        let loaded_img = img.clone();
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            set_inner_html(&container, "");
            let _ = append_child(&container, &loaded_img);
        }) as Box<dyn FnMut(web_sys::Event)>);

        img.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // El src se setea después de registrar el listener
    img.set_src(logo_url);
    Ok(())
}
