use crate::input;
use field_core::Surface;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Current viewport size in CSS px; zero when the window reports nothing usable.
pub fn viewport_surface(window: &web::Window) -> Surface {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    input::viewport_surface(read(window.inner_width()), read(window.inner_height()))
}

/// Size the canvas backing store to the viewport and report the new surface.
pub fn fit_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Surface {
    let surface = viewport_surface(window);
    canvas.set_width(surface.width as u32);
    canvas.set_height(surface.height as u32);
    surface
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Set the inline `width` of an element, leaving its other inline styles alone.
#[inline]
pub fn set_width_style(document: &web::Document, element_id: &str, width: &str) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = el.style().set_property("width", width);
    }
}
