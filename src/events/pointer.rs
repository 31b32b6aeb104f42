use crate::input;
use field_core::{AnimationSession, Surface};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Pointer position in canvas backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_surface(
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        DVec2::new(rect.left(), rect.top()),
        DVec2::new(rect.width(), rect.height()),
        Surface::new(canvas.width() as f64, canvas.height() as f64),
    )
}

pub fn pointermove_handler(
    canvas: web::HtmlCanvasElement,
    session: Rc<RefCell<AnimationSession>>,
) -> Closure<dyn FnMut(web::PointerEvent)> {
    Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &canvas);
        session.borrow_mut().pointer_moved(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>)
}
