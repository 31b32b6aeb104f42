use crate::dom;
use field_core::AnimationSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub fn resize_handler(
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    session: Rc<RefCell<AnimationSession>>,
) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let surface = dom::fit_canvas_to_viewport(&window, &canvas);
        session.borrow_mut().resized(surface);
    }) as Box<dyn FnMut()>)
}
