pub mod pointer;
pub mod resize;

use field_core::AnimationSession;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window listeners feeding one animation session. Removed on
/// [`Listeners::detach`] or drop.
pub struct Listeners {
    window: web::Window,
    resize: Closure<dyn FnMut()>,
    pointer: Closure<dyn FnMut(web::PointerEvent)>,
    attached: Cell<bool>,
}

impl Listeners {
    pub fn attach(
        window: &web::Window,
        canvas: &web::HtmlCanvasElement,
        session: &Rc<RefCell<AnimationSession>>,
    ) -> anyhow::Result<Self> {
        let resize = resize::resize_handler(window.clone(), canvas.clone(), session.clone());
        let pointer = pointer::pointermove_handler(canvas.clone(), session.clone());
        window
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("resize listener: {:?}", e))?;
        if let Err(e) = window
            .add_event_listener_with_callback("pointermove", pointer.as_ref().unchecked_ref())
        {
            let _ = window
                .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
            return Err(anyhow::anyhow!("pointermove listener: {:?}", e));
        }
        Ok(Self {
            window: window.clone(),
            resize,
            pointer,
            attached: Cell::new(true),
        })
    }

    pub fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        let _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.pointer.as_ref().unchecked_ref(),
        );
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach();
    }
}
