use field_core::Continuation;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Something advanced once per `requestAnimationFrame` tick.
pub trait FrameDriver {
    fn frame(&mut self) -> Continuation;
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running RAF loop.
///
/// The loop stops rescheduling on its own once the driver returns
/// [`Continuation::Halt`]; [`FrameLoop::cancel`] stops it from outside.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn is_scheduled(&self) -> bool {
        self.raf_id.get().is_some()
    }

    /// Cancel the pending frame and release the tick closure. Idempotent.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // The closure holds a clone of `tick`; dropping it breaks the cycle.
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop<D: FrameDriver + 'static>(mut driver: D) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        if driver.frame() == Continuation::Halt {
            log::debug!("[frame] loop halted");
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            raf_id_tick.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(request_frame(cb));
    }
    FrameLoop { raf_id, tick }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let window = web::window()?;
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
