use crate::canvas::CanvasPainter;
use crate::constants::{ATTR_PARTICLES, ATTR_SEED};
use crate::events::Listeners;
use crate::frame::{self, FrameDriver, FrameLoop};
use crate::{dom, input};
use field_core::{AnimationSession, Continuation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct BackgroundFrame {
    session: Rc<RefCell<AnimationSession>>,
    painter: CanvasPainter,
}

impl FrameDriver for BackgroundFrame {
    fn frame(&mut self) -> Continuation {
        self.session.borrow_mut().run(&mut self.painter)
    }
}

/// A particle field running on one canvas. Dropping it unmounts.
#[wasm_bindgen]
pub struct ParticleBackground {
    session: Rc<RefCell<AnimationSession>>,
    frame_loop: FrameLoop,
    listeners: Listeners,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Mount on the canvas with id `canvas_id`. Returns `undefined` (and logs)
    /// when the canvas, its 2d context or the viewport is unusable.
    pub fn mount(canvas_id: &str) -> Option<ParticleBackground> {
        match mount_on(canvas_id) {
            Ok(bg) => Some(bg),
            Err(e) => {
                log::warn!("[background] not mounted on #{}: {:#}", canvas_id, e);
                None
            }
        }
    }

    /// Stop rendering and detach listeners. Safe to call more than once.
    pub fn unmount(&self) {
        self.frame_loop.cancel();
        self.listeners.detach();
        self.session.borrow_mut().teardown();
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.session.borrow().frames() as f64
    }

    /// True while the session is live and a frame is pending.
    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        !self.session.borrow().is_torn_down() && self.frame_loop.is_scheduled()
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

pub(crate) fn mount_on(canvas_id: &str) -> anyhow::Result<ParticleBackground> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let surface = dom::fit_canvas_to_viewport(&window, &canvas);
    let painter = CanvasPainter::from_canvas(&canvas)?;
    let params = input::params_from_attrs(
        canvas.get_attribute(ATTR_PARTICLES).as_deref(),
        canvas.get_attribute(ATTR_SEED).as_deref(),
    );
    let count = params.count;
    let session = Rc::new(RefCell::new(AnimationSession::mount(surface, params)?));

    let listeners = Listeners::attach(&window, &canvas, &session)?;
    let frame_loop = frame::start_loop(BackgroundFrame {
        session: session.clone(),
        painter,
    });
    log::info!(
        "[background] mounted #{} {}x{} particles={}",
        canvas_id,
        surface.width,
        surface.height,
        count
    );
    Ok(ParticleBackground {
        session,
        frame_loop,
        listeners,
    })
}
