#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod background;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod widgets;

pub use background::ParticleBackground;

thread_local! {
    // Background mounted by `start` on the page's default canvas.
    static AUTO_BACKGROUND: RefCell<Option<ParticleBackground>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    widgets::wire_all(&document);

    if document.get_element_by_id(constants::CANVAS_ID).is_none() {
        log::info!("no #{} on page; background not started", constants::CANVAS_ID);
        return Ok(());
    }
    match background::mount_on(constants::CANVAS_ID) {
        Ok(bg) => AUTO_BACKGROUND.with(|slot| {
            if let Some(old) = slot.borrow_mut().replace(bg) {
                old.unmount();
            }
        }),
        // Blank background; the rest of the page keeps working.
        Err(e) => log::warn!("[background] not mounted: {:#}", e),
    }
    Ok(())
}

/// Tear down the background started on page load, if any.
#[wasm_bindgen]
pub fn unmount_background() {
    AUTO_BACKGROUND.with(|slot| {
        if let Some(bg) = slot.borrow_mut().take() {
            bg.unmount();
        }
    });
}
