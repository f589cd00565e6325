#![cfg(target_arch = "wasm32")]
//! Browser entry points: auto-initialization once the page is ready, and a
//! direct render call for hosts that already hold a resolved configuration.

mod controller;
mod dom;
mod fetcher;
mod overlay;
mod viewer;
mod watcher;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pano-web starting");

    when_document_ready(|| {
        if let Err(e) = activate_watcher() {
            log::error!("watch error: {:?}", e);
        }
    });
    Ok(())
}

fn activate_watcher() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    watcher::MountWatcher::new(document).activate()
}

/// Render one specific element with a literal configuration object,
/// bypassing discovery and fetch. The element keeps its once-only
/// guarantee and any `data-override` attributes it carries; with no
/// configuration given this falls back to the element's declared sources.
#[wasm_bindgen(js_name = renderViewer)]
pub fn render_viewer(container_id: &str, config: JsValue) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(container_id) else {
        log::error!("[mount] no element with id {container_id}");
        return;
    };
    let inline = if config.is_null() || config.is_undefined() {
        None
    } else {
        js_sys::JSON::stringify(&config)
            .ok()
            .and_then(|text| text.as_string())
    };
    controller::process_mount(element, inline);
}

/// Run `callback` now if the document has finished parsing, otherwise on
/// `DOMContentLoaded`.
fn when_document_ready(callback: impl FnOnce() + 'static) {
    let Some(document) = dom::window_document() else {
        log::error!("no document");
        return;
    };
    if document.ready_state() == "loading" {
        let closure = Closure::once_into_js(callback);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref());
    } else {
        callback();
    }
}
