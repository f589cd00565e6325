//! Per-mount orchestration: read the declared sources, resolve an
//! effective configuration, instantiate the viewer, attach the overlay.

use crate::{fetcher, overlay, viewer};
use pano_core::{resolve, MountSources, Resolution, ViewerConfig};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub const DATA_SRC: &str = "data-src";
pub const DATA_CONFIG: &str = "data-config";
pub const DATA_OVERRIDE: &str = "data-override";
pub const DATA_INITIALIZED: &str = "data-initialized";

/// Process one mount point. `inline` (from the direct render entry point)
/// takes the place of any `data-config` attribute.
///
/// The element is marked initialized synchronously, before the first
/// suspension point: a mount gets at most one attempt, and a later DOM
/// mutation or failed fetch cannot re-trigger it. Each mount runs as its
/// own task, so a slow fetch never delays a sibling panorama.
pub fn process_mount(element: web::Element, inline: Option<String>) {
    if element.get_attribute(DATA_INITIALIZED).is_some() {
        return;
    }
    let _ = element.set_attribute(DATA_INITIALIZED, "1");

    let id = element.id();
    if id.is_empty() {
        log::warn!("[mount] element without id cannot host a viewer; skipping");
        return;
    }

    let sources = MountSources {
        remote_url: element.get_attribute(DATA_SRC),
        inline_json: inline.or_else(|| element.get_attribute(DATA_CONFIG)),
        overrides_json: element.get_attribute(DATA_OVERRIDE),
    };

    spawn_local(async move {
        match resolve(&sources, |url| async move { fetcher::fetch_config(&url).await }).await {
            Resolution::Ready(config) => instantiate(&element, &id, &config),
            Resolution::Skipped(reason) => log::info!("[mount] {id} skipped: {reason}"),
        }
    });
}

fn instantiate(element: &web::Element, id: &str, config: &ViewerConfig) {
    let parsed = match js_sys::JSON::parse(&config.to_json()) {
        Ok(value) => value,
        Err(err) => {
            log::error!("[mount] {id} config not representable: {err:?}");
            return;
        }
    };
    let handle = match viewer::create_viewer(id, &parsed) {
        Ok(handle) => Rc::new(handle),
        Err(err) => {
            log::error!("[mount] {id} viewer construction failed: {err:?}");
            return;
        }
    };
    log::info!("[mount] {id} viewer ready");

    if config.controls_bottom() {
        if let Err(err) = overlay::attach_controls(element, handle) {
            log::error!("[mount] {id} overlay attach failed: {err:?}");
        }
    }
}
