//! Binding to the panorama rendering library (global `pannellum` object).
//! The library draws into the container element identified by id; this
//! crate only forwards a resolved configuration and drives the handle.

use pano_core::ViewerHandle;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Handle for one instantiated viewer.
    pub type JsViewer;

    #[wasm_bindgen(js_namespace = pannellum, js_name = viewer, catch)]
    pub fn create_viewer(container_id: &str, config: &JsValue) -> Result<JsViewer, JsValue>;

    #[wasm_bindgen(method, js_name = getYaw)]
    pub fn get_yaw(this: &JsViewer) -> f64;
    #[wasm_bindgen(method, js_name = setYaw)]
    pub fn set_yaw(this: &JsViewer, yaw: f64);

    #[wasm_bindgen(method, js_name = getPitch)]
    pub fn get_pitch(this: &JsViewer) -> f64;
    #[wasm_bindgen(method, js_name = setPitch)]
    pub fn set_pitch(this: &JsViewer, pitch: f64);

    #[wasm_bindgen(method, js_name = getHfov)]
    pub fn get_hfov(this: &JsViewer) -> f64;
    #[wasm_bindgen(method, js_name = setHfov)]
    pub fn set_hfov(this: &JsViewer, hfov: f64);

    #[wasm_bindgen(method, js_name = toggleFullscreen)]
    pub fn toggle_fullscreen(this: &JsViewer);
}

impl ViewerHandle for JsViewer {
    fn yaw(&self) -> f64 {
        self.get_yaw()
    }
    fn set_yaw(&self, yaw: f64) {
        JsViewer::set_yaw(self, yaw)
    }
    fn pitch(&self) -> f64 {
        self.get_pitch()
    }
    fn set_pitch(&self, pitch: f64) {
        JsViewer::set_pitch(self, pitch)
    }
    fn hfov(&self) -> f64 {
        self.get_hfov()
    }
    fn set_hfov(&self, hfov: f64) {
        JsViewer::set_hfov(self, hfov)
    }
    fn toggle_fullscreen(&self) {
        JsViewer::toggle_fullscreen(self)
    }
}
