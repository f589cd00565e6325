//! Synthesized control overlay: seven affordances appended after the
//! viewer's own nodes, each delegating one action to the viewer handle.

use crate::dom;
use crate::viewer::JsViewer;
use pano_core::ControlAction;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

pub fn attach_controls(container: &web::Element, viewer: Rc<JsViewer>) -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let controls = document.create_element("div")?;
    controls.set_class_name("controls");

    for action in ControlAction::ALL {
        let ctrl = document.create_element("div")?;
        ctrl.class_list().add_2("ctrl", action.css_class())?;
        ctrl.set_text_content(Some(action.glyph()));
        controls.append_child(&ctrl)?;

        let viewer = viewer.clone();
        dom::add_click_listener(&ctrl, move || action.apply(viewer.as_ref()));
    }

    container.append_child(&controls)?;
    Ok(())
}
