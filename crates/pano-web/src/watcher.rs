//! Document watcher: initial scan plus a MutationObserver subscription,
//! feeding every discovered mount element to the controller exactly once.

use crate::controller;
use pano_core::{mounts_in_batch, MountCandidate, SeenRegistry, MOUNT_MARKER_SELECTOR};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Live DOM node as a discovery candidate.
struct DomNode(web::Node);

impl MountCandidate for DomNode {
    fn is_element(&self) -> bool {
        self.0.node_type() == web::Node::ELEMENT_NODE
    }

    fn matches_marker(&self) -> bool {
        self.0
            .dyn_ref::<web::Element>()
            .map_or(false, |el| el.matches(MOUNT_MARKER_SELECTOR).unwrap_or(false))
    }

    fn marked_descendants(&self) -> Vec<Self> {
        let Some(element) = self.0.dyn_ref::<web::Element>() else {
            return Vec::new();
        };
        match element.query_selector_all(MOUNT_MARKER_SELECTOR) {
            Ok(list) => nodes_of(&list),
            Err(_) => Vec::new(),
        }
    }
}

fn nodes_of(list: &web::NodeList) -> Vec<DomNode> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(DomNode)
        .collect()
}

pub struct MountWatcher {
    document: web::Document,
    seen: Rc<RefCell<SeenRegistry>>,
    next_id: Rc<Cell<u64>>,
}

impl MountWatcher {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            seen: Rc::new(RefCell::new(SeenRegistry::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Process every mount in the current document, then observe the body
    /// subtree for insertions. Elements reported by both the scan and a
    /// later mutation batch are processed once.
    pub fn activate(self) -> anyhow::Result<()> {
        let list = self
            .document
            .query_selector_all(MOUNT_MARKER_SELECTOR)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        for node in nodes_of(&list) {
            Self::process(&self.seen, &self.next_id, node);
        }

        let seen = self.seen.clone();
        let next_id = self.next_id.clone();
        let callback = Closure::wrap(Box::new(
            move |records: js_sys::Array, _observer: JsValue| {
                for record in records.iter() {
                    let record: web::MutationRecord = record.unchecked_into();
                    for mount in mounts_in_batch(nodes_of(&record.added_nodes())) {
                        Self::process(&seen, &next_id, mount);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, JsValue)>);

        let observer = web::MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        callback.forget();

        let init = web::MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        let body = self
            .document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        observer
            .observe_with_options(&body, &init)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        log::info!("[watch] observing document for viewer mounts");
        Ok(())
    }

    fn process(seen: &Rc<RefCell<SeenRegistry>>, next_id: &Rc<Cell<u64>>, node: DomNode) {
        let Ok(element) = node.0.dyn_into::<web::Element>() else {
            return;
        };
        let key = ensure_mount_id(&element, next_id);
        if seen.borrow_mut().first_visit(&key) {
            controller::process_mount(element, None);
        }
    }
}

/// The registry keys elements by id, synthesizing one when missing: the
/// viewer library needs a container id anyway, so the id doubles as the
/// element's identity.
fn ensure_mount_id(element: &web::Element, next_id: &Cell<u64>) -> String {
    let id = element.id();
    if !id.is_empty() {
        return id;
    }
    let n = next_id.get();
    next_id.set(n + 1);
    let id = format!("pano-viewer-{n}");
    element.set_id(&id);
    id
}
