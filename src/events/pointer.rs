use super::EventListener;
use crate::background::Scene;
use crate::dom::MountError;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Track the cursor over the whole window; clear it when it leaves the page.
pub fn wire_pointer(
    window: &web::Window,
    document: &web::Document,
    scene: &Rc<RefCell<Scene>>,
) -> Result<Vec<EventListener>, MountError> {
    let mut listeners = Vec::with_capacity(2);

    let scene_move = scene.clone();
    listeners.push(EventListener::new(window, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            scene_move.borrow_mut().pointer_moved(pointer_client_px(ev));
        }
    })?);

    if let Some(root) = document.document_element() {
        let scene_leave = scene.clone();
        listeners.push(EventListener::new(&root, "mouseleave", move |_| {
            scene_leave.borrow_mut().pointer_left();
        })?);
    }

    Ok(listeners)
}
