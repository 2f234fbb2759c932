use crate::constants::FIELD_OVERRIDE_PREFIX;
use crate::core::{FieldParams, ScrollMetrics, SectionId};
use glam::Vec2;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("#{0} is not a canvas")]
    NotACanvas(String),
    #[error("canvas 2d context unavailable")]
    NoContext2d,
    #[error("js error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for MountError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        MountError::Js(format!("{:?}", v))
    }
}

#[inline]
pub fn window() -> Result<web::Window, MountError> {
    web::window().ok_or(MountError::NoWindow)
}

#[inline]
pub fn document() -> Result<web::Document, MountError> {
    window()?.document().ok_or(MountError::NoDocument)
}

pub fn element_by_id(document: &web::Document, id: &str) -> Result<web::Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlCanvasElement, MountError> {
    element_by_id(document, id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(id.to_string()))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, MountError> {
    canvas
        .get_context("2d")?
        .ok_or(MountError::NoContext2d)?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| MountError::NoContext2d)
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Match the canvas backing store to the viewport; returns the new size.
pub fn sync_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let size = viewport_size(window);
    canvas.set_width(size.x.max(0.0) as u32);
    canvas.set_height(size.y.max(0.0) as u32);
    size
}

/// Defaults adjusted by any `data-*` overrides present on the canvas.
pub fn field_params_from_canvas(canvas: &web::HtmlCanvasElement) -> FieldParams {
    let mut params = FieldParams::default();
    for key in FieldParams::KEYS {
        let attr = format!("{}{}", FIELD_OVERRIDE_PREFIX, key);
        if let Some(raw) = canvas.get_attribute(&attr) {
            if let Err(e) = params.apply_override(key, &raw) {
                log::warn!("[config] ignoring {}: {}", attr, e);
            }
        }
    }
    params
}

pub fn scroll_metrics(window: &web::Window, document: &web::Document) -> ScrollMetrics {
    let document_height = document
        .document_element()
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0);
    let sections = SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            let el = document.get_element_by_id(id.as_str())?;
            let el = el.dyn_ref::<web::HtmlElement>()?;
            Some((id, el.offset_top() as f32))
        })
        .collect();
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0) as f32,
        viewport_height: viewport_size(window).y,
        document_height,
        sections,
    }
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    let res = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = res {
        log::warn!("[dom] class {} update failed: {:?}", class, e);
    }
}
