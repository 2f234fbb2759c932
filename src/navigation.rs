use crate::constants::*;
use crate::core::{ScrollTracker, SectionId, Sidebar};
use crate::dom::{self, MountError};
use crate::events::{self, EventListener};
use crate::frame::{self, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct NavState {
    tracker: ScrollTracker,
    sidebar: Sidebar,
    items: Vec<(SectionId, web::Element)>,
    sidebar_el: Option<web::Element>,
    backdrop_el: Option<web::Element>,
}

impl NavState {
    fn render_active(&self) {
        let active = self.tracker.active();
        for (id, el) in &self.items {
            let on = *id == active;
            dom::set_class(el, ACTIVE_CLASS, on);
            if on {
                _ = el.set_attribute("aria-current", "true");
            } else {
                _ = el.remove_attribute("aria-current");
            }
        }
    }

    fn render_sidebar(&self) {
        let open = self.sidebar.is_open();
        for el in self.sidebar_el.iter().chain(self.backdrop_el.iter()) {
            dom::set_class(el, OPEN_CLASS, open);
        }
    }
}

/// Mounted scroll indicator and nav controls.
pub struct Navigation {
    _listeners: Vec<EventListener>,
    _frames: Option<FrameLoop>,
}

impl Navigation {
    pub fn mount(window: &web::Window, document: &web::Document) -> Result<Self, MountError> {
        let items = nav_items(document)?;
        let state = Rc::new(RefCell::new(NavState {
            tracker: ScrollTracker::default(),
            sidebar: Sidebar::default(),
            items,
            sidebar_el: document.get_element_by_id(NAV_SIDEBAR_ID),
            backdrop_el: document.get_element_by_id(NAV_BACKDROP_ID),
        }));

        // Pick up the position the page was restored at.
        {
            let mut s = state.borrow_mut();
            s.tracker.on_scroll(&dom::scroll_metrics(window, document));
            s.render_active();
            s.render_sidebar();
        }

        let mut listeners = vec![wire_scroll(window, document, &state)?];
        listeners.extend(wire_item_clicks(document, &state)?);

        let state_toggle = state.clone();
        listeners.extend(events::on_click_by_id(document, NAV_TOGGLE_ID, move || {
            let mut s = state_toggle.borrow_mut();
            s.sidebar.toggle();
            s.render_sidebar();
        })?);

        let state_backdrop = state.clone();
        listeners.extend(events::on_click_by_id(document, NAV_BACKDROP_ID, move || {
            let mut s = state_backdrop.borrow_mut();
            s.sidebar.close();
            s.render_sidebar();
        })?);

        let frames = progress_loop(document, &state);
        log::info!(
            "[mount] navigation items={} indicator={}",
            state.borrow().items.len(),
            frames.is_some()
        );

        Ok(Self {
            _listeners: listeners,
            _frames: frames,
        })
    }
}

fn nav_items(document: &web::Document) -> Result<Vec<(SectionId, web::Element)>, MountError> {
    let nodes = document.query_selector_all(NAV_ITEM_SELECTOR)?;
    let mut items = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let raw = el.get_attribute(NAV_SECTION_ATTR).unwrap_or_default();
        match raw.parse::<SectionId>() {
            Ok(id) => items.push((id, el)),
            Err(()) => log::warn!("[nav] unknown section `{}`", raw),
        }
    }
    Ok(items)
}

fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    state: &Rc<RefCell<NavState>>,
) -> Result<EventListener, MountError> {
    let state = state.clone();
    let window_inner = window.clone();
    let document = document.clone();
    EventListener::passive(window, "scroll", move |_| {
        let metrics = dom::scroll_metrics(&window_inner, &document);
        let mut s = state.borrow_mut();
        if let Some(section) = s.tracker.on_scroll(&metrics) {
            log::debug!("[nav] active={}", section);
            s.render_active();
        }
    })
}

fn wire_item_clicks(
    document: &web::Document,
    state: &Rc<RefCell<NavState>>,
) -> Result<Vec<EventListener>, MountError> {
    let items: Vec<_> = state.borrow().items.clone();
    let mut listeners = Vec::with_capacity(items.len());
    for (id, el) in items {
        let state = state.clone();
        let document = document.clone();
        listeners.push(EventListener::new(&el, "click", move |_| {
            {
                let mut s = state.borrow_mut();
                s.tracker.select(id);
                s.sidebar.close();
                s.render_active();
                s.render_sidebar();
            }
            scroll_to_section(&document, id);
        })?);
    }
    Ok(listeners)
}

fn scroll_to_section(document: &web::Document, id: SectionId) {
    match document.get_element_by_id(id.as_str()) {
        Some(el) => {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        None => log::warn!("[nav] section #{} not found", id),
    }
}

/// Eases the indicator fill toward the scroll target every frame. Runs only
/// when the page has an indicator element.
fn progress_loop(document: &web::Document, state: &Rc<RefCell<NavState>>) -> Option<FrameLoop> {
    let fill = document
        .get_element_by_id(PROGRESS_FILL_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    let state = state.clone();
    Some(frame::start_loop(move || {
        let progress = state.borrow_mut().tracker.step();
        _ = fill
            .style()
            .set_property("height", &format!("{:.3}%", progress));
    }))
}
