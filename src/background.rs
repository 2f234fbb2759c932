use crate::constants::CANVAS_ID;
use crate::core::BackgroundScene;
use crate::dom::{self, MountError};
use crate::events::{pointer, EventListener};
use crate::frame::{self, FrameLoop};
use crate::render::CanvasSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type Scene = BackgroundScene<StdRng>;

/// Mounted particle background. Dropping it removes its listeners and stops
/// the animation loop.
pub struct Background {
    _listeners: Vec<EventListener>,
    _frames: FrameLoop,
}

impl Background {
    pub fn mount(window: &web::Window, document: &web::Document) -> Result<Self, MountError> {
        let canvas = dom::canvas_by_id(document, CANVAS_ID)?;
        let ctx = dom::context_2d(&canvas)?;
        let bounds = dom::sync_canvas_to_viewport(window, &canvas);
        let params = dom::field_params_from_canvas(&canvas);

        let scene = Rc::new(RefCell::new(Scene::new(
            bounds,
            params,
            StdRng::from_entropy(),
        )));
        log::info!(
            "[mount] background {:.0}x{:.0} particles={}",
            bounds.x,
            bounds.y,
            scene.borrow().field.len()
        );

        let mut listeners = pointer::wire_pointer(window, document, &scene)?;
        listeners.push(wire_resize(window, canvas, &scene)?);

        let mut surface = CanvasSurface::new(ctx);
        let scene_tick = scene.clone();
        let frames = frame::start_loop(move || scene_tick.borrow_mut().tick(&mut surface));

        Ok(Self {
            _listeners: listeners,
            _frames: frames,
        })
    }
}

/// Canvas first, then the field, so the new particle set sees the new size.
fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Result<EventListener, MountError> {
    let scene = scene.clone();
    let window_inner = window.clone();
    EventListener::new(window, "resize", move |_| {
        let bounds = dom::sync_canvas_to_viewport(&window_inner, &canvas);
        scene.borrow_mut().resize(bounds);
    })
}
