#![cfg(target_arch = "wasm32")]
use background::Background;
use navigation::Navigation;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod background;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod navigation;
mod render;

/// Everything mounted on the page. Dropping it tears the page behaviour down.
/// Each part mounts independently; a failed part is left out.
struct App {
    _background: Option<Background>,
    _navigation: Option<Navigation>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Mount (or remount from scratch) the background and navigation.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    init().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|cell| cell.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("[mount] torn down");
    }
}

fn init() -> anyhow::Result<()> {
    unmount();

    let window = dom::window()?;
    let document = dom::document()?;

    let background = Background::mount(&window, &document)
        .map_err(|e| log::error!("[mount] background failed: {}", e))
        .ok();
    let navigation = Navigation::mount(&window, &document)
        .map_err(|e| log::error!("[mount] navigation failed: {}", e))
        .ok();
    if background.is_none() && navigation.is_none() {
        anyhow::bail!("nothing mounted");
    }

    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            _background: background,
            _navigation: navigation,
        })
    });
    Ok(())
}
