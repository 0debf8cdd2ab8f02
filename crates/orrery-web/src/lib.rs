pub mod js;
pub mod runner;

use std::cell::RefCell;

use orrery_engine::{EventRecord, InputEvent, OrreryConfig};
use wasm_bindgen::prelude::*;

pub use js::{JsInfoPanel, JsScene};
pub use runner::OrreryRunner;

type WebRunner = OrreryRunner<JsScene, JsInfoPanel>;

thread_local! {
    static RUNNER: RefCell<Option<WebRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the runner. Returns `None` before `orrery_init`, or when
/// called re-entrantly from inside a tick (a host callback calling back in).
fn with_runner<T>(f: impl FnOnce(&mut WebRunner) -> T) -> Option<T> {
    RUNNER.with(|cell| {
        let Ok(mut borrow) = cell.try_borrow_mut() else {
            log::warn!("orrery call ignored: a tick is already running");
            return None;
        };
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("orrery not initialized; call orrery_init() first");
                None
            }
        }
    })
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Create the orrery with default settings (sun only, no bodies yet).
#[wasm_bindgen]
pub fn orrery_init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"orrery: logger already initialized".into());
    }

    let runner = OrreryRunner::new(OrreryConfig::default(), JsScene, JsInfoPanel).map_err(to_js_error)?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
    Ok(())
}

/// Load the body catalog fetched by the host. Returns the body count.
#[wasm_bindgen]
pub fn orrery_load_catalog(json: &str) -> Result<u32, JsValue> {
    match with_runner(|r| r.load_catalog(json)) {
        Some(result) => result.map(|n| n as u32).map_err(to_js_error),
        None => Err(JsValue::from_str("orrery not initialized")),
    }
}

/// Load the built-in nine-body solar system.
#[wasm_bindgen]
pub fn orrery_load_builtin() -> Result<u32, JsValue> {
    match with_runner(|r| r.load_builtin()) {
        Some(result) => result.map(|n| n as u32).map_err(to_js_error),
        None => Err(JsValue::from_str("orrery not initialized")),
    }
}

/// One animation frame. `dt_ms` is the wall-clock delta since the last frame.
#[wasm_bindgen]
pub fn orrery_tick(dt_ms: f64) -> u32 {
    with_runner(|r| r.tick(dt_ms)).unwrap_or(0)
}

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn orrery_wheel(delta: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
}

#[wasm_bindgen]
pub fn orrery_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

/// UI buttons: 1 = pause, 2 = orbit guides, 3 = close info, 99 = resize.
#[wasm_bindgen]
pub fn orrery_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_custom(kind, a, b, c));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len()).unwrap_or(0)
}

/// Floats per event record.
#[wasm_bindgen]
pub fn get_event_stride() -> u32 {
    EventRecord::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_camera() -> Vec<f32> {
    with_runner(|r| r.camera_floats()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn is_paused() -> bool {
    with_runner(|r| r.orrery().is_paused()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn orbits_visible() -> bool {
    with_runner(|r| r.orrery().orbits_visible()).unwrap_or(true)
}
