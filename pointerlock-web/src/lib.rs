//! Pointer lock for browser game runtimes.
//!
//! Binds the capture state from `pointerlock-core` to the page's pointer
//! lock API. Exposes a `PointerCapture` class, plus plain `pointer_*`
//! functions over a default instance for scripting layers that can only
//! call global functions.

pub mod events;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod capture;

pub use events::DEFAULT_TARGET_ID;

#[cfg(target_arch = "wasm32")]
pub use capture::WebPointerCapture;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static DEFAULT_CAPTURE: RefCell<Option<WebPointerCapture>> = const { RefCell::new(None) };
}

/// Entry point — called when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {e}")))?;
    log::info!("Pointer lock runtime initialized");
    Ok(())
}

/// Bind the default instance to `element_id` (`"canvas"` when omitted).
///
/// Replaces any previously bound default instance. Failures are logged.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn pointer_init(element_id: Option<String>) {
    let element_id = element_id.unwrap_or_else(|| DEFAULT_TARGET_ID.to_string());
    let capture = match WebPointerCapture::new() {
        Ok(capture) => capture,
        Err(e) => {
            log::error!("Pointer capture unavailable: {e:?}");
            return;
        }
    };
    if let Err(e) = capture.initialize(&element_id) {
        log::error!("Pointer capture init failed: {e:?}");
        return;
    }
    DEFAULT_CAPTURE.with(|slot| {
        // The replaced instance removes its listeners when dropped.
        slot.borrow_mut().replace(capture);
    });
}

/// Ask the browser to lock the pointer; the outcome is ignored.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn pointer_lock() {
    with_default(|capture| capture.request_lock_detached());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn pointer_release() {
    with_default(|capture| {
        if let Err(e) = capture.release_lock() {
            log::debug!("Pointer release skipped: {e:?}");
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn pointer_is_locked() -> bool {
    with_default(|capture| capture.is_locked()).unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn pointer_get_movement_x() -> f64 {
    with_default(|capture| capture.consume_movement_x()).unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn pointer_get_movement_y() -> f64 {
    with_default(|capture| capture.consume_movement_y()).unwrap_or(0.0)
}

/// Unbind the default instance.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn pointer_dispose() {
    DEFAULT_CAPTURE.with(|slot| slot.borrow_mut().take());
}

#[cfg(target_arch = "wasm32")]
fn with_default<R>(f: impl FnOnce(&WebPointerCapture) -> R) -> Option<R> {
    DEFAULT_CAPTURE.with(|slot| match slot.try_borrow() {
        Ok(slot) => slot.as_ref().map(f),
        Err(_) => None,
    })
}
