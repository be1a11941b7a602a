use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use pointerlock_core::{CaptureConfig, MissingTargetPolicy, MovementMode, PointerCapture};
use wasm_bindgen::prelude::*;

use crate::host::{SharedCapture, WebHost};

/// Pointer capture bound to one element of the page.
#[wasm_bindgen(js_name = PointerCapture)]
pub struct WebPointerCapture {
    shared: Rc<SharedCapture>,
}

#[wasm_bindgen(js_class = PointerCapture)]
impl WebPointerCapture {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebPointerCapture, JsValue> {
        Self::with_config(CaptureConfig::default())
    }

    /// `accumulate` sums movement between polls instead of keeping only the
    /// latest event. `ignore_missing_target` makes `initialize` a no-op
    /// when the element does not exist.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(accumulate: bool, ignore_missing_target: bool) -> Result<WebPointerCapture, JsValue> {
        let mut config = CaptureConfig::default();
        if accumulate {
            config = config.with_movement_mode(MovementMode::Accumulate);
        }
        if ignore_missing_target {
            config = config.with_missing_target(MissingTargetPolicy::Ignore);
        }
        Self::with_config(config)
    }

    /// Bind to the element with id `element_id` and start tracking lock changes.
    pub fn initialize(&self, element_id: &str) -> Result<(), JsValue> {
        self.try_capture()?
            .initialize(element_id)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Ask the browser to lock the pointer. Resolves or rejects with the
    /// browser's verdict; `isLocked` follows the next lock change. Never
    /// throws: an uninitialized or busy capture yields a rejected promise.
    #[wasm_bindgen(js_name = requestLock)]
    pub fn request_lock(&self) -> Promise {
        let request = self
            .try_capture()
            .and_then(|mut capture| capture.request_lock().map_err(|e| JsValue::from_str(&e.to_string())));
        request.unwrap_or_else(|e| Promise::reject(&e))
    }

    /// Like `requestLock`, ignoring every failure.
    #[wasm_bindgen(js_name = requestLockDetached)]
    pub fn request_lock_detached(&self) {
        match self.shared.try_borrow_mut() {
            Ok(mut capture) => capture.request_lock_detached(),
            Err(_) => log::debug!("Pointer lock request skipped: capture busy"),
        }
    }

    #[wasm_bindgen(js_name = releaseLock)]
    pub fn release_lock(&self) -> Result<(), JsValue> {
        self.try_capture()?.release_lock();
        Ok(())
    }

    #[wasm_bindgen(js_name = isLocked)]
    pub fn is_locked(&self) -> bool {
        self.shared.try_borrow().map(|c| c.is_locked()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = consumeMovementX)]
    pub fn consume_movement_x(&self) -> f64 {
        self.shared
            .try_borrow_mut()
            .map(|mut c| c.consume_movement_x())
            .unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = consumeMovementY)]
    pub fn consume_movement_y(&self) -> f64 {
        self.shared
            .try_borrow_mut()
            .map(|mut c| c.consume_movement_y())
            .unwrap_or(0.0)
    }

    /// Remove every listener. The instance can be initialized again.
    pub fn dispose(&self) {
        if let Ok(mut capture) = self.shared.try_borrow_mut() {
            capture.dispose();
        }
    }
}

impl WebPointerCapture {
    pub fn with_config(config: CaptureConfig) -> Result<WebPointerCapture, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let shared = Rc::new_cyclic(|weak| {
            RefCell::new(PointerCapture::with_config(WebHost::new(document, weak.clone()), config))
        });
        Ok(Self { shared })
    }

    fn try_capture(&self) -> Result<std::cell::RefMut<'_, PointerCapture<WebHost>>, JsValue> {
        self.shared
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("Pointer capture is busy"))
    }
}

impl Drop for WebPointerCapture {
    fn drop(&mut self) {
        self.dispose();
    }
}
