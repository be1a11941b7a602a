use std::cell::RefCell;
use std::rc::Weak;

use js_sys::{Function, Promise, Reflect};
use pointerlock_core::{PointerCapture, PointerHost};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, MouseEvent};

use crate::events::{
    first_locked_element, movement_delta, LOCK_CHANGE_EVENTS, MOVEMENT_PROPERTIES, MOVE_EVENT,
};

pub type SharedCapture = RefCell<PointerCapture<WebHost>>;

/// Browser side of the shim: document listeners feeding a shared capture.
pub struct WebHost {
    document: Document,
    on_lock_change: Closure<dyn FnMut(Event)>,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
}

impl WebHost {
    /// Build the listeners. They only hold a weak reference to `capture`,
    /// so dropping the capture frees them.
    pub fn new(document: Document, capture: Weak<SharedCapture>) -> Self {
        let lock_capture = capture.clone();
        let lock_document = document.clone();
        let on_lock_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let Some(shared) = lock_capture.upgrade() else {
                return;
            };
            let Ok(mut capture) = shared.try_borrow_mut() else {
                log::warn!("Pointer lock change dropped: capture busy");
                return;
            };
            let element = locked_element(&lock_document);
            capture.on_lock_change(element.as_ref());
        });

        let on_mouse_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(shared) = capture.upgrade() else {
                return;
            };
            let Ok(mut capture) = shared.try_borrow_mut() else {
                log::warn!("Pointer movement dropped: capture busy");
                return;
            };
            let [dx, dy] = MOVEMENT_PROPERTIES.map(|property| movement(&event, property));
            capture.on_movement(dx, dy);
        });

        Self {
            document,
            on_lock_change,
            on_mouse_move,
        }
    }

    fn listen(&self, event: &str, callback: &Function) {
        if let Err(e) = self.document.add_event_listener_with_callback(event, callback) {
            log::warn!("Failed to listen for {event}: {e:?}");
        }
    }

    fn unlisten(&self, event: &str, callback: &Function) {
        if let Err(e) = self.document.remove_event_listener_with_callback(event, callback) {
            log::warn!("Failed to stop listening for {event}: {e:?}");
        }
    }
}

impl PointerHost for WebHost {
    type Surface = Element;
    type Request = Promise;

    fn find_surface(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn watch_lock_changes(&mut self) {
        for event in LOCK_CHANGE_EVENTS {
            self.listen(event, self.on_lock_change.as_ref().unchecked_ref());
        }
    }

    fn unwatch_lock_changes(&mut self) {
        for event in LOCK_CHANGE_EVENTS {
            self.unlisten(event, self.on_lock_change.as_ref().unchecked_ref());
        }
    }

    fn watch_movement(&mut self) {
        self.listen(MOVE_EVENT, self.on_mouse_move.as_ref().unchecked_ref());
    }

    fn unwatch_movement(&mut self) {
        self.unlisten(MOVE_EVENT, self.on_mouse_move.as_ref().unchecked_ref());
    }

    fn request_pointer_lock(&mut self, surface: &Element) -> Promise {
        match call_request_pointer_lock(surface) {
            // Older browsers return nothing instead of a promise.
            Ok(result) => result
                .dyn_into::<Promise>()
                .unwrap_or_else(|_| Promise::resolve(&JsValue::UNDEFINED)),
            Err(e) => Promise::reject(&e),
        }
    }

    fn exit_pointer_lock(&mut self) {
        self.document.exit_pointer_lock();
    }

    fn detach_request(&mut self, request: Promise) {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(request).await {
                log::debug!("Pointer lock request rejected: {e:?}");
            }
        });
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        // Removing a listener that was never added is a no-op.
        self.unwatch_movement();
        self.unwatch_lock_changes();
    }
}

/// The element currently holding the pointer, checking the vendor-prefixed
/// property when the standard one is unset.
fn locked_element(document: &Document) -> Option<Element> {
    first_locked_element(|property| {
        Reflect::get(document, &JsValue::from_str(property))
            .ok()
            .and_then(|value| value.dyn_into::<Element>().ok())
    })
}

/// `MouseEvent::movement_x` truncates to `i32`; read the raw double instead.
fn movement(event: &MouseEvent, property: &str) -> f64 {
    movement_delta(
        Reflect::get(event, &JsValue::from_str(property))
            .ok()
            .and_then(|value| value.as_f64()),
    )
}

fn call_request_pointer_lock(surface: &Element) -> Result<JsValue, JsValue> {
    let request = Reflect::get(surface, &JsValue::from_str("requestPointerLock"))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str("requestPointerLock is not supported"))?;
    request.call0(surface)
}
