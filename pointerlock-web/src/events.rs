/// Element id bound by the global scripting API when none is given.
pub const DEFAULT_TARGET_ID: &str = "canvas";

/// Lock-state change events, standard name first.
pub const LOCK_CHANGE_EVENTS: [&str; 2] = ["pointerlockchange", "mozpointerlockchange"];

/// Relative movement event, only listened to while locked.
pub const MOVE_EVENT: &str = "mousemove";

/// Document properties naming the element that holds the pointer.
pub const LOCK_ELEMENT_PROPERTIES: [&str; 2] = ["pointerLockElement", "mozPointerLockElement"];

/// Movement event properties. Read as doubles: browsers report fractional
/// deltas on high-DPI screens.
pub const MOVEMENT_PROPERTIES: [&str; 2] = ["movementX", "movementY"];

/// Resolve the element holding the pointer, trying the standard property
/// before the vendor-prefixed one. `lookup` returns `None` for an unset
/// or missing property.
pub fn first_locked_element<T>(mut lookup: impl FnMut(&str) -> Option<T>) -> Option<T> {
    LOCK_ELEMENT_PROPERTIES.iter().find_map(|property| lookup(property))
}

/// A movement delta as reported by the event, zero when absent or not a
/// finite number.
pub fn movement_delta(raw: Option<f64>) -> f64 {
    raw.filter(|value| value.is_finite()).unwrap_or(0.0)
}
