//! Pointer-lock capture shim.
//!
//! Tracks whether the pointer is locked to a target surface and keeps the
//! relative mouse movement reported while locked, until the embedding
//! application polls it. The environment (a browser page, or a fake in
//! tests) plugs in through [`PointerHost`] and drives the shim by calling
//! its handlers.

mod capture;
mod config;
mod error;
mod host;

pub use capture::PointerCapture;
pub use config::{CaptureConfig, MissingTargetPolicy, MovementMode};
pub use error::CaptureError;
pub use host::PointerHost;
