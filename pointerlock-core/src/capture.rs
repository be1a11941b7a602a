use crate::config::{CaptureConfig, MissingTargetPolicy, MovementMode};
use crate::error::CaptureError;
use crate::host::PointerHost;

/// Pointer capture state for one target surface.
///
/// The lock flag only changes in [`Self::on_lock_change`]; requesting or
/// releasing the lock is advisory until the host confirms it.
pub struct PointerCapture<H: PointerHost> {
    host: H,
    config: CaptureConfig,
    target: Option<H::Surface>,
    locked: bool,
    movement_watched: bool,
    movement_x: f64,
    movement_y: f64,
}

impl<H: PointerHost> PointerCapture<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, CaptureConfig::default())
    }

    pub fn with_config(host: H, config: CaptureConfig) -> Self {
        Self {
            host,
            config,
            target: None,
            locked: false,
            movement_watched: false,
            movement_x: 0.0,
            movement_y: 0.0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Bind to the surface named `id` and start listening for lock changes.
    pub fn initialize(&mut self, id: &str) -> Result<(), CaptureError> {
        if self.target.is_some() {
            return Err(CaptureError::AlreadyInitialized);
        }

        let Some(surface) = self.host.find_surface(id) else {
            return match self.config.missing_target {
                MissingTargetPolicy::FailFast => Err(CaptureError::SurfaceNotFound(id.to_string())),
                MissingTargetPolicy::Ignore => {
                    log::warn!("Pointer capture target `{id}` not found, capture disabled");
                    Ok(())
                }
            };
        };

        self.target = Some(surface);
        self.locked = false;
        self.movement_x = 0.0;
        self.movement_y = 0.0;
        self.host.watch_lock_changes();
        log::debug!("Pointer capture bound to `{id}`");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&H::Surface> {
        self.target.as_ref()
    }

    /// Lock-state change handler. `locked_element` is the element the host
    /// currently reports as holding the pointer, if any.
    pub fn on_lock_change(&mut self, locked_element: Option<&H::Surface>) {
        let locked = match (self.target.as_ref(), locked_element) {
            (Some(target), Some(element)) => target == element,
            _ => false,
        };

        if locked {
            if !self.movement_watched {
                self.host.watch_movement();
                self.movement_watched = true;
            }
        } else if self.movement_watched {
            self.host.unwatch_movement();
            self.movement_watched = false;
        }

        if locked != self.locked {
            log::debug!("Pointer lock {}", if locked { "acquired" } else { "released" });
        }
        self.locked = locked;
    }

    /// Movement handler, fed the per-event relative deltas.
    pub fn on_movement(&mut self, dx: f64, dy: f64) {
        if !self.movement_watched {
            return;
        }
        match self.config.movement_mode {
            MovementMode::Overwrite => {
                self.movement_x = dx;
                self.movement_y = dy;
            }
            MovementMode::Accumulate => {
                self.movement_x += dx;
                self.movement_y += dy;
            }
        }
    }

    /// Ask the host to capture the pointer. The returned request carries
    /// the host's eventual verdict; the lock flag follows the next change
    /// notification either way.
    pub fn request_lock(&mut self) -> Result<H::Request, CaptureError> {
        let target = self.target.as_ref().ok_or(CaptureError::NotInitialized)?;
        Ok(self.host.request_pointer_lock(target))
    }

    /// Fire-and-forget [`Self::request_lock`]. Failures are swallowed.
    pub fn request_lock_detached(&mut self) {
        match self.request_lock() {
            Ok(request) => self.host.detach_request(request),
            Err(e) => log::debug!("Pointer lock request skipped: {e}"),
        }
    }

    /// Ask the host to release the pointer.
    pub fn release_lock(&mut self) {
        self.host.exit_pointer_lock();
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Return the horizontal delta and reset it to zero.
    pub fn consume_movement_x(&mut self) -> f64 {
        std::mem::take(&mut self.movement_x)
    }

    /// Return the vertical delta and reset it to zero.
    pub fn consume_movement_y(&mut self) -> f64 {
        std::mem::take(&mut self.movement_y)
    }

    pub fn consume_movement(&mut self) -> (f64, f64) {
        (self.consume_movement_x(), self.consume_movement_y())
    }

    /// Drop every subscription and return to the uninitialized state.
    pub fn dispose(&mut self) {
        if self.movement_watched {
            self.host.unwatch_movement();
            self.movement_watched = false;
        }
        if self.target.take().is_some() {
            self.host.unwatch_lock_changes();
        }
        self.locked = false;
        self.movement_x = 0.0;
        self.movement_y = 0.0;
    }
}
