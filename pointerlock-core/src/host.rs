/// The environment a [`crate::PointerCapture`] runs in.
///
/// The host owns the actual event subscriptions. When a subscribed
/// notification fires, the host calls back into the shim through
/// [`crate::PointerCapture::on_lock_change`] or
/// [`crate::PointerCapture::on_movement`].
pub trait PointerHost {
    /// Element pointer capture can be scoped to.
    type Surface: PartialEq;
    /// Deferred outcome of a capture request.
    type Request;

    /// Look up a surface by its identifier.
    fn find_surface(&self, id: &str) -> Option<Self::Surface>;

    /// Subscribe to lock-state change notifications, including
    /// vendor-prefixed variants.
    fn watch_lock_changes(&mut self);
    fn unwatch_lock_changes(&mut self);

    /// Subscribe to relative movement notifications.
    fn watch_movement(&mut self);
    fn unwatch_movement(&mut self);

    /// Ask the host to capture the pointer on `surface`. Must not panic;
    /// failures are reported through the returned request.
    fn request_pointer_lock(&mut self, surface: &Self::Surface) -> Self::Request;

    /// Ask the host to release any pointer capture.
    fn exit_pointer_lock(&mut self);

    /// Take ownership of a request nobody is going to inspect. Hosts whose
    /// requests report unhandled failures should swallow them here.
    fn detach_request(&mut self, request: Self::Request) {
        drop(request);
    }
}
