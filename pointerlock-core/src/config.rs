/// How movement notifications update the stored deltas between two polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementMode {
    /// Each notification replaces the stored deltas; only the latest event
    /// between two polls is reported.
    #[default]
    Overwrite,
    /// Notifications are summed until the next poll.
    Accumulate,
}

/// What `initialize` does when the target id does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTargetPolicy {
    /// Return [`crate::CaptureError::SurfaceNotFound`].
    #[default]
    FailFast,
    /// Log a warning and stay uninitialized.
    Ignore,
}

/// Configuration for a pointer capture instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureConfig {
    pub movement_mode: MovementMode,
    pub missing_target: MissingTargetPolicy,
}

impl CaptureConfig {
    pub fn with_movement_mode(mut self, mode: MovementMode) -> Self {
        self.movement_mode = mode;
        self
    }

    pub fn with_missing_target(mut self, policy: MissingTargetPolicy) -> Self {
        self.missing_target = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CaptureConfig::default();
        assert_eq!(config.movement_mode, MovementMode::Overwrite);
        assert_eq!(config.missing_target, MissingTargetPolicy::FailFast);
    }

    #[test]
    fn test_builder_setters() {
        let config = CaptureConfig::default()
            .with_movement_mode(MovementMode::Accumulate)
            .with_missing_target(MissingTargetPolicy::Ignore);
        assert_eq!(config.movement_mode, MovementMode::Accumulate);
        assert_eq!(config.missing_target, MissingTargetPolicy::Ignore);
    }
}
