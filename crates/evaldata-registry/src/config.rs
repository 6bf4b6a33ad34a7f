//! Container configuration.

/// Configuration for [`GlobalEvaluationDataContainer`](crate::GlobalEvaluationDataContainer).
///
/// Overwriting a binding is always legal; this only controls how loudly
/// it is reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Number of bindings to pre-allocate. Default: 0.
    pub capacity: usize,
    /// Log overwrites at `warn` instead of `debug`. Default: false.
    pub warn_on_overwrite: bool,
}

impl ContainerConfig {
    /// Set the pre-allocated binding count.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Escalate overwrite logging to `warn`.
    pub fn warn_on_overwrite(mut self, warn: bool) -> Self {
        self.warn_on_overwrite = warn;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ContainerConfig::default();
        assert_eq!(cfg.capacity, 0);
        assert!(!cfg.warn_on_overwrite);
    }

    #[test]
    fn builder_methods_chain() {
        let cfg = ContainerConfig::default()
            .with_capacity(8)
            .warn_on_overwrite(true);
        assert_eq!(cfg.capacity, 8);
        assert!(cfg.warn_on_overwrite);
    }
}
