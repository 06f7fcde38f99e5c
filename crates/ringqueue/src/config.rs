/// Configuration for a `RingQueue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Node slots to pre-allocate (default: 64). Not a bound: the queue grows past it.
    pub initial_capacity: usize,
    /// Enable metrics collection (slight overhead)
    pub enable_metrics: bool,
}

impl Config {
    /// Creates a new configuration with custom settings.
    pub const fn new(initial_capacity: usize, enable_metrics: bool) -> Self {
        Self {
            initial_capacity,
            enable_metrics,
        }
    }

    /// Returns a copy of this configuration with metrics switched on.
    pub const fn with_metrics(self) -> Self {
        Self {
            enable_metrics: true,
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            enable_metrics: false,
        }
    }
}

/// Small partition configuration (16 slots, for low-traffic topics)
pub const SMALL_PARTITION_CONFIG: Config = Config::new(16, false);

/// Large partition configuration (64K slots pre-allocated, metrics on)
pub const LARGE_PARTITION_CONFIG: Config = Config::new(1 << 16, true);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.initial_capacity, 64);
        assert!(!config.enable_metrics);
    }

    #[test]
    fn test_with_metrics_keeps_capacity() {
        let config = SMALL_PARTITION_CONFIG.with_metrics();
        assert_eq!(config.initial_capacity, 16);
        assert!(config.enable_metrics);
    }
}
