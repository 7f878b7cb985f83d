use thiserror::Error;

/// Load-time and configuration errors. Per-frame code never produces these;
/// missing resources there degrade to silent no-ops.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("camera preset list is empty")]
    EmptyCameraPresets,
    #[error("monitor needs at least one slide texture")]
    NoMonitorSlides,
    #[error("unknown theme {0:?} (expected \"day\" or \"night\")")]
    UnknownTheme(String),
}
