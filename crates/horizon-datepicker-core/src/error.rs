//! Error types for Horizon Datepicker core systems.

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the core notification machinery.
///
/// Widgets never surface these for user gestures; they only appear when a
/// host misuses the signal API (for example disconnecting twice).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("invalid or disconnected connection ID")]
    InvalidConnection,
}
