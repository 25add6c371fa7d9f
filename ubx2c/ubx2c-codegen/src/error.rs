use ubx2c_core::IcdError;

/// Errors produced while building records or emitting artifacts.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Failed to create or write an output file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The message failed its build-time sanity checks.
    #[error(transparent)]
    Icd(#[from] IcdError),
}
