//! Error type for the compiler facade.

use ubx2c_core::IcdError;

/// Errors produced by [`IcdCompiler`](crate::IcdCompiler).
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// I/O error while reading input tables or writing artifacts.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Fatal table-parsing or message-build error.
    #[error(transparent)]
    Icd(#[from] IcdError),

    /// Artifact emission failed.
    #[error(transparent)]
    Codegen(#[from] ubx2c_codegen::CodegenError),

    /// The input path exists but is not a directory.
    #[error("input path '{path}' is not a directory")]
    NotADirectory { path: String },

    /// Names passed on the build filter that never matched a built message.
    #[error("requested messages were never built: {}", names.join(", "))]
    BuildNamesNotFound { names: Vec<String> },
}
