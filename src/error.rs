//! Error types for texdom.
//!
//! One crate-wide error enum; validation and build failures propagate to the
//! caller, cleanup problems never surface here (see [`crate::build::clean_aux`]).

use std::io;

use thiserror::Error;

/// Errors that can occur while composing or building a document.
#[derive(Debug, Error)]
pub enum TexError {
    /// A determinant was requested for a non-square input
    #[error("matrix is not square: {rows} rows but a row of {cols} columns")]
    NotSquare {
        /// Number of rows in the input
        rows: usize,
        /// Length of the offending row
        cols: usize,
    },

    /// `latexmk` is not installed or not found in the system `PATH`
    #[error("latexmk not found in PATH. Install a TeX distribution such as TeX Live or MiKTeX")]
    LatexmkNotFound,

    /// `latexmk` exited non-zero; carries the combined captured output
    #[error("latexmk build failed:\n{output}")]
    BuildFailed {
        /// Combined stdout/stderr captured from the build run
        output: String,
    },

    /// The print-spooling command failed
    #[error("print command failed: {0}")]
    PrintFailed(String),

    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for texdom operations.
pub type TexResult<T> = Result<T, TexError>;

impl TexError {
    /// Create a build failure from captured subprocess output.
    pub fn build_failed(output: impl Into<String>) -> Self {
        Self::BuildFailed { output: output.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TexError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(
            err.to_string(),
            "matrix is not square: 2 rows but a row of 3 columns"
        );

        let err = TexError::build_failed("Latexmk: nothing to do");
        assert_eq!(
            err.to_string(),
            "latexmk build failed:\nLatexmk: nothing to do"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TexError>();
    }
}
