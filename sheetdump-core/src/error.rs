//! Single error kind for the dump pipeline

use thiserror::Error;

/// Error raised by any stage of the open/enumerate/load/render pipeline.
///
/// All failure causes (missing file, corrupt workbook, per-sheet load
/// failures, output stream failures) collapse into one description string.
/// Callers report the description and stop rather than branching on the
/// cause.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SpreadsheetReadError {
    message: String,
}

impl SpreadsheetReadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for SpreadsheetReadError {
    fn from(err: anyhow::Error) -> Self {
        // Alternate formatting flattens the context chain into a single line
        Self {
            message: format!("{err:#}"),
        }
    }
}

impl From<std::io::Error> for SpreadsheetReadError {
    fn from(err: std::io::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn flattens_anyhow_context_chain_to_one_line() {
        let cause: anyhow::Result<()> = Err(anyhow::anyhow!("underlying cause"));
        let err = SpreadsheetReadError::from(cause.context("Failed to open workbook").unwrap_err());

        let message = err.to_string();
        assert!(message.contains("Failed to open workbook"));
        assert!(message.contains("underlying cause"));
        assert!(!message.contains('\n'));
    }

    #[test]
    fn displays_plain_message() {
        let err = SpreadsheetReadError::new("no such sheet");
        assert_eq!(err.to_string(), "no such sheet");
    }
}
