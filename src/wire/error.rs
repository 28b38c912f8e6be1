use thiserror::Error;

/// Errors that can occur while decoding federation wire structures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// Buffer length does not match the structure's fixed layout
    #[error("Wire buffer length mismatch for {what}: expected {expected} bytes, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}
