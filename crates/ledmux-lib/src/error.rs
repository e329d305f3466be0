//! Unified error type for the ledmux-lib crate.
//!
//! [`LedmuxError`] wraps the module-specific [`AttrError`] and domain-specific
//! error kinds (`Config`, `Color`, `UnsupportedLight`). `From` impls allow `?`
//! to propagate across module boundaries seamlessly.

use std::fmt;

use crate::device::AttrError;

/// Unified error type for ledmux-lib operations.
#[derive(Debug)]
pub enum LedmuxError {
    /// Device attribute I/O error (read, write, writability probe).
    Attr(AttrError),
    /// Standard I/O error (config persistence).
    Io(std::io::Error),
    /// Light id outside the supported enumeration. No hardware is touched.
    UnsupportedLight(i32),
    /// Configuration validation error.
    Config(String),
    /// Color parsing error.
    Color(String),
}

impl fmt::Display for LedmuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedmuxError::Attr(e) => write!(f, "{e}"),
            LedmuxError::Io(e) => write!(f, "I/O error: {e}"),
            LedmuxError::UnsupportedLight(id) => write!(f, "Unsupported light id: {id}"),
            LedmuxError::Config(e) => write!(f, "Config error: {e}"),
            LedmuxError::Color(e) => write!(f, "Color error: {e}"),
        }
    }
}

impl std::error::Error for LedmuxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedmuxError::Attr(e) => Some(e),
            LedmuxError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AttrError> for LedmuxError {
    fn from(e: AttrError) -> Self {
        LedmuxError::Attr(e)
    }
}

impl From<std::io::Error> for LedmuxError {
    fn from(e: std::io::Error) -> Self {
        LedmuxError::Io(e)
    }
}

/// Crate-level Result alias using [`LedmuxError`].
pub type Result<T> = std::result::Result<T, LedmuxError>;
