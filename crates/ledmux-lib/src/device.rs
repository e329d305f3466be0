//! Device attribute I/O — capability trait, sysfs backend, mock backend.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

// ── Error type ──

/// Attribute I/O errors.
///
/// String payloads follow the convention **"context: details"** where *context*
/// identifies the attribute path and *details* describes what went wrong. Bare
/// descriptions (no colon) are acceptable when no inner error is being wrapped.
#[derive(Debug)]
pub enum AttrError {
    ReadFailed(String),
    WriteFailed(String),
    ParseFailed(String),
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrError::ReadFailed(e) => write!(f, "Attribute read failed: {e}"),
            AttrError::WriteFailed(e) => write!(f, "Attribute write failed: {e}"),
            AttrError::ParseFailed(e) => write!(f, "Attribute parse failed: {e}"),
        }
    }
}

impl std::error::Error for AttrError {}

pub type Result<T> = std::result::Result<T, AttrError>;

// ── Capability trait ──

/// Read/write access to named device attributes.
///
/// The indicator logic never opens files itself; every probe and write goes
/// through this trait so arbitration and ramp synthesis can run against
/// [`mock::MockAttrs`] in tests and [`SysfsAttrs`] on real hardware.
pub trait DeviceAttrs {
    /// Read a decimal integer attribute.
    fn read_int(&self, path: &Path) -> Result<u32>;

    /// Write a decimal integer attribute.
    fn write_int(&self, path: &Path, value: u32) -> Result<()> {
        self.write_text(path, &value.to_string())
    }

    /// Write a raw text attribute (comma-separated lists and the like).
    fn write_text(&self, path: &Path, text: &str) -> Result<()>;

    /// True iff the attribute can be opened for writing.
    fn is_writable(&self, path: &Path) -> bool;
}

// ── Sysfs backend ──

/// Attribute I/O against real `/sys` files.
///
/// All calls are synchronous blocking file I/O; a wedged device file stalls
/// the caller for the duration of the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysfsAttrs;

impl DeviceAttrs for SysfsAttrs {
    fn read_int(&self, path: &Path) -> Result<u32> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AttrError::ReadFailed(format!("{}: {e}", path.display())))?;
        text.trim()
            .parse()
            .map_err(|e| AttrError::ParseFailed(format!("{}: {e}", path.display())))
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| AttrError::WriteFailed(format!("{}: {e}", path.display())))?;
        file.write_all(text.as_bytes())
            .map_err(|e| AttrError::WriteFailed(format!("{}: {e}", path.display())))
    }

    fn is_writable(&self, path: &Path) -> bool {
        OpenOptions::new().write(true).open(path).is_ok()
    }
}

// ── Mock backend for testing ──

/// In-memory attribute store for unit and integration tests.
///
/// Always compiled (zero runtime cost), hidden from public docs.
#[doc(hidden)]
pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;

    /// In-memory attribute backend. Readable contents are seeded with
    /// [`set_readable`](MockAttrs::set_readable), writable paths form an
    /// explicit set, and every attempted write is recorded in order so tests
    /// can assert exact programming sequences.
    pub struct MockAttrs {
        /// Seeded readable attribute contents: path → text.
        pub values: RefCell<HashMap<PathBuf, String>>,
        /// Paths that accept writes. Writing anywhere else fails.
        pub writable: RefCell<HashSet<PathBuf>>,
        /// Ordered log of every attempted write: (path, text). Injected
        /// failures are recorded before the error is returned.
        pub writes: RefCell<Vec<(PathBuf, String)>>,
        /// Paths whose writes fail even though they are writable.
        pub fail_writes: RefCell<HashSet<PathBuf>>,
    }

    impl Default for MockAttrs {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockAttrs {
        pub fn new() -> Self {
            MockAttrs {
                values: RefCell::new(HashMap::new()),
                writable: RefCell::new(HashSet::new()),
                writes: RefCell::new(Vec::new()),
                fail_writes: RefCell::new(HashSet::new()),
            }
        }

        /// Seed a readable attribute value.
        pub fn set_readable(&self, path: impl Into<PathBuf>, value: &str) {
            self.values.borrow_mut().insert(path.into(), value.into());
        }

        /// Mark a path as accepting writes.
        pub fn set_writable(&self, path: impl Into<PathBuf>) {
            self.writable.borrow_mut().insert(path.into());
        }

        /// Inject a write failure for a path (the path stays probe-writable).
        pub fn fail_write(&self, path: impl Into<PathBuf>) {
            self.fail_writes.borrow_mut().insert(path.into());
        }

        /// All recorded writes to one path, in order.
        pub fn writes_to(&self, path: &Path) -> Vec<String> {
            self.writes
                .borrow()
                .iter()
                .filter(|(p, _)| p == path)
                .map(|(_, v)| v.clone())
                .collect()
        }

        /// Last value written to a path, if any.
        pub fn last_write(&self, path: &Path) -> Option<String> {
            self.writes_to(path).pop()
        }

        /// Total number of attempted writes across all paths.
        pub fn write_count(&self) -> usize {
            self.writes.borrow().len()
        }
    }

    impl DeviceAttrs for MockAttrs {
        fn read_int(&self, path: &Path) -> Result<u32> {
            let values = self.values.borrow();
            let Some(text) = values.get(path) else {
                return Err(AttrError::ReadFailed(format!(
                    "{}: no mock value seeded",
                    path.display()
                )));
            };
            text.trim()
                .parse()
                .map_err(|e| AttrError::ParseFailed(format!("{}: {e}", path.display())))
        }

        fn write_text(&self, path: &Path, text: &str) -> Result<()> {
            self.writes
                .borrow_mut()
                .push((path.to_path_buf(), text.to_string()));
            if !self.writable.borrow().contains(path) {
                return Err(AttrError::WriteFailed(format!(
                    "{}: not writable",
                    path.display()
                )));
            }
            if self.fail_writes.borrow().contains(path) {
                return Err(AttrError::WriteFailed(format!(
                    "{}: failure injected",
                    path.display()
                )));
            }
            Ok(())
        }

        fn is_writable(&self, path: &Path) -> bool {
            self.writable.borrow().contains(path)
        }
    }
}
