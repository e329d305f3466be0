//! ledmux — priority-arbitrated indicator LED control over sysfs.

pub mod arbiter;
pub mod config;
pub mod device;
pub mod error;
pub mod led;
pub mod light;
pub mod service;

pub use error::LedmuxError;
