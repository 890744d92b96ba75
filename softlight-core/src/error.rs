//! Error types for host display backends.
//!
//! The gesture and color core is total and cannot fail; only backends
//! talking to a real display do.

/// Errors that can occur in a host display backend.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// No backlight device was found under the given directory.
    #[error("no backlight device found under {0}")]
    NoBacklight(String),

    /// A device attribute held something other than an integer.
    #[error("unexpected contents in {path}: {value:?}")]
    Parse {
        /// The attribute file that was read.
        path: String,
        /// What it contained.
        value: String,
    },

    /// An I/O error occurred while talking to the device.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
