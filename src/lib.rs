//! Hide arbitrary text inside a sequence of uppercase Latin letters, and get
//! it back.
//!
//! This is reversible obfuscation, not encryption. A key perturbs the output,
//! a checksum tail detects altered sequences, and an optional gzip pass
//! shortens long ones.
//!
//! ```
//! let hidden = letterveil::hide("A1", None, true);
//! assert!(hidden.chars().all(|c| c.is_ascii_uppercase()));
//! assert_eq!(letterveil::recover(&hidden, None).unwrap(), "A1");
//! ```

mod core;
mod diagnostics;
mod encoders;
mod features;
mod hider;

pub use crate::core::config::{HiderConfig, Settings};
pub use crate::core::seed::{MAX_SEED, MIN_SEED, Seed};
pub use diagnostics::{DiagnosticSink, Operation, Silent, TracingSink};
pub use encoders::errors::{Failure, HiderError};
pub use encoders::frame::{FrameHeader, inspect};
pub use encoders::unit::UnitClass;
pub use features::compression::{COMPRESSED_MARKER, DEFAULT_LEVEL};
pub use hider::{Hider, HiderBuilder};

/// Hides `text`, optionally under `key`, with or without a checksum tail.
pub fn hide(text: &str, key: Option<&str>, add_checksum: bool) -> String {
    Hider::builder()
        .maybe_key(key)
        .checksum(add_checksum)
        .build()
        .hide(text)
}

/// Recovers the text hidden in an uncompressed `sequence`.
pub fn recover(sequence: &str, key: Option<&str>) -> Result<String, Failure> {
    Hider::builder().maybe_key(key).build().recover(sequence)
}

/// Compresses a hidden sequence when that makes it shorter.
pub fn compress(sequence: &str) -> Result<String, Failure> {
    Hider::new().compress(sequence)
}

/// Expands a compressed sequence; other input is returned unchanged.
pub fn decompress(sequence: &str) -> Result<String, Failure> {
    Hider::new().decompress(sequence)
}
