use std::fmt;
use std::sync::Arc;

use crate::core::config::HiderConfig;
use crate::core::seed::Seed;
use crate::diagnostics::{DiagnosticSink, Operation, Silent};
use crate::encoders::errors::{Failure, HiderError};
use crate::encoders::frame;
use crate::features::compression::{self, DEFAULT_LEVEL};

/// A caller-owned hiding configuration: key, checksum policy, compression
/// level and diagnostic sink.
///
/// Every operation is a pure function of its input and this value (plus a
/// freshly drawn seed when hiding), so a `Hider` can be shared freely across
/// threads.
///
/// # Example
/// ```
/// use letterveil::Hider;
///
/// let hider = Hider::builder().key("secret").build();
/// let hidden = hider.hide("你好");
/// assert!(hidden.chars().all(|c| c.is_ascii_uppercase()));
/// assert_eq!(hider.recover(&hidden).unwrap(), "你好");
/// ```
#[derive(Clone)]
pub struct Hider {
    key: Option<String>,
    checksum: bool,
    compression_level: u32,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Hider {
    /// A hider with no key, checksums on and diagnostics silenced.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> HiderBuilder {
        HiderBuilder::default()
    }

    /// Builds a hider from loaded settings. The key is not part of the
    /// configuration and has to be supplied separately.
    pub fn from_config(config: &HiderConfig) -> HiderBuilder {
        Self::builder()
            .checksum(config.settings.checksum())
            .compression_level(config.settings.compression_level())
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn checksum(&self) -> bool {
        self.checksum
    }

    pub fn compression_level(&self) -> u32 {
        self.compression_level
    }

    /// Hides `text` under a freshly drawn seed.
    pub fn hide(&self, text: &str) -> String {
        self.hide_with_seed(text, Seed::random())
    }

    /// Hides `text` under an explicit seed; the output is deterministic.
    pub fn hide_with_seed(&self, text: &str, seed: Seed) -> String {
        frame::hide(text, self.key(), self.checksum, seed)
    }

    /// Hides `text`, then runs the compression pass over the result.
    pub fn hide_compressed(&self, text: &str) -> Result<String, Failure> {
        let hidden = self.hide(text);
        self.compress(&hidden)
    }

    /// Recovers the text hidden in an uncompressed sequence.
    pub fn recover(&self, sequence: &str) -> Result<String, Failure> {
        self.absorb(Operation::Recover, frame::recover(sequence, self.key()))
    }

    /// Recovers from either form, decompressing first when the sequence is
    /// marked as compressed.
    pub fn recover_any(&self, sequence: &str) -> Result<String, Failure> {
        let plain = self.decompress(sequence)?;
        self.recover(&plain)
    }

    pub fn compress(&self, sequence: &str) -> Result<String, Failure> {
        self.absorb(
            Operation::Compress,
            compression::compress(sequence, self.compression_level),
        )
    }

    pub fn decompress(&self, sequence: &str) -> Result<String, Failure> {
        self.absorb(Operation::Decompress, compression::decompress(sequence))
    }

    fn absorb(&self, operation: Operation, result: Result<String, HiderError>) -> Result<String, Failure> {
        result.map_err(|error| {
            self.diagnostics.report(operation, &error);
            Failure
        })
    }
}

impl Default for Hider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hider")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("checksum", &self.checksum)
            .field("compression_level", &self.compression_level)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Hider`].
pub struct HiderBuilder {
    key: Option<String>,
    checksum: bool,
    compression_level: u32,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Default for HiderBuilder {
    fn default() -> Self {
        HiderBuilder {
            key: None,
            checksum: true,
            compression_level: DEFAULT_LEVEL,
            diagnostics: Arc::new(Silent),
        }
    }
}

impl HiderBuilder {
    /// Mixes `key` into every ciphered digit. An empty key is the same as none.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.key = (!key.is_empty()).then_some(key);
        self
    }

    pub fn maybe_key(self, key: Option<impl Into<String>>) -> Self {
        match key {
            Some(key) => self.key(key),
            None => self,
        }
    }

    pub fn checksum(mut self, enabled: bool) -> Self {
        self.checksum = enabled;
        self
    }

    /// gzip level for the compression pass, clamped to 0-9.
    pub fn compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }

    pub fn diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Arc::new(sink);
        self
    }

    pub fn build(self) -> Hider {
        Hider {
            key: self.key,
            checksum: self.checksum,
            compression_level: self.compression_level,
            diagnostics: self.diagnostics,
        }
    }
}
