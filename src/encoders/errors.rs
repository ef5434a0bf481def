use std::fmt;

/// Errors that can occur while hiding, recovering, or (de)compressing a sequence.
///
/// These never leave a [`Hider`](crate::Hider) call directly: they are handed to
/// the configured [`DiagnosticSink`](crate::DiagnosticSink) and then collapsed
/// into [`Failure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HiderError {
    /// The input contains a character outside the sequence alphabet
    InvalidAlphabet { found: char, position: usize },
    /// The length prefix, seed token, or body runs do not fit together
    FrameCorruption {
        position: usize,
        reason: &'static str,
    },
    /// The trailing checksum digits disagree with the recovered text
    ChecksumMismatch { position: usize },
    /// The text encoding or the compression layer failed
    Codec { message: String },
}

impl HiderError {
    pub fn frame(position: usize, reason: &'static str) -> Self {
        HiderError::FrameCorruption { position, reason }
    }

    pub fn codec(message: impl fmt::Display) -> Self {
        HiderError::Codec {
            message: message.to_string(),
        }
    }

    /// Short stable name of the error kind, used for structured diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            HiderError::InvalidAlphabet { .. } => "invalid_alphabet",
            HiderError::FrameCorruption { .. } => "frame_corruption",
            HiderError::ChecksumMismatch { .. } => "checksum_mismatch",
            HiderError::Codec { .. } => "codec_fault",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            HiderError::InvalidAlphabet { .. } => {
                "hidden sequences only contain the uppercase letters A-Z"
            }
            HiderError::FrameCorruption { .. } => {
                "the sequence is truncated, altered, or was hidden with a different key"
            }
            HiderError::ChecksumMismatch { .. } => {
                "the sequence was altered or the key does not match"
            }
            HiderError::Codec { .. } => "compressed sequences must come from the compress step",
        }
    }
}

impl fmt::Display for HiderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            write!(f, "\x1b[1;31merror:\x1b[0m ")?;
        } else {
            write!(f, "error: ")?;
        }

        match self {
            HiderError::InvalidAlphabet { found, position } => {
                writeln!(f, "invalid character {:?} at position {}", found, position)?
            }
            HiderError::FrameCorruption { position, reason } => {
                writeln!(f, "corrupted frame at letter {}: {}", position, reason)?
            }
            HiderError::ChecksumMismatch { position } => {
                writeln!(f, "checksum mismatch at letter {}", position)?
            }
            HiderError::Codec { message } => writeln!(f, "codec fault: {}", message)?,
        }

        if use_color {
            write!(f, "\x1b[1;36mhint:\x1b[0m {}", self.hint())
        } else {
            write!(f, "hint: {}", self.hint())
        }
    }
}

impl std::error::Error for HiderError {}

/// The single failure outcome of every public operation.
///
/// Callers learn *that* a sequence was rejected, not why; the reason is only
/// visible through a diagnostic sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Failure;

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sequence rejected")
    }
}

impl std::error::Error for Failure {}

impl From<HiderError> for Failure {
    fn from(_: HiderError) -> Self {
        Failure
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            HiderError::InvalidAlphabet {
                found: 'a',
                position: 0
            }
            .kind(),
            "invalid_alphabet"
        );
        assert_eq!(HiderError::frame(3, "short").kind(), "frame_corruption");
        assert_eq!(
            HiderError::ChecksumMismatch { position: 9 }.kind(),
            "checksum_mismatch"
        );
        assert_eq!(HiderError::codec("bad gzip").kind(), "codec_fault");
    }

    #[test]
    fn test_error_display() {
        let err = HiderError::InvalidAlphabet {
            found: 'a',
            position: 4,
        };
        let display = format!("{}", err);
        assert!(display.contains("invalid character 'a' at position 4"));
        assert!(display.contains("hint:"));

        let display = format!("{}", HiderError::frame(2, "length marker is zero"));
        assert!(display.contains("letter 2"));
        assert!(display.contains("length marker is zero"));
    }

    #[test]
    fn test_failure_is_opaque() {
        let failure: Failure = HiderError::ChecksumMismatch { position: 1 }.into();
        assert_eq!(failure, Failure);
        assert_eq!(failure.to_string(), "sequence rejected");
    }
}
