//! Byte decoding for filings of unknown encoding.
//!
//! A byte order mark wins, then valid UTF-8, then a statistical guess.
//! A declared encoding skips detection (a BOM still overrides it).

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Text decoded from raw filing bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
    /// Malformed sequences were replaced with U+FFFD
    pub had_errors: bool,
}

/// Decode with an encoding detected from the bytes themselves.
pub fn decode(bytes: &[u8]) -> Decoded {
    decode_with(bytes, detect_encoding(bytes))
}

/// Decode with a declared encoding.
pub fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Decoded {
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = used.name(),
            "malformed byte sequences replaced while decoding"
        );
    }
    Decoded {
        text: text.into_owned(),
        encoding: used,
        had_errors,
    }
}

/// The encoding `bytes` most likely use.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    tracing::debug!(encoding = encoding.name(), "guessed filing encoding");
    encoding
}
