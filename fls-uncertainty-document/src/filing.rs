//! Raw filings: bytes in, plain text out.

use crate::decode::{decode, decode_with, Decoded};
use crate::markup::{html_to_text, looks_like_html};
use crate::section::{extract_mdna, Extraction, SectionPattern};
use encoding_rs::Encoding;

/// A filing decoded to plain text, with markup removed when it was HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingText {
    text: String,
    encoding: &'static Encoding,
    was_html: bool,
}

impl FilingText {
    /// Decode `bytes`, detecting the encoding.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_decoded(decode(bytes))
    }

    /// Decode `bytes` with a declared encoding.
    pub fn from_bytes_with_encoding(bytes: &[u8], encoding: &'static Encoding) -> Self {
        Self::from_decoded(decode_with(bytes, encoding))
    }

    fn from_decoded(decoded: Decoded) -> Self {
        let was_html = looks_like_html(&decoded.text);
        let text = if was_html {
            html_to_text(&decoded.text)
        } else {
            decoded.text
        };
        tracing::debug!(
            encoding = decoded.encoding.name(),
            was_html,
            bytes = text.len(),
            "decoded filing"
        );

        Self {
            text,
            encoding: decoded.encoding,
            was_html,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn was_html(&self) -> bool {
        self.was_html
    }

    /// The MD&A section of this filing.
    pub fn mdna(&self) -> Extraction<'_> {
        extract_mdna(&self.text)
    }

    pub fn section(&self, pattern: &SectionPattern) -> Extraction<'_> {
        pattern.extract(&self.text)
    }
}
