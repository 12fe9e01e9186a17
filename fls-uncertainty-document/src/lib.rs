//! Filing decoding and section extraction for annual report text.
//!
//! Turns raw 10-K filings into plain text and locates the "Item 7.
//! Management's Discussion and Analysis" section.
//!
//! - [`FilingText`] - decodes filing bytes (byte order mark, UTF-8, or a
//!   detected legacy encoding such as windows-1252) and strips HTML markup
//! - [`SectionPattern`] / [`extract_mdna`] - start/end marker search over
//!   plain text
//!
//! ## Example
//!
//! ```
//! use fls_uncertainty_document::{extract_mdna, Extraction, FilingText};
//!
//! let text = "Item 7. Management's Discussion and Analysis of Financial Condition \
//!             and Results of Operations The Company expects growth. Item 7A. Market Risk";
//! let section = extract_mdna(text);
//! assert!(section.is_found());
//! assert!(section.text().ends_with("Item 7A"));
//!
//! assert_eq!(extract_mdna("no markers here"), Extraction::SectionNotFound);
//!
//! let html = b"<p>Item 7.</p><p>Management\x92s Discussion and Analysis of Financial \
//!              Condition and Results of Operations</p><p>The outlook is uncertain.</p>\
//!              <p>Item 7A.</p>";
//! let filing = FilingText::from_bytes(html);
//! assert!(filing.was_html());
//! assert!(filing.mdna().is_found());
//! ```

mod decode;
mod filing;
mod markup;
mod section;

pub use decode::{decode, decode_with, detect_encoding, Decoded};
pub use encoding_rs::Encoding;
pub use filing::FilingText;
pub use markup::{html_to_text, looks_like_html};
pub use section::{extract_mdna, Extraction, SectionPattern};
