//! HTML to plain text.
//!
//! Text nodes are joined with newlines so that block boundaries survive;
//! section markers split across inline tags still match because the section
//! patterns allow any whitespace between words.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

static HTML_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*(?:!doctype\s+html|html|body|div|p|table|font|span|br)\b")
        .expect("HTML marker pattern is valid")
});

/// Whether `text` looks like an HTML document or fragment.
pub fn looks_like_html(text: &str) -> bool {
    HTML_MARKER.is_match(text)
}

/// Visible text of an HTML document, one text node per line.
///
/// Script and style contents are dropped, entities are decoded and blank
/// text nodes are skipped.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map_or(false, |element| matches!(element.name(), "script" | "style"))
        });
        if hidden {
            continue;
        }

        let line = text.trim();
        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html("<!DOCTYPE html><html><body>x</body></html>"));
        assert!(looks_like_html("<DIV style=\"x\">Item 7</DIV>"));
        assert!(!looks_like_html("Revenue < costs when price > 0."));
        assert!(!looks_like_html("Item 7. Management's Discussion"));
    }

    #[test]
    fn test_html_to_text() {
        let html = "<html><head><style>p { color: red; }</style>\
                    <script>var risk = 1;</script></head>\
                    <body><p>Item&nbsp;7.</p><div><b>Management&#8217;s</b> Discussion</div>\
                    <p>   </p><p>Prices &amp; demand</p></body></html>";

        assert_eq!(
            html_to_text(html),
            "Item\u{a0}7.\nManagement’s\nDiscussion\nPrices & demand"
        );
    }
}
