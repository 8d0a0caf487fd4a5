//! HTML stripping: best-effort extraction of visible text from markup.

use scraper::{Html, Node};

/// Extracts the visible text content from HTML-like markup.
///
/// Tags, attributes, comments, and the contents of `<script>` and `<style>`
/// elements are discarded; character entities are decoded. Input without
/// markup passes through unchanged, and malformed markup degrades to
/// plain-text passthrough rather than failing.
pub fn extract_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut text = String::with_capacity(markup.len());

    for node in fragment.tree.root().descendants() {
        if let Node::Text(chunk) = node.value() {
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map_or(false, |el| matches!(el.name(), "script" | "style"))
            });
            if !hidden {
                text.push_str(&chunk.text);
            }
        }
    }

    text
}
