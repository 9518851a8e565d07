pub mod components;
pub mod layout;
pub mod media;

/// Escapes text for use in HTML content and attribute values. Catalog
/// content is author-controlled, so this guards against markup
/// accidents, not injection.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
