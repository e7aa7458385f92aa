//! Embedded editor assets.
//!
//! The browser editor is a single static page compiled into the binary, so
//! the server ships as one artifact with no filesystem layout to manage.

use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded editor page
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.html"]
struct EmbeddedEditor;

/// The editor page's HTML, if it was embedded at build time.
pub fn editor_page() -> Option<Cow<'static, str>> {
    EmbeddedEditor::get("index.html").map(|file| match file.data {
        Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes),
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_page_is_embedded() {
        let page = editor_page().expect("index.html should be embedded");
        assert!(page.contains("<html"));
        assert!(page.contains("/api/export"));
    }
}
