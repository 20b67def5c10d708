//! PDF text acquisition: one text blob per statement page.

use std::path::Path;

use anyhow::{anyhow, bail, Result};

/// Pull the text layer out of `path`, one string per page.
///
/// `pdf_extract` emits the whole document with a form feed between pages;
/// splitting on it keeps page numbering intact, so callers can skip the
/// cover sheet positionally. Empty pages stay in the list for the same
/// reason.
pub fn extract_page_texts(path: &Path) -> Result<Vec<String>> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| anyhow!("reading text layer of {}: {e}", path.display()))?;

    if text.trim().is_empty() {
        bail!(
            "{} has no extractable text (scanned or image-only PDF?)",
            path.display()
        );
    }

    Ok(split_pages(&text))
}

fn split_pages(text: &str) -> Vec<String> {
    text.split('\u{000C}').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_on_form_feed() {
        let pages = split_pages("cover\u{000C}page one\u{000C}page two");
        assert_eq!(pages, vec!["cover", "page one", "page two"]);
    }

    #[test]
    fn test_split_pages_keeps_empty_pages() {
        let pages = split_pages("cover\u{000C}\u{000C}page two\u{000C}");
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[1], "");
        assert_eq!(pages[2], "page two");
    }
}
