//! The document head as an injected side effect.
//!
//! A browser bridge implements `DocumentHead` by writing `document.title`,
//! `<meta name="description">`, `<meta name="keywords">` and
//! `<link rel="canonical">` in place. `MemoryHead` keeps the values in
//! memory; a prerender step calls [`MemoryHead::to_html`] to emit the same
//! tags into static pages for crawlers that do not run scripts.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::meta::ResolvedMeta;

pub trait DocumentHead {
    fn apply(&mut self, meta: &ResolvedMeta);
}

impl<H: DocumentHead + ?Sized> DocumentHead for &mut H {
    fn apply(&mut self, meta: &ResolvedMeta) {
        (**self).apply(meta)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHead {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    /// Number of times `apply` ran.
    pub updates: usize,
}

impl MemoryHead {
    /// Head markup for the current values, escaped for text and attribute
    /// positions respectively.
    pub fn to_html(&self) -> String {
        format!(
            "<title>{}</title>\n<meta name=\"description\" content=\"{}\">\n<meta name=\"keywords\" content=\"{}\">\n<link rel=\"canonical\" href=\"{}\">",
            encode_text(&self.title),
            encode_double_quoted_attribute(&self.description),
            encode_double_quoted_attribute(&self.keywords),
            encode_double_quoted_attribute(&self.canonical),
        )
    }
}

impl DocumentHead for MemoryHead {
    fn apply(&mut self, meta: &ResolvedMeta) {
        self.title.clone_from(&meta.title);
        self.description.clone_from(&meta.description);
        self.keywords.clone_from(&meta.keywords);
        self.canonical.clone_from(&meta.canonical);
        self.updates += 1;
    }
}
