//! Web-font loading, deduplicated per family.
//!
//! Loading is expressed as stylesheet links the page shell emits; the
//! loader guarantees one link per family per session no matter how many
//! theme applications ask for it.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// A stylesheet link for one font family. `id` is derived from the family
/// name so repeated injections are recognizable in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontLink {
    pub id: String,
    pub href: String,
}

/// Idempotent remote font loader keyed by family name.
#[derive(Debug, Clone, Default)]
pub struct FontLoader {
    loaded: Arc<Mutex<HashSet<String>>>,
}

impl FontLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a family. Returns the link to emit the first time the family
    /// is seen in this session; `None` thereafter (or for blank names).
    pub fn ensure_loaded(&self, family: &str) -> Option<FontLink> {
        let key = font_key(family);
        if key.is_empty() {
            return None;
        }
        let mut loaded = self.loaded.lock().expect("font loader lock poisoned");
        if !loaded.insert(key.clone()) {
            return None;
        }
        Some(FontLink {
            id: format!("font-{key}"),
            href: stylesheet_href(family),
        })
    }

    /// True when a family's stylesheet was already requested.
    pub fn is_loaded(&self, family: &str) -> bool {
        self.loaded
            .lock()
            .expect("font loader lock poisoned")
            .contains(&font_key(family))
    }
}

/// Lowercased, dash-joined identifier for a family name.
fn font_key(family: &str) -> String {
    let mut key = String::with_capacity(family.len());
    for part in family.split_whitespace() {
        if !key.is_empty() {
            key.push('-');
        }
        key.extend(part.chars().filter(|c| c.is_alphanumeric()).flat_map(char::to_lowercase));
    }
    key
}

fn stylesheet_href(family: &str) -> String {
    let family_param = family.trim().replace(' ', "+");
    format!("https://fonts.googleapis.com/css2?family={family_param}:wght@400;500;600;700&display=swap")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_yields_a_link() {
        let loader = FontLoader::new();
        let link = loader.ensure_loaded("Playfair Display").unwrap();
        assert_eq!(link.id, "font-playfair-display");
        assert!(link.href.contains("family=Playfair+Display"));
        assert!(loader.is_loaded("Playfair Display"));
    }

    #[test]
    fn repeat_requests_are_deduplicated() {
        let loader = FontLoader::new();
        assert!(loader.ensure_loaded("Inter").is_some());
        assert!(loader.ensure_loaded("Inter").is_none());
        // Dedup is keyed on the derived identifier, not the exact spelling.
        assert!(loader.ensure_loaded("  inter ").is_none());
    }

    #[test]
    fn blank_family_is_ignored() {
        let loader = FontLoader::new();
        assert!(loader.ensure_loaded("").is_none());
        assert!(loader.ensure_loaded("   ").is_none());
    }

    #[test]
    fn clones_share_the_loaded_set() {
        let loader = FontLoader::new();
        let other = loader.clone();
        assert!(loader.ensure_loaded("Lora").is_some());
        assert!(other.ensure_loaded("Lora").is_none());
    }
}
