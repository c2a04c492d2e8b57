//! Generated-content bundle: the AI-produced text/image payload consumed to
//! backfill section props. The engine never calls the generation service —
//! it only reads this shape off the site record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default ceiling, in characters, for embedded image data. Values beyond
/// it are too large to inline and are treated as unusable. Overridable via
/// configuration.
pub const DEFAULT_EMBEDDED_IMAGE_CEILING: usize = 200_000;

/// Per-page text blocks plus an image map keyed by semantic slot names
/// (`heroHome`, `aboutImage`, `galleryImages`, …). Image values are either
/// remote URLs or embedded data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    #[serde(default)]
    pub pages: PageContent,
    #[serde(default)]
    pub images: BTreeMap<String, Value>,
}

/// Loose text blocks for each generated page area. Each is whatever the
/// generation service produced; consumers pick out the fields they know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub hero: Value,
    #[serde(default)]
    pub about: Value,
    #[serde(default)]
    pub services: Value,
    #[serde(default)]
    pub contact: Value,
    #[serde(default)]
    pub statistics: Value,
    #[serde(default)]
    pub faq: Value,
}

impl GeneratedContent {
    /// The usable image stored under `key`, if any.
    pub fn usable_image(&self, key: &str, ceiling: usize) -> Option<&str> {
        self.images
            .get(key)
            .and_then(|v| usable_image_value(v, ceiling))
    }

    /// The usable gallery entry at `index`, if any.
    pub fn gallery_image(&self, index: usize, ceiling: usize) -> Option<&str> {
        self.images
            .get("galleryImages")?
            .as_array()?
            .get(index)
            .and_then(|v| usable_image_value(v, ceiling))
    }

    /// A named text field from one of the page blocks, if present and
    /// non-empty.
    pub fn page_text(&self, page: &str, field: &str) -> Option<&str> {
        let block = match page {
            "hero" => &self.pages.hero,
            "about" => &self.pages.about,
            "services" => &self.pages.services,
            "contact" => &self.pages.contact,
            "statistics" => &self.pages.statistics,
            "faq" => &self.pages.faq,
            _ => return None,
        };
        block
            .get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// True when the bundle holds at least one usable image anywhere,
    /// including gallery entries.
    pub fn has_usable_image(&self, ceiling: usize) -> bool {
        self.images.values().any(|value| match value {
            Value::Array(entries) => entries
                .iter()
                .any(|v| usable_image_value(v, ceiling).is_some()),
            other => usable_image_value(other, ceiling).is_some(),
        })
    }
}

/// Remote URLs are always usable; embedded data only up to the ceiling.
fn usable_image_value(value: &Value, ceiling: usize) -> Option<&str> {
    let s = value.as_str()?;
    if s.is_empty() {
        return None;
    }
    if is_remote_url(s) || s.len() <= ceiling {
        Some(s)
    } else {
        None
    }
}

fn is_remote_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://") || value.starts_with("//")
}
