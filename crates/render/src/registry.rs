//! Section-type dispatch.
//!
//! Rendering is a pure lookup on the section's `type` string. Types without
//! a registered renderer are skipped silently — a single deprecated or
//! future section must not blank the whole site — but the registry is
//! validated against the canonical type list once at startup, so a missing
//! renderer for a type we *do* emit is caught before serving traffic.

use std::collections::HashMap;

use serde_json::{Map, Value};

use siteweaver_core::site::model::Section;

use crate::sections;

/// Context handed to each renderer alongside its props. Renderers own no
/// knowledge of migration, theming, or persistence.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext {
    pub editable: bool,
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
}

/// A concrete renderer: props bag + context → HTML fragment.
pub type RenderFn = fn(&Map<String, Value>, &SectionContext) -> String;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no renderer registered for section type '{0}'")]
    MissingRenderer(String),
}

/// Mapping from canonical section type to its renderer.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    renderers: HashMap<&'static str, RenderFn>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registry covering every canonical section type.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("hero-centered", sections::hero::hero_centered);
        registry.register("hero-split", sections::hero::hero_split);
        registry.register("about", sections::content::about);
        registry.register("services", sections::content::services);
        registry.register("statistics", sections::content::statistics);
        registry.register("gallery", sections::media::gallery);
        registry.register("faq", sections::misc::faq);
        registry.register("contact", sections::misc::contact);
        registry.register("cta-banner", sections::misc::cta_banner);
        registry.register("footer", sections::misc::footer);
        registry
    }

    pub fn register(&mut self, section_type: &'static str, renderer: RenderFn) {
        self.renderers.insert(section_type, renderer);
    }

    /// Startup check: every type in `types` must have a renderer.
    pub fn verify_coverage(&self, types: &[&str]) -> Result<(), RegistryError> {
        for section_type in types {
            if !self.renderers.contains_key(section_type) {
                return Err(RegistryError::MissingRenderer(section_type.to_string()));
            }
        }
        Ok(())
    }

    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }

    /// Render one section, or `None` for an unregistered type.
    pub fn render_section(&self, section: &Section, ctx: &SectionContext) -> Option<String> {
        match self.renderers.get(section.section_type.as_str()) {
            Some(render) => Some(render(&section.props, ctx)),
            None => {
                tracing::debug!(
                    section_type = %section.section_type,
                    section_id = %section.id,
                    "no renderer registered, skipping section"
                );
                None
            }
        }
    }

    /// Render an ordered section list. Ordering is exactly list order;
    /// unknown types are skipped, everything else renders unaffected.
    pub fn render_page(&self, sections: &[Section], editable: bool) -> String {
        let total = sections.len();
        let mut out = String::new();
        for (index, section) in sections.iter().enumerate() {
            let ctx = SectionContext {
                editable,
                index,
                is_first: index == 0,
                is_last: index + 1 == total,
            };
            if let Some(fragment) = self.render_section(section, &ctx) {
                out.push_str(&fragment);
            }
        }
        out
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
