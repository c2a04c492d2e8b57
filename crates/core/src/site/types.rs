//! Section type vocabulary.
//!
//! Stringly-typed discriminators are a latent source of typos, so both
//! lookup tables live here as the single source of truth: the legacy
//! visual-builder type names and their canonical replacements, and the
//! bookkeeping keys stripped from legacy blocks. The renderer registry is
//! validated against [`CANONICAL_TYPES`] once at startup.

/// Every section type the engine ships a renderer for.
pub const CANONICAL_TYPES: &[&str] = &[
    "hero-centered",
    "hero-split",
    "about",
    "services",
    "gallery",
    "statistics",
    "faq",
    "contact",
    "cta-banner",
    "footer",
];

/// Old visual-builder type name → canonical type.
const LEGACY_TYPE_MAP: &[(&str, &str)] = &[
    ("HeroCentered", "hero-centered"),
    ("HeroSplit", "hero-split"),
    ("SplitHero", "hero-split"),
    ("About", "about"),
    ("AboutSection", "about"),
    ("Services", "services"),
    ("ServicesGrid", "services"),
    ("Gallery", "gallery"),
    ("ImageGallery", "gallery"),
    ("Statistics", "statistics"),
    ("StatsBand", "statistics"),
    ("Faq", "faq"),
    ("FaqAccordion", "faq"),
    ("Contact", "contact"),
    ("ContactForm", "contact"),
    ("CallToAction", "cta-banner"),
    ("CtaBanner", "cta-banner"),
    ("Footer", "footer"),
];

/// Internal bookkeeping keys on legacy blocks, never carried into props.
const INTERNAL_KEYS: &[&str] = &[
    "_id",
    "_type",
    "_position",
    "_name",
    "styles",
    "blockProps",
    "inBuilder",
    "containerClassName",
];

/// Map a legacy block type to its canonical section type.
///
/// Unmapped names pass through unchanged so that types added after this
/// table was written keep rendering (unknown types soft-skip downstream).
pub fn canonical_type(legacy: &str) -> &str {
    LEGACY_TYPE_MAP
        .iter()
        .find(|(old, _)| *old == legacy)
        .map(|(_, new)| *new)
        .unwrap_or(legacy)
}

/// True for legacy-block keys that must not survive migration.
pub fn is_internal_key(key: &str) -> bool {
    INTERNAL_KEYS.contains(&key)
}
