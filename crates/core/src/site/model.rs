use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::content::GeneratedContent;

/// One renderable, typed, ordered unit of a page (hero, about, gallery, …).
///
/// `props` is an open bag: each renderer interprets only the keys it
/// recognizes and must tolerate missing keys with sane defaults. The first
/// section of a page is conventionally `locked` — it is assumed to be the
/// masthead/hero and cannot be deleted or reordered below position 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Discriminator into the section-type registry.
    #[serde(rename = "type")]
    pub section_type: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub props: serde_json::Map<String, Value>,
}

impl Section {
    pub fn new(id: impl Into<String>, section_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            section_type: section_type.into(),
            locked: false,
            props: serde_json::Map::new(),
        }
    }
}

/// Palette, typography and corner-radius settings applied site-wide.
///
/// Colors are stored as hex (or raw color expressions) keyed by role name.
/// Absent fields simply skip injection — they are never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    #[serde(default)]
    pub fonts: ThemeFonts,
    #[serde(
        rename = "borderRadius",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub border_radius: Option<String>,
}

/// Heading and body font families. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeFonts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Theme {
    /// True when nothing would be injected for this theme.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.fonts.heading.is_none()
            && self.fonts.body.is_none()
            && self.border_radius.is_none()
    }
}

/// Persisted site aggregate as read from the store.
///
/// `legacy_blocks`/`legacy_theme` hold the older visual-builder document for
/// projects created before canonical sections existed; they are consumed by
/// the migrator on first public load and accepted under their historical
/// column aliases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub id: Uuid,
    pub name: String,
    pub subdomain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, alias = "chai_blocks", skip_serializing_if = "Option::is_none")]
    pub legacy_blocks: Option<Value>,
    #[serde(default, alias = "chai_theme", skip_serializing_if = "Option::is_none")]
    pub legacy_theme: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_content: Option<GeneratedContent>,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl SiteRecord {
    /// True when the record already carries a non-empty canonical section
    /// list and does not need migration.
    pub fn has_canonical_sections(&self) -> bool {
        self.sections.as_ref().is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn section_roundtrip_uses_type_key() {
        let mut section = Section::new("s1", "hero-centered");
        section.locked = true;
        section
            .props
            .insert("title".into(), json!("Hello"));

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], "hero-centered");
        assert_eq!(value["props"]["title"], "Hello");

        let back: Section = serde_json::from_value(value).unwrap();
        assert_eq!(back, section);
    }

    #[test]
    fn section_defaults_missing_fields() {
        let section: Section =
            serde_json::from_value(json!({"id": "s1", "type": "about"})).unwrap();
        assert!(!section.locked);
        assert!(section.props.is_empty());
    }

    #[test]
    fn record_accepts_legacy_aliases() {
        let record: SiteRecord = serde_json::from_value(json!({
            "id": "3f6e8f1a-58b3-4a8e-9a7e-1c2d3e4f5a6b",
            "name": "Acme",
            "subdomain": "acme",
            "chai_blocks": [{"_type": "HeroCentered"}],
            "chai_theme": {"colors": {}},
            "_createdAt": "2026-01-01T00:00:00Z",
            "_updatedAt": "2026-01-01T00:00:00Z",
        }))
        .unwrap();
        assert!(record.legacy_blocks.is_some());
        assert!(record.legacy_theme.is_some());
        assert!(!record.has_canonical_sections());
    }

    #[test]
    fn empty_theme_reports_empty() {
        assert!(Theme::default().is_empty());
        let theme: Theme =
            serde_json::from_value(json!({"colors": {"primary": "#C65D3E"}})).unwrap();
        assert!(!theme.is_empty());
    }
}
