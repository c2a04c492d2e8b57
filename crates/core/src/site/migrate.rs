//! Legacy visual-builder document migration.
//!
//! Older projects store a flat list of heterogeneous blocks plus a loose
//! theme object. [`migrate_blocks`] converts both into the canonical
//! `Section` list + `Theme` in one pass. The function is pure; persisting
//! the result (fire-and-forget, once) is the caller's job, so a storage
//! failure degrades to re-migrating on the next request instead of losing
//! data.

use serde_json::Value;

use super::model::{Section, Theme, ThemeFonts};
use super::types::{canonical_type, is_internal_key};

/// Output of a successful migration run.
#[derive(Debug, Clone, PartialEq)]
pub struct MigratedSite {
    pub sections: Vec<Section>,
    pub theme: Theme,
}

/// Convert a legacy block list + legacy theme into canonical form.
///
/// Returns `None` when `blocks` is absent, not an array, or yields no
/// sections — callers must not persist an empty result over existing data.
///
/// Repeat runs over the same input produce the same `type`/`props`/`locked`
/// at every index; synthesized ids may differ between runs.
pub fn migrate_blocks(blocks: Option<&Value>, legacy_theme: Option<&Value>) -> Option<MigratedSite> {
    let blocks = blocks?.as_array()?;
    if blocks.is_empty() {
        return None;
    }

    let mut sections = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.iter().enumerate() {
        let Some(block) = block.as_object() else {
            tracing::debug!(index, "skipping non-object legacy block");
            continue;
        };
        let Some(block_type) = block.get("_type").and_then(Value::as_str) else {
            tracing::debug!(index, "skipping legacy block without a type");
            continue;
        };

        let mut props = serde_json::Map::new();
        for (key, value) in block {
            if !is_internal_key(key) {
                props.insert(key.clone(), value.clone());
            }
        }

        let id = match block.get("_id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => synthesize_id(index),
        };

        sections.push(Section {
            id,
            section_type: canonical_type(block_type).to_string(),
            locked: sections.is_empty(),
            props,
        });
    }

    if sections.is_empty() {
        return None;
    }

    Some(MigratedSite {
        sections,
        theme: convert_legacy_theme(legacy_theme),
    })
}

/// Stable within one migration run; collisions across runs are acceptable
/// because ids are synthesized only once, at migration time.
fn synthesize_id(index: usize) -> String {
    format!("{index}-{}", chrono::Utc::now().timestamp_millis())
}

/// Legacy themes store each color role as either a raw string or a
/// `[light, dark]` pair; the light element wins. Fonts and border radius
/// copy through when present.
fn convert_legacy_theme(raw: Option<&Value>) -> Theme {
    let Some(obj) = raw.and_then(Value::as_object) else {
        return Theme::default();
    };

    let mut theme = Theme::default();

    if let Some(colors) = obj.get("colors").and_then(Value::as_object) {
        for (role, value) in colors {
            if let Some(color) = legacy_color_value(value) {
                theme.colors.insert(role.clone(), color);
            }
        }
    }

    if let Some(fonts) = obj.get("fonts").and_then(Value::as_object) {
        theme.fonts = ThemeFonts {
            heading: non_empty_str(fonts.get("heading")),
            body: non_empty_str(fonts.get("body")),
        };
    }

    theme.border_radius = non_empty_str(obj.get("borderRadius"));
    theme
}

fn legacy_color_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(pair) => pair
            .first()
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
