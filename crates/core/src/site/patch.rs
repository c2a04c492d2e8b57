//! Generated-content patching.
//!
//! Sections are created before the image pipeline finishes, so image props
//! often start empty. [`patch`] fills those gaps from the generated-content
//! bundle — and only the gaps: a slot that already holds a value is never
//! overwritten, which keeps manual edits intact and makes repeated patching
//! a no-op.

use serde_json::Value;

use crate::content::GeneratedContent;

use super::model::Section;

/// An image prop with its ordered list of candidate content-image keys.
/// The first usable candidate wins.
struct ImageSlot {
    prop: &'static str,
    candidates: &'static [&'static str],
}

/// A text prop fed from one field of a generated page block.
struct TextSlot {
    prop: &'static str,
    page: &'static str,
    field: &'static str,
}

/// Number of numbered image props (`image1` … `imageN`) on a gallery
/// section. The gallery renderer reads the same slots.
pub const GALLERY_SLOT_COUNT: usize = 6;

const HERO_IMAGE_SLOTS: &[ImageSlot] = &[ImageSlot {
    prop: "imageUrl",
    candidates: &["heroHome", "aboutImage", "heroSplit", "servicesImage"],
}];

const ABOUT_IMAGE_SLOTS: &[ImageSlot] = &[ImageSlot {
    prop: "imageUrl",
    candidates: &["aboutImage", "heroHome"],
}];

const SERVICES_IMAGE_SLOTS: &[ImageSlot] = &[ImageSlot {
    prop: "imageUrl",
    candidates: &["servicesImage", "aboutImage"],
}];

const HERO_TEXT_SLOTS: &[TextSlot] = &[
    TextSlot {
        prop: "title",
        page: "hero",
        field: "headline",
    },
    TextSlot {
        prop: "subtitle",
        page: "hero",
        field: "subheadline",
    },
];

const ABOUT_TEXT_SLOTS: &[TextSlot] = &[TextSlot {
    prop: "body",
    page: "about",
    field: "body",
}];

fn image_slots(section_type: &str) -> &'static [ImageSlot] {
    match section_type {
        "hero-centered" | "hero-split" => HERO_IMAGE_SLOTS,
        "about" => ABOUT_IMAGE_SLOTS,
        "services" => SERVICES_IMAGE_SLOTS,
        _ => &[],
    }
}

fn text_slots(section_type: &str) -> &'static [TextSlot] {
    match section_type {
        "hero-centered" | "hero-split" => HERO_TEXT_SLOTS,
        "about" => ABOUT_TEXT_SLOTS,
        _ => &[],
    }
}

/// A slot is empty when the prop is missing, null, or an empty string.
fn slot_is_empty(section: &Section, prop: &str) -> bool {
    match section.props.get(prop) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn resolve_image<'a>(
    content: &'a GeneratedContent,
    candidates: &[&str],
    ceiling: usize,
) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|key| content.usable_image(key, ceiling))
}

/// True only if at least one fillable image slot is empty and the bundle
/// holds a usable value for it. Once [`patch`] has run, this returns false,
/// so the caller's patch-on-read stays idempotent.
pub fn needs_patch(sections: &[Section], content: &GeneratedContent, ceiling: usize) -> bool {
    if !content.has_usable_image(ceiling) {
        return false;
    }
    sections.iter().any(|section| {
        let fillable_named = image_slots(&section.section_type).iter().any(|slot| {
            slot_is_empty(section, slot.prop)
                && resolve_image(content, slot.candidates, ceiling).is_some()
        });
        fillable_named
            || (section.section_type == "gallery"
                && (0..GALLERY_SLOT_COUNT).any(|i| {
                    slot_is_empty(section, &gallery_prop(i))
                        && content.gallery_image(i, ceiling).is_some()
                }))
    })
}

/// Fill empty image and text slots from the bundle. Returns a new list;
/// the input is untouched. Populated slots are never overwritten.
pub fn patch(sections: &[Section], content: &GeneratedContent, ceiling: usize) -> Vec<Section> {
    sections
        .iter()
        .map(|section| {
            let mut patched = section.clone();

            for slot in image_slots(&section.section_type) {
                if slot_is_empty(&patched, slot.prop) {
                    if let Some(url) = resolve_image(content, slot.candidates, ceiling) {
                        patched
                            .props
                            .insert(slot.prop.to_string(), Value::String(url.to_string()));
                    }
                }
            }

            if patched.section_type == "gallery" {
                for i in 0..GALLERY_SLOT_COUNT {
                    let prop = gallery_prop(i);
                    if slot_is_empty(&patched, &prop) {
                        if let Some(url) = content.gallery_image(i, ceiling) {
                            patched.props.insert(prop, Value::String(url.to_string()));
                        }
                    }
                }
            }

            for slot in text_slots(&section.section_type) {
                if slot_is_empty(&patched, slot.prop) {
                    if let Some(text) = content.page_text(slot.page, slot.field) {
                        patched
                            .props
                            .insert(slot.prop.to_string(), Value::String(text.to_string()));
                    }
                }
            }

            patched
        })
        .collect()
}

fn gallery_prop(index: usize) -> String {
    format!("image{}", index + 1)
}
