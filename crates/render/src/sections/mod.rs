//! Concrete renderers, one per canonical section type. Each receives only
//! its props bag and a [`SectionContext`] and returns an HTML fragment;
//! missing props fall back to sane defaults.

pub mod content;
pub mod hero;
pub mod media;
pub mod misc;

use crate::registry::SectionContext;

/// Shared wrapper opening tag. Editability surfaces as a data attribute the
/// editor chrome hooks onto.
fn section_open(kind: &str, ctx: &SectionContext) -> String {
    let mut tag = format!("<section class=\"sw-section sw-{kind}\" data-section=\"{kind}\"");
    if ctx.editable {
        tag.push_str(" data-editable=\"true\"");
    }
    tag.push('>');
    tag
}
