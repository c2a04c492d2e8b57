use serde_json::{Map, Value};

use crate::html::{escape_attr, escape_text, prop_str};
use crate::registry::SectionContext;

use super::section_open;

/// Full-width hero with centered copy over an optional backdrop image.
/// As the masthead it gets the page's only `<h1>`.
pub fn hero_centered(props: &Map<String, Value>, ctx: &SectionContext) -> String {
    let title = prop_str(props, "title", "Welcome");
    let subtitle = prop_str(props, "subtitle", "");
    let image = prop_str(props, "imageUrl", "");
    let cta_label = prop_str(props, "ctaLabel", "");
    let cta_href = prop_str(props, "ctaHref", "#contact");

    let mut out = section_open("hero-centered", ctx);
    if !image.is_empty() {
        out.push_str(&format!(
            "<img class=\"sw-hero-backdrop\" src=\"{}\" alt=\"\" loading=\"eager\">",
            escape_attr(image)
        ));
    }
    out.push_str("<div class=\"sw-hero-copy\">");
    let heading = if ctx.is_first { "h1" } else { "h2" };
    out.push_str(&format!("<{heading}>{}</{heading}>", escape_text(title)));
    if !subtitle.is_empty() {
        out.push_str(&format!(
            "<p class=\"sw-subtitle\">{}</p>",
            escape_text(subtitle)
        ));
    }
    if !cta_label.is_empty() {
        out.push_str(&format!(
            "<a class=\"sw-cta\" href=\"{}\">{}</a>",
            escape_attr(cta_href),
            escape_text(cta_label)
        ));
    }
    out.push_str("</div></section>");
    out
}

/// Two-column hero: copy beside the image instead of over it.
pub fn hero_split(props: &Map<String, Value>, ctx: &SectionContext) -> String {
    let title = prop_str(props, "title", "Welcome");
    let subtitle = prop_str(props, "subtitle", "");
    let image = prop_str(props, "imageUrl", "");
    let cta_label = prop_str(props, "ctaLabel", "");
    let cta_href = prop_str(props, "ctaHref", "#contact");

    let mut out = section_open("hero-split", ctx);
    out.push_str("<div class=\"sw-hero-copy\">");
    let heading = if ctx.is_first { "h1" } else { "h2" };
    out.push_str(&format!("<{heading}>{}</{heading}>", escape_text(title)));
    if !subtitle.is_empty() {
        out.push_str(&format!(
            "<p class=\"sw-subtitle\">{}</p>",
            escape_text(subtitle)
        ));
    }
    if !cta_label.is_empty() {
        out.push_str(&format!(
            "<a class=\"sw-cta\" href=\"{}\">{}</a>",
            escape_attr(cta_href),
            escape_text(cta_label)
        ));
    }
    out.push_str("</div>");
    if !image.is_empty() {
        out.push_str(&format!(
            "<div class=\"sw-hero-media\"><img src=\"{}\" alt=\"\" loading=\"eager\"></div>",
            escape_attr(image)
        ));
    }
    out.push_str("</section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx_first() -> SectionContext {
        SectionContext {
            editable: false,
            index: 0,
            is_first: true,
            is_last: false,
        }
    }

    fn props(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn first_hero_uses_h1() {
        let html = hero_centered(&props(json!({"title": "Hi"})), &ctx_first());
        assert!(html.contains("<h1>Hi</h1>"));

        let later = SectionContext {
            is_first: false,
            index: 2,
            ..ctx_first()
        };
        let html = hero_centered(&props(json!({"title": "Hi"})), &later);
        assert!(html.contains("<h2>Hi</h2>"));
    }

    #[test]
    fn missing_props_fall_back_to_defaults() {
        let html = hero_centered(&props(json!({})), &ctx_first());
        assert!(html.contains("Welcome"));
        assert!(!html.contains("sw-subtitle"));
        assert!(!html.contains("sw-cta"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn interpolated_values_are_escaped() {
        let html = hero_split(
            &props(json!({
                "title": "<script>alert(1)</script>",
                "imageUrl": "https://x/a.jpg\" onerror=\"pwn()"
            })),
            &ctx_first(),
        );
        assert!(!html.contains("<script>"));
        assert!(!html.contains("onerror=\"pwn"));
    }

    #[test]
    fn split_hero_renders_media_column() {
        let html = hero_split(
            &props(json!({"imageUrl": "https://x/a.jpg", "ctaLabel": "Book"})),
            &ctx_first(),
        );
        assert!(html.contains("sw-hero-media"));
        assert!(html.contains("Book"));
    }
}
