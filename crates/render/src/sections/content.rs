use serde_json::{Map, Value};

use crate::html::{escape_attr, escape_text, prop_items, prop_str};
use crate::registry::SectionContext;

use super::section_open;

/// About block: heading, running copy, optional portrait image.
pub fn about(props: &Map<String, Value>, ctx: &SectionContext) -> String {
    let title = prop_str(props, "title", "About Us");
    let body = prop_str(props, "body", "");
    let image = prop_str(props, "imageUrl", "");

    let mut out = section_open("about", ctx);
    out.push_str(&format!("<h2>{}</h2>", escape_text(title)));
    if !body.is_empty() {
        out.push_str(&format!("<p>{}</p>", escape_text(body)));
    }
    if !image.is_empty() {
        out.push_str(&format!(
            "<img class=\"sw-about-image\" src=\"{}\" alt=\"\" loading=\"lazy\">",
            escape_attr(image)
        ));
    }
    out.push_str("</section>");
    out
}

/// Services grid. Each item is a loose object; name and description are the
/// recognized keys, price is optional.
pub fn services(props: &Map<String, Value>, ctx: &SectionContext) -> String {
    let title = prop_str(props, "title", "Services");
    let image = prop_str(props, "imageUrl", "");

    let mut out = section_open("services", ctx);
    out.push_str(&format!("<h2>{}</h2>", escape_text(title)));
    if !image.is_empty() {
        out.push_str(&format!(
            "<img class=\"sw-services-image\" src=\"{}\" alt=\"\" loading=\"lazy\">",
            escape_attr(image)
        ));
    }
    out.push_str("<ul class=\"sw-services-grid\">");
    for item in prop_items(props, "items") {
        let Some(item) = item.as_object() else { continue };
        let name = prop_str(item, "name", "");
        if name.is_empty() {
            continue;
        }
        out.push_str("<li>");
        out.push_str(&format!("<h3>{}</h3>", escape_text(name)));
        let description = prop_str(item, "description", "");
        if !description.is_empty() {
            out.push_str(&format!("<p>{}</p>", escape_text(description)));
        }
        let price = prop_str(item, "price", "");
        if !price.is_empty() {
            out.push_str(&format!(
                "<span class=\"sw-price\">{}</span>",
                escape_text(price)
            ));
        }
        out.push_str("</li>");
    }
    out.push_str("</ul></section>");
    out
}

/// Statistics band: value/label pairs.
pub fn statistics(props: &Map<String, Value>, ctx: &SectionContext) -> String {
    let mut out = section_open("statistics", ctx);
    out.push_str("<dl class=\"sw-stats\">");
    for item in prop_items(props, "items") {
        let Some(item) = item.as_object() else { continue };
        let value = prop_str(item, "value", "");
        let label = prop_str(item, "label", "");
        if value.is_empty() && label.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "<div><dt>{}</dt><dd>{}</dd></div>",
            escape_text(value),
            escape_text(label)
        ));
    }
    out.push_str("</dl></section>");
    out
}
