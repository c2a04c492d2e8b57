use serde_json::{Map, Value};

use siteweaver_core::site::patch::GALLERY_SLOT_COUNT;

use crate::html::{escape_attr, escape_text, prop_str};
use crate::registry::SectionContext;

use super::section_open;

/// Image gallery over the numbered slots (`image1` … `imageN`, the same
/// slots the patcher fills); empty slots are simply absent from the markup.
pub fn gallery(props: &Map<String, Value>, ctx: &SectionContext) -> String {
    let title = prop_str(props, "title", "Gallery");

    let mut out = section_open("gallery", ctx);
    out.push_str(&format!("<h2>{}</h2>", escape_text(title)));
    out.push_str("<div class=\"sw-gallery-grid\">");
    for i in 1..=GALLERY_SLOT_COUNT {
        let image = prop_str(props, &format!("image{i}"), "");
        if image.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "<figure><img src=\"{}\" alt=\"\" loading=\"lazy\"></figure>",
            escape_attr(image)
        ));
    }
    out.push_str("</div></section>");
    out
}
