use serde_json::{Map, Value};

use crate::html::{escape_attr, escape_text, prop_items, prop_str};
use crate::registry::SectionContext;

use super::section_open;

/// FAQ accordion: question/answer pairs via native disclosure elements.
pub fn faq(props: &Map<String, Value>, ctx: &SectionContext) -> String {
    let title = prop_str(props, "title", "Frequently Asked Questions");

    let mut out = section_open("faq", ctx);
    out.push_str(&format!("<h2>{}</h2>", escape_text(title)));
    for item in prop_items(props, "items") {
        let Some(item) = item.as_object() else { continue };
        let question = prop_str(item, "question", "");
        if question.is_empty() {
            continue;
        }
        let answer = prop_str(item, "answer", "");
        out.push_str(&format!(
            "<details><summary>{}</summary><p>{}</p></details>",
            escape_text(question),
            escape_text(answer)
        ));
    }
    out.push_str("</section>");
    out
}

/// Contact block: whichever of email/phone/address are present.
pub fn contact(props: &Map<String, Value>, ctx: &SectionContext) -> String {
    let title = prop_str(props, "title", "Get in Touch");
    let email = prop_str(props, "email", "");
    let phone = prop_str(props, "phone", "");
    let address = prop_str(props, "address", "");

    let mut out = section_open("contact", ctx);
    out.push_str(&format!("<h2>{}</h2>", escape_text(title)));
    out.push_str("<address class=\"sw-contact\">");
    if !email.is_empty() {
        out.push_str(&format!(
            "<a href=\"mailto:{}\">{}</a>",
            escape_attr(email),
            escape_text(email)
        ));
    }
    if !phone.is_empty() {
        out.push_str(&format!(
            "<a href=\"tel:{}\">{}</a>",
            escape_attr(phone),
            escape_text(phone)
        ));
    }
    if !address.is_empty() {
        out.push_str(&format!("<span>{}</span>", escape_text(address)));
    }
    out.push_str("</address></section>");
    out
}

/// Narrow call-to-action band between content sections.
pub fn cta_banner(props: &Map<String, Value>, ctx: &SectionContext) -> String {
    let title = prop_str(props, "title", "Ready to get started?");
    let cta_label = prop_str(props, "ctaLabel", "Contact us");
    let cta_href = prop_str(props, "ctaHref", "#contact");

    let mut out = section_open("cta-banner", ctx);
    out.push_str(&format!("<h2>{}</h2>", escape_text(title)));
    out.push_str(&format!(
        "<a class=\"sw-cta\" href=\"{}\">{}</a>",
        escape_attr(cta_href),
        escape_text(cta_label)
    ));
    out.push_str("</section>");
    out
}

/// Site footer: business name, tagline, and a fine-print line.
pub fn footer(props: &Map<String, Value>, ctx: &SectionContext) -> String {
    let name = prop_str(props, "businessName", "");
    let tagline = prop_str(props, "tagline", "");
    let fine_print = prop_str(props, "finePrint", "");

    let mut out = section_open("footer", ctx);
    if !name.is_empty() {
        out.push_str(&format!(
            "<span class=\"sw-footer-name\">{}</span>",
            escape_text(name)
        ));
    }
    if !tagline.is_empty() {
        out.push_str(&format!("<p>{}</p>", escape_text(tagline)));
    }
    if !fine_print.is_empty() {
        out.push_str(&format!("<small>{}</small>", escape_text(fine_print)));
    }
    out.push_str("</section>");
    out
}
