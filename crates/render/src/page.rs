//! Full-page assembly: document shell around the rendered section list.

use siteweaver_core::site::model::Section;

use crate::fonts::FontLink;
use crate::html::escape_text;
use crate::registry::SectionRegistry;
use crate::style_root::StyleRoot;

/// Base stylesheet shipped with every published page. Everything visual
/// routes through the injected custom properties, with fallbacks for sites
/// whose theme omits a role.
const BASE_CSS: &str = "\
*{box-sizing:border-box;margin:0}\
body{font-family:var(--font-body,system-ui,sans-serif);color:hsl(var(--foreground,222 15% 15%));background:hsl(var(--background,0 0% 100%))}\
h1,h2,h3{font-family:var(--font-heading,var(--font-body,serif))}\
.sw-section{padding:4rem 1.5rem;max-width:72rem;margin:0 auto}\
.sw-cta{display:inline-block;padding:.75rem 1.5rem;border-radius:var(--radius,.375rem);background:hsl(var(--primary,222 47% 31%));color:hsl(var(--background,0 0% 100%));text-decoration:none}\
.sw-section img{max-width:100%;border-radius:var(--radius,.375rem)}\
.sw-gallery-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(14rem,1fr));gap:1rem}\
.sw-services-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1.5rem;list-style:none;padding:0}\
.sw-stats{display:flex;flex-wrap:wrap;gap:2.5rem}\
.sw-hero-split{display:grid;grid-template-columns:1fr 1fr;gap:2rem;align-items:center}\
";

/// Assemble the complete HTML document for a site.
///
/// The head carries the deduplicated font links and a `:root` snapshot of
/// the style root taken while the theme injection is live; the body is the
/// ordered section list.
pub fn render_document(
    title: &str,
    sections: &[Section],
    registry: &SectionRegistry,
    style_root: &StyleRoot,
    font_links: &[FontLink],
    editable: bool,
) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html><html lang=\"en\"><head>");
    out.push_str("<meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    out.push_str(&format!("<title>{}</title>", escape_text(title)));
    if !font_links.is_empty() {
        out.push_str("<link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>");
        for link in font_links {
            out.push_str(&format!(
                "<link id=\"{}\" rel=\"stylesheet\" href=\"{}\">",
                link.id, link.href
            ));
        }
    }
    out.push_str("<style>");
    out.push_str(&style_root.to_css());
    out.push_str(BASE_CSS);
    out.push_str("</style>");
    out.push_str("</head><body>");
    out.push_str(&registry.render_page(sections, editable));
    out.push_str("</body></html>");
    out
}
