//! Theme injection onto the document's style root.
//!
//! Custom properties live on a shared root so every section renders against
//! the same palette, but that root outlives any one site: the authenticated
//! shell and transient public-site previews take turns on it. Injection is
//! therefore a checked-out resource — [`StyleRoot::apply`] returns a guard
//! that records exactly which property names it wrote and removes only
//! those when dropped.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use siteweaver_core::site::model::Theme;

use crate::color::hex_to_hsl;
use crate::fonts::{FontLink, FontLoader};

/// Shared custom-property map standing in for the document root's style.
#[derive(Debug, Clone, Default)]
pub struct StyleRoot {
    props: Arc<Mutex<BTreeMap<String, String>>>,
}

/// Guard over one theme application. Dropping it restores the root:
/// every property this application wrote is removed, and nothing else.
#[must_use = "dropping the injection immediately reverts the theme"]
#[derive(Debug)]
pub struct ThemeInjection {
    root: StyleRoot,
    written: Vec<String>,
    font_links: Vec<FontLink>,
}

impl StyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project a theme onto the root.
    ///
    /// Color roles become `--{role}` holding an HSL triple (non-hex values
    /// pass through unchanged), fonts become `--font-heading`/`--font-body`
    /// with generic fallback chains, and the corner radius becomes
    /// `--radius`. Absent fields skip injection. Font stylesheet links are
    /// collected on the guard, deduplicated by the loader.
    pub fn apply(&self, theme: &Theme, fonts: &FontLoader) -> ThemeInjection {
        let mut written = Vec::new();
        let mut font_links = Vec::new();

        {
            let mut props = self.props.lock().expect("style root lock poisoned");

            for (role, value) in &theme.colors {
                let name = format!("--{role}");
                props.insert(name.clone(), hex_to_hsl(value));
                written.push(name);
            }

            if let Some(heading) = theme.fonts.heading.as_deref() {
                if let Some(link) = fonts.ensure_loaded(heading) {
                    font_links.push(link);
                }
                props.insert("--font-heading".into(), format!("'{heading}', serif"));
                written.push("--font-heading".into());
            }

            if let Some(body) = theme.fonts.body.as_deref() {
                if let Some(link) = fonts.ensure_loaded(body) {
                    font_links.push(link);
                }
                props.insert("--font-body".into(), format!("'{body}', sans-serif"));
                written.push("--font-body".into());
            }

            if let Some(radius) = theme.border_radius.as_deref() {
                props.insert("--radius".into(), radius.to_string());
                written.push("--radius".into());
            }
        }

        tracing::debug!(properties = written.len(), "applied theme to style root");

        ThemeInjection {
            root: self.clone(),
            written,
            font_links,
        }
    }

    /// Current value of a property, if set.
    pub fn get(&self, name: &str) -> Option<String> {
        self.props
            .lock()
            .expect("style root lock poisoned")
            .get(name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.props.lock().expect("style root lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the current property set as a `:root` declaration block.
    pub fn to_css(&self) -> String {
        let props = self.props.lock().expect("style root lock poisoned");
        if props.is_empty() {
            return String::new();
        }
        let mut css = String::from(":root{");
        for (name, value) in props.iter() {
            css.push_str(name);
            css.push(':');
            css.push_str(value);
            css.push(';');
        }
        css.push('}');
        css
    }
}

impl ThemeInjection {
    /// Stylesheet links gathered while applying (first load per family).
    pub fn font_links(&self) -> &[FontLink] {
        &self.font_links
    }

    /// Property names written by this application.
    pub fn written(&self) -> &[String] {
        &self.written
    }
}

impl Drop for ThemeInjection {
    fn drop(&mut self) {
        let mut props = self.root.props.lock().expect("style root lock poisoned");
        for name in self.written.drain(..) {
            props.remove(&name);
        }
    }
}
