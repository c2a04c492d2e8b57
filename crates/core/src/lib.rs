//! Domain model and pure transforms for the site resolution & rendering
//! engine: canonical sections and themes, legacy document migration,
//! generated-content patching, and request-to-site domain resolution.
//!
//! Everything here is a synchronous transform over in-memory data. The only
//! async surface is the [`events`] bus, which carries notifications about
//! work other crates performed (e.g. a migration persist).

pub mod content;
pub mod domain;
pub mod events;
pub mod site;
