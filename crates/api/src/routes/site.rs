//! Public site serving: the request → page pipeline.
//!
//! Resolve the hostname/path to a site, load its record, lazily migrate
//! legacy documents, backfill generated images, project the theme, render.
//! Rendering never waits on the migration persist — that write is spawned
//! fire-and-forget and the next request simply retries if it failed.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use axum_extra::extract::Host;
use chrono::Utc;
use uuid::Uuid;

use siteweaver_core::domain::{resolve_route, DomainRoute};
use siteweaver_core::events::types::{MigrationEvent, SiteEvent};
use siteweaver_core::site::migrate::{migrate_blocks, MigratedSite};
use siteweaver_core::site::model::{Section, SiteRecord, Theme};
use siteweaver_core::site::patch::{needs_patch, patch};
use siteweaver_core::site::validate::validate_sections;
use siteweaver_render::fonts::FontLoader;
use siteweaver_render::page::render_document;
use siteweaver_render::style_root::StyleRoot;

use crate::error::{site_not_found, ApiError};
use crate::state::AppState;
use crate::store;

/// Public site routes. `/` resolves by hostname; the path route carries an
/// explicit subdomain (the platform edge rewrites subdomain hosts into it),
/// which takes precedence over hostname inspection.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(serve_root))
        .route("/sites/{subdomain}", get(serve_subdomain))
}

async fn serve_root(State(state): State<AppState>, Host(hostname): Host) -> Response {
    serve_site(state, hostname, None).await
}

async fn serve_subdomain(
    State(state): State<AppState>,
    Host(hostname): Host,
    Path(subdomain): Path<String>,
) -> Response {
    serve_site(state, hostname, Some(subdomain)).await
}

async fn serve_site(state: AppState, hostname: String, path_subdomain: Option<String>) -> Response {
    let route = resolve_route(
        &hostname,
        path_subdomain.as_deref(),
        &state.config().platform_hostnames,
    );

    let fetched = match &route {
        DomainRoute::Subdomain(subdomain) => {
            store::fetch_by_subdomain(state.pool(), subdomain).await
        }
        DomainRoute::CustomDomain(domain) => {
            store::fetch_by_custom_domain(state.pool(), domain).await
        }
        DomainRoute::None => Ok(None),
    };

    let row = match fetched {
        Ok(Some(row)) => row,
        Ok(None) => {
            tracing::debug!(%hostname, ?route, "no site resolved");
            return site_not_found();
        }
        Err(error) => return ApiError::Database(error).into_response(),
    };

    let record = row.into_record();
    let (sections, theme, to_persist) =
        resolve_renderable(&record, state.config().embedded_image_ceiling);

    if let Some(migrated) = to_persist {
        spawn_migration_persist(state.clone(), record.id, record.subdomain.clone(), migrated);
    }

    let style_root = StyleRoot::new();
    let fonts = FontLoader::new();
    let injection = style_root.apply(&theme, &fonts);
    let html = render_document(
        &record.name,
        &sections,
        state.registry(),
        &style_root,
        injection.font_links(),
        false,
    );
    drop(injection);

    Html(html).into_response()
}

/// Pick what to render for a record: canonical sections when present,
/// otherwise a lazy migration of the legacy document (returned separately
/// so the caller can persist it), then image/text backfill when the
/// generated bundle can still fill gaps. The persisted migration is the
/// pre-patch result; patching is recomputed per request.
fn resolve_renderable(
    record: &SiteRecord,
    ceiling: usize,
) -> (Vec<Section>, Theme, Option<MigratedSite>) {
    let (mut sections, theme, to_persist) = if record.has_canonical_sections() {
        (
            record.sections.clone().unwrap_or_default(),
            record.theme.clone().unwrap_or_default(),
            None,
        )
    } else {
        match migrate_blocks(record.legacy_blocks.as_ref(), record.legacy_theme.as_ref()) {
            Some(migrated) => (
                migrated.sections.clone(),
                migrated.theme.clone(),
                Some(migrated),
            ),
            None => (Vec::new(), record.theme.clone().unwrap_or_default(), None),
        }
    };

    if let Some(content) = &record.generated_content {
        if needs_patch(&sections, content, ceiling) {
            sections = patch(&sections, content, ceiling);
        }
    }

    (sections, theme, to_persist)
}

/// Fire-and-forget persistence of a migration result. Failure is logged
/// and the site keeps rendering from legacy data; the next request retries.
fn spawn_migration_persist(
    state: AppState,
    site_id: Uuid,
    subdomain: String,
    migrated: MigratedSite,
) {
    if let Err(error) = validate_sections(&migrated.sections) {
        tracing::error!(%site_id, %error, "refusing to persist malformed sections");
        return;
    }
    tokio::spawn(async move {
        match store::persist_migration(state.pool(), site_id, &migrated).await {
            Ok(()) => {
                tracing::info!(%site_id, sections = migrated.sections.len(), "persisted migrated sections");
                let _ = state
                    .event_bus()
                    .publish(SiteEvent::SectionsMigrated(MigrationEvent {
                        site_id: site_id.to_string(),
                        subdomain,
                        section_count: migrated.sections.len(),
                        timestamp: Utc::now(),
                    }));
            }
            Err(error) => {
                tracing::error!(%site_id, %error, "failed to persist migrated sections");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use siteweaver_core::content::DEFAULT_EMBEDDED_IMAGE_CEILING as CEILING;

    fn record(value: serde_json::Value) -> SiteRecord {
        let mut base = json!({
            "id": "7d9f4a2e-1b3c-4d5e-8f90-a1b2c3d4e5f6",
            "name": "Corner Bakery",
            "subdomain": "corner-bakery",
            "_createdAt": "2026-01-01T00:00:00Z",
            "_updatedAt": "2026-01-01T00:00:00Z",
        });
        base.as_object_mut()
            .unwrap()
            .extend(value.as_object().cloned().unwrap_or_default());
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn canonical_sections_skip_migration() {
        let record = record(json!({
            "sections": [{"id": "s1", "type": "hero-centered", "locked": true}],
            "legacyBlocks": [{"_type": "Footer"}],
        }));

        let (sections, _, to_persist) = resolve_renderable(&record, CEILING);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_type, "hero-centered");
        assert!(to_persist.is_none());
    }

    #[test]
    fn legacy_records_migrate_and_flag_a_persist() {
        let record = record(json!({
            "legacyBlocks": [
                {"_type": "HeroCentered", "title": "Hello", "inBuilder": true},
                {"_type": "Footer"}
            ],
            "legacyTheme": {"colors": {"primary": ["#C65D3E", "#7A2E1D"]}},
        }));

        let (sections, theme, to_persist) = resolve_renderable(&record, CEILING);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].locked);
        assert_eq!(theme.colors.get("primary").unwrap(), "#C65D3E");
        assert_eq!(to_persist.unwrap().sections.len(), 2);
    }

    #[test]
    fn unmigratable_records_render_empty_without_persisting() {
        let record = record(json!({"legacyBlocks": []}));
        let (sections, _, to_persist) = resolve_renderable(&record, CEILING);
        assert!(sections.is_empty());
        assert!(to_persist.is_none());
    }

    #[test]
    fn generated_images_backfill_after_migration() {
        let record = record(json!({
            "legacyBlocks": [{"_type": "HeroCentered", "title": "Hello"}],
            "generatedContent": {"images": {"heroHome": "https://x/img.jpg"}},
        }));

        let (sections, _, to_persist) = resolve_renderable(&record, CEILING);
        assert_eq!(
            sections[0].props.get("imageUrl"),
            Some(&json!("https://x/img.jpg"))
        );
        // The persisted migration stays pre-patch.
        assert!(!to_persist.unwrap().sections[0].props.contains_key("imageUrl"));
    }

    #[test]
    fn populated_slots_survive_backfill() {
        let record = record(json!({
            "sections": [{
                "id": "s1", "type": "hero-centered", "locked": true,
                "props": {"imageUrl": "https://manual/edit.png"}
            }],
            "generatedContent": {"images": {"heroHome": "https://x/img.jpg"}},
        }));

        let (sections, _, _) = resolve_renderable(&record, CEILING);
        assert_eq!(
            sections[0].props.get("imageUrl"),
            Some(&json!("https://manual/edit.png"))
        );
    }
}
