//! Site persistence: read a site by key, write back a migration result.
//!
//! JSONB columns are decoded tolerantly — a malformed column degrades to
//! "absent" with a warning instead of failing the request, so legacy data
//! that predates the canonical shape still renders.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use siteweaver_core::content::GeneratedContent;
use siteweaver_core::site::migrate::MigratedSite;
use siteweaver_core::site::model::{Section, SiteRecord, Theme};

/// Database row for the `sites` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SiteRow {
    pub id: Uuid,
    pub name: String,
    pub subdomain: String,
    pub custom_domain: Option<String>,
    pub domain_verified: bool,
    pub sections: Option<Value>,
    pub theme: Option<Value>,
    pub legacy_blocks: Option<Value>,
    pub legacy_theme: Option<Value>,
    pub generated_content: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const SELECT_SITE: &str = "SELECT id, name, subdomain, custom_domain, domain_verified, \
     sections, theme, legacy_blocks, legacy_theme, generated_content, \
     created_at, updated_at FROM sites";

/// Fetch a site by its platform subdomain.
pub async fn fetch_by_subdomain(
    pool: &PgPool,
    subdomain: &str,
) -> Result<Option<SiteRow>, sqlx::Error> {
    sqlx::query_as::<_, SiteRow>(&format!("{SELECT_SITE} WHERE subdomain = $1"))
        .bind(subdomain)
        .fetch_optional(pool)
        .await
}

/// Fetch a site by custom domain. Only verified domains resolve — the
/// verification collaborator owns the flag; we just read it.
pub async fn fetch_by_custom_domain(
    pool: &PgPool,
    hostname: &str,
) -> Result<Option<SiteRow>, sqlx::Error> {
    sqlx::query_as::<_, SiteRow>(&format!(
        "{SELECT_SITE} WHERE custom_domain = $1 AND domain_verified"
    ))
    .bind(hostname)
    .fetch_optional(pool)
    .await
}

/// Persist a migration result onto its site. Called fire-and-forget after
/// the response is already rendering from the in-memory copy.
pub async fn persist_migration(
    pool: &PgPool,
    site_id: Uuid,
    migrated: &MigratedSite,
) -> Result<(), sqlx::Error> {
    let sections =
        serde_json::to_value(&migrated.sections).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
    let theme =
        serde_json::to_value(&migrated.theme).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

    sqlx::query("UPDATE sites SET sections = $2, theme = $3, updated_at = now() WHERE id = $1")
        .bind(site_id)
        .bind(sections)
        .bind(theme)
        .execute(pool)
        .await?;
    Ok(())
}

impl SiteRow {
    /// Decode the JSONB columns into the domain aggregate.
    pub fn into_record(self) -> SiteRecord {
        let site_id = self.id;
        SiteRecord {
            id: self.id,
            name: self.name,
            subdomain: self.subdomain,
            custom_domain: self.custom_domain,
            sections: self
                .sections
                .and_then(|v| decode_column::<Vec<Section>>(site_id, "sections", v)),
            theme: self
                .theme
                .and_then(|v| decode_column::<Theme>(site_id, "theme", v)),
            legacy_blocks: self.legacy_blocks,
            legacy_theme: self.legacy_theme,
            generated_content: self
                .generated_content
                .and_then(|v| decode_column::<GeneratedContent>(site_id, "generated_content", v)),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn decode_column<T: serde::de::DeserializeOwned>(
    site_id: Uuid,
    column: &str,
    value: Value,
) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(error) => {
            tracing::warn!(%site_id, column, %error, "malformed column, treating as absent");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(sections: Option<Value>, theme: Option<Value>) -> SiteRow {
        SiteRow {
            id: Uuid::nil(),
            name: "Corner Bakery".into(),
            subdomain: "corner-bakery".into(),
            custom_domain: None,
            domain_verified: false,
            sections,
            theme,
            legacy_blocks: Some(json!([{"_type": "HeroCentered"}])),
            legacy_theme: None,
            generated_content: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn decodes_canonical_columns() {
        let record = row(
            Some(json!([{"id": "s1", "type": "hero-centered", "locked": true}])),
            Some(json!({"colors": {"primary": "#C65D3E"}})),
        )
        .into_record();

        let sections = record.sections.unwrap();
        assert_eq!(sections[0].section_type, "hero-centered");
        assert!(record.theme.unwrap().colors.contains_key("primary"));
        assert!(record.legacy_blocks.is_some());
    }

    #[test]
    fn malformed_columns_degrade_to_absent() {
        let record = row(Some(json!("definitely not a list")), Some(json!(42))).into_record();
        assert!(record.sections.is_none());
        assert!(record.theme.is_none());
        // Migration remains possible off the untouched legacy column.
        assert!(record.legacy_blocks.is_some());
    }

    #[test]
    fn null_columns_are_absent_not_errors() {
        let record = row(Some(Value::Null), None).into_record();
        assert!(record.sections.is_none());
        assert!(!record.has_canonical_sections());
    }
}
