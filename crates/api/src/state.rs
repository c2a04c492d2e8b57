use std::sync::Arc;

use siteweaver_core::events::bus::EventBus;
use siteweaver_render::registry::SectionRegistry;
use sqlx::PgPool;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    pool: PgPool,
    config: AppConfig,
    event_bus: EventBus,
    registry: SectionRegistry,
}

impl AppState {
    pub fn new(
        pool: PgPool,
        config: AppConfig,
        event_bus: EventBus,
        registry: SectionRegistry,
    ) -> Self {
        Self {
            inner: Arc::new(InnerState {
                pool,
                config,
                event_bus,
                registry,
            }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.inner.event_bus
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.inner.registry
    }
}
