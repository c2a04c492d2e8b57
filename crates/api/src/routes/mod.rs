pub mod health;
pub mod listen;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(listen::routes())
        .merge(site::routes())
        .with_state(state)
}
