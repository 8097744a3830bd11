//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the admin JSON API and stitches it with Leptos SSR
//! rendering under a single Axum router. Leptos assets are served from the
//! site root's `/pkg` directory and static files from the site root itself.

pub mod roles;


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const ROLES_PAGE: &str = "/admin/roles";

/// JSON API routes plus the small redirects around the admin app.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_root_to_roles))
        .route("/api/application/roles", get(roles::list_roles).post(roles::create_role))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn redirect_root_to_roles() -> Redirect {
    Redirect::temporary(ROLES_PAGE)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// API routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(panel_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || panel_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
