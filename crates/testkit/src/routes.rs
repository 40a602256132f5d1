use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use common::types::Health;
use models::{Leader, Partner, Resource, Service};
use serde::de::DeserializeOwned;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::auth;
use crate::state::{StubState, Table};

pub mod content;
pub mod tickets;
pub mod upload;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok".into() })
}

fn collection<E>(router: Router<StubState>) -> Router<StubState>
where
    E: Table,
    E::Input: DeserializeOwned,
{
    router
        .route(&format!("/{}", E::PATH), get(content::list::<E>).post(content::create::<E>))
        .route(&format!("/{}/:id", E::PATH), patch(content::update::<E>).delete(content::remove::<E>))
}

/// The REST table under `/api`, with request recording and tracing.
pub fn build_router(state: StubState) -> Router {
    let mut api = Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(auth::login))
        .route("/about", get(content::get_about).put(content::put_about))
        .route("/tickets", get(tickets::list_tickets).post(tickets::create_ticket))
        .route("/upload/:category", post(upload::upload));
    api = collection::<Leader>(api);
    api = collection::<Service>(api);
    api = collection::<Resource>(api);
    api = collection::<Partner>(api);

    // the real backend serves uploads from the origin root as well
    Router::new()
        .route("/upload/:category", post(upload::upload))
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(state.clone(), auth::record_request))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::new().level(Level::WARN)),
        )
        .with_state(state)
}
