//! Router construction.
//!
//! The full route table lives in [`build_router`]; the guarded routes get the
//! authorization middleware through `route_layer`, everything else is public.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{self, accounts, transfer},
    middleware::auth::auth_middleware,
    services::token_service::TokenService,
    storage::Storage,
};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState<S> {
    pub storage: S,
    pub tokens: TokenService,
}

impl<S: Storage> AppState<S> {
    pub fn new(storage: S, tokens: TokenService) -> Self {
        Self { storage, tokens }
    }
}

/// Build the complete router.
///
/// | Method | Path | Token |
/// |---|---|---|
/// | GET, POST | `/account` | no |
/// | GET, DELETE | `/account/{id}` | yes |
/// | POST | `/transfer` | no |
///
/// Any other method on these paths is answered by
/// [`handlers::method_not_allowed`].
pub fn build_router<S: Storage>(state: AppState<S>) -> Router {
    let guarded_routes = Router::new()
        .route(
            "/account/{id}",
            get(accounts::get_account::<S>).delete(accounts::delete_account::<S>),
        )
        .route_layer(from_fn_with_state(state.tokens.clone(), auth_middleware));

    Router::new()
        .route(
            "/account",
            get(accounts::list_accounts::<S>).post(accounts::create_account::<S>),
        )
        .route("/transfer", post(transfer::create_transfer))
        .merge(guarded_routes)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
