use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    clear_all_handler, fallback_handler, list_all_handler, list_private_handler,
    list_public_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the router. Methods a route does not handle fall through to
    /// [`fallback_handler`] instead of answering `405`.
    ///
    /// `/shorten` has no route of its own: `GET` and `DELETE` on it behave as
    /// on any other `/{short_code}`, and a `POST` with extra trailing slashes
    /// reaches [`shorten_handler`] through the fallback.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(list_all_handler).fallback(fallback_handler))
            .route(
                "/{short_code}",
                get(redirect_handler)
                    .post(shorten_handler)
                    .delete(clear_all_handler)
                    .fallback(fallback_handler),
            )
            .route(
                "/public/{short_code}",
                get(list_public_handler).fallback(fallback_handler),
            )
            .route(
                "/private/{short_code}",
                get(list_private_handler).fallback(fallback_handler),
            )
            .fallback(fallback_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
