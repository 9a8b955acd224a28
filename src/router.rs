use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::db::PostsStorage;
use crate::handlers::{pages, posts};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct ScribeState {
    pub storage: PostsStorage,
}

impl ScribeState {
    pub fn new(storage: PostsStorage) -> Self {
        Self { storage }
    }
}

/// Build the axum router: JSON CRUD routes, the embedded UI page, and the
/// cross-cutting layers (permissive CORS so the page also works when served
/// from another origin, plus per-request tracing).
pub fn scribe_router(state: ScribeState) -> Router {
    Router::new()
        .route("/", get(posts::root))
        .route("/app", get(pages::app_page))
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/{id}",
            get(posts::get_post).delete(posts::delete_post),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
