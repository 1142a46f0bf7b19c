use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{AllowHeaders, CorsLayer};

/// Allow cross-origin `GET` and `POST` requests from `allowed_origin` only.
pub fn add<S: Clone + Send + Sync + 'static>(
    allowed_origin: HeaderValue,
) -> impl FnOnce(Router<S>) -> Router<S> {
    move |router| {
        router.layer(
            CorsLayer::new()
                .allow_origin(allowed_origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(AllowHeaders::mirror_request()),
        )
    }
}
