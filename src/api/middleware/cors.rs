//! Cross-origin resource sharing policy.

use axum::http::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer applied to every route.
///
/// Any origin is accepted. The origin is mirrored back since a `*` origin
/// cannot be combined with credentials.
///
/// # Allowed
///
/// - Headers: `Content-Type`, `Authorization`
/// - Methods: `GET`, `POST`, `PATCH`, `DELETE`, `OPTIONS`
/// - Credentials: yes
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_credentials(true)
}
