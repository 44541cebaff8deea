use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::{
    features::proxy::{cors::PREFLIGHT_MAX_AGE, cors_headers},
    server::AppState,
};

// OPTIONS on any path
pub async fn preflight(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let mut cors = cors_headers(&state.config.allowed_origins, &headers);
    cors.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );
    (StatusCode::NO_CONTENT, cors)
}
