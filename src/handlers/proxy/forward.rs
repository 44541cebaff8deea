use axum::{
    body::{Body, Bytes},
    extract::{OriginalUri, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    data::models::{ForwardHeaders, ProxyError, proxy_models::DEFAULT_CONTENT_TYPE},
    features::proxy::{cors_headers, upstream_target},
    server::AppState,
};

/// `POST /api/*`: relays the call to the upstream API and mirrors its answer.
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let cors = cors_headers(&state.config.allowed_origins, &headers);

    match relay(&state, &uri, &headers, body).await {
        Ok(response) => (cors, response).into_response(),
        Err(e) => {
            log::error!("POST {} failed: {}", uri.path(), e);
            (cors, e).into_response()
        }
    }
}

async fn relay(
    state: &AppState,
    uri: &axum::http::Uri,
    headers: &HeaderMap,
    body: Body,
) -> Result<Response, ProxyError> {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let target = upstream_target(&state.config.upstream_base, path_and_query);
    let forwarded = ForwardHeaders::from_request(headers);
    let body: Bytes = axum::body::to_bytes(body, usize::MAX).await?;

    let mut request = state
        .client
        .post(&target)
        .header(header::CONTENT_TYPE, &forwarded.content_type)
        .header("x-api-key", &forwarded.api_key)
        .header("anthropic-version", &forwarded.anthropic_version)
        .timeout(state.config.upstream_timeout);
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
    let data = upstream.bytes().await?;

    if status.is_success() {
        log::info!("POST {} -> {} {}", uri.path(), target, status.as_u16());
    } else {
        log::warn!("POST {} -> {} {} (relayed)", uri.path(), target, status.as_u16());
    }

    Ok((status, [(header::CONTENT_TYPE, content_type)], data).into_response())
}

pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
