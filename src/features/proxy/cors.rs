use axum::http::{HeaderMap, HeaderValue, header};

pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, x-api-key, anthropic-version";
pub const PREFLIGHT_MAX_AGE: &str = "86400";

/// Builds the `Access-Control-Allow-*` headers for one response.
///
/// With no allow-list every origin gets `*`. With an allow-list the caller's
/// origin is echoed when listed and the first entry is sent otherwise.
pub fn cors_headers(allowed_origins: &[String], request_headers: &HeaderMap) -> HeaderMap {
    let origin = request_headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let allow_origin = match allowed_origins.first() {
        None => "*",
        Some(first) => allowed_origins
            .iter()
            .find(|o| o.as_str() == origin)
            .unwrap_or(first)
            .as_str(),
    };

    let mut headers = HeaderMap::new();
    // Allow-list entries are validated when the config is parsed
    match HeaderValue::from_str(allow_origin) {
        Ok(value) => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
        Err(_) => log::warn!("Unsendable allowed origin {:?}, no Allow-Origin sent", allow_origin),
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers
}
