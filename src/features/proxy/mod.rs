pub mod cors;
pub mod error_conversions;
pub mod error_responses;

pub use cors::cors_headers;

/// Joins the upstream base with the part of the request URI after `/api`.
///
/// `/api/anthropic/v1/messages?x=1` becomes `<base>/anthropic/v1/messages?x=1`.
pub fn upstream_target(base: &str, path_and_query: &str) -> String {
    let rest = path_and_query.strip_prefix("/api").unwrap_or(path_and_query);
    format!("{}{}", base.trim_end_matches('/'), rest)
}
