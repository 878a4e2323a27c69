//! Pass-through relay to the eBird API.
//!
//! Adds the `X-eBirdApiToken` header and otherwise forwards the path and raw
//! query untouched. No retries, caching, or body rewriting on success.

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::{json, Value};

use super::AppState;
use crate::middleware::RequestId;

pub const TOKEN_HEADER: &str = "X-eBirdApiToken";

const INTERNAL_ERROR: &str = "Internal server error";

pub(super) async fn relay(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    if method != Method::GET {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, json!("Method Not Allowed"));
    }

    let url = upstream_url(&state.config.upstream_base_url, &path, query.as_deref());
    tracing::info!(request_id = %req_id.0, %path, "proxying request to eBird");

    let upstream = match state
        .http
        .get(&url)
        .header(TOKEN_HEADER, &state.config.ebird_api_key)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "eBird request failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, json!(INTERNAL_ERROR));
        }
    };

    let status = upstream.status();
    let body = match upstream.bytes().await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "failed reading eBird response");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, json!(INTERNAL_ERROR));
        }
    };

    if status.is_success() {
        return (status, [(header::CONTENT_TYPE, "application/json")], body).into_response();
    }

    tracing::warn!(
        request_id = %req_id.0,
        status = status.as_u16(),
        %path,
        "eBird returned an error status"
    );
    error_response(status, upstream_error_detail(&body))
}

/// `{base}/{path}` with the caller's query string appended verbatim.
fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// The upstream body as JSON if it parses, else as text; empty bodies fall
/// back to a generic message.
fn upstream_error_detail(body: &Bytes) -> Value {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        return value;
    }
    let text = String::from_utf8_lossy(body);
    if text.trim().is_empty() {
        json!(INTERNAL_ERROR)
    } else {
        Value::String(text.into_owned())
    }
}

fn error_response(status: StatusCode, detail: Value) -> Response {
    (status, Json(json!({ "error": detail }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_url_appends_path_and_raw_query() {
        assert_eq!(
            upstream_url(
                "https://api.ebird.org/v2",
                "data/obs/geo/recent",
                Some("lat=40.7&lng=-74&dist=10")
            ),
            "https://api.ebird.org/v2/data/obs/geo/recent?lat=40.7&lng=-74&dist=10"
        );
    }

    #[test]
    fn upstream_url_without_query_has_no_question_mark() {
        assert_eq!(
            upstream_url("https://api.ebird.org/v2/", "/ref/taxonomy/ebird", None),
            "https://api.ebird.org/v2/ref/taxonomy/ebird"
        );
        assert_eq!(
            upstream_url("https://api.ebird.org/v2", "ref/taxonomy/ebird", Some("")),
            "https://api.ebird.org/v2/ref/taxonomy/ebird"
        );
    }

    #[test]
    fn error_detail_prefers_json_then_text() {
        let json_body = Bytes::from_static(br#"{"errors":[{"status":"400"}]}"#);
        assert_eq!(
            upstream_error_detail(&json_body),
            json!({"errors": [{"status": "400"}]})
        );

        let text_body = Bytes::from_static(b"Bad gateway");
        assert_eq!(upstream_error_detail(&text_body), json!("Bad gateway"));

        assert_eq!(
            upstream_error_detail(&Bytes::new()),
            json!("Internal server error")
        );
    }
}
