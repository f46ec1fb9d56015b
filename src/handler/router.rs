//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body size
//! check, route dispatch, common headers and access logging.

use crate::config::AppState;
use crate::handler::{api, assets};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::header::{HeaderMap, CONTENT_LENGTH, REFERER, USER_AGENT};
use hyper::{Method, Request, Response, StatusCode, Uri, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let (parts, _body) = req.into_parts();

    let response = dispatch(&parts.method, &parts.uri, &parts.headers, &state).await;

    let logging = &state.config.logging;
    if logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            parts.method.to_string(),
            parts.uri.path().to_string(),
        );
        entry.query = parts.uri.query().map(ToString::to_string);
        entry.http_version = version_label(parts.version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.referer = header_string(&parts.headers, REFERER);
        entry.user_agent = header_string(&parts.headers, USER_AGENT);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &logging.access_log_format);
    }

    Ok(response)
}

/// Produce the complete response for one request, common headers included
pub async fn dispatch(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let http_config = &state.config.http;

    let mut response = match check_body_size(headers, http_config.max_body_size) {
        Some(resp) => resp,
        None => route_request(method, uri, state).await,
    };

    if http_config.enable_cors {
        http::apply_cors(&mut response);
    }
    http::apply_server_name(&mut response, &http_config.server_name);
    response
}

/// Route request based on method and path
async fn route_request(method: &Method, uri: &Uri, state: &AppState) -> Response<Full<Bytes>> {
    match *method {
        Method::OPTIONS => return http::build_options_response(),
        Method::GET | Method::HEAD | Method::POST => {}
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            return http::build_405_response();
        }
    }

    let query = uri.query().unwrap_or_default();
    match uri.path() {
        "/" | "/index.html" => assets::serve_index(&state.config.assets, *method == Method::HEAD).await,
        "/api/compare" => match api::compare(query, state).await {
            Ok(payload) => http::build_json_response(StatusCode::OK, &payload),
            Err(e) => e.into_response(),
        },
        "/api/product" => match api::lookup(query, state).await {
            Ok(payload) => http::build_json_response(StatusCode::OK, &payload),
            Err(e) => e.into_response(),
        },
        _ => http::build_404_response(),
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = headers.get(CONTENT_LENGTH)?;
    let Ok(size_str) = content_length.to_str() else {
        logger::log_warning("Content-Length header contains non-ASCII characters");
        return None;
    };
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Ok(_) => None,
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
    }
}

fn header_string(headers: &HeaderMap, name: hyper::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
