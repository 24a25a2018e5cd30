//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, dispatch and access logging.

use crate::config::AppState;
use crate::handler::sitemap;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::header::{HeaderName, REFERER, USER_AGENT};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: Option<SocketAddr>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = route_request(req.method(), req.uri().path(), &state).await;

    if state.config.logging.access_log {
        log_access(&req, &response, &state, remote_addr, started);
    }

    Ok(response)
}

/// Route request based on method and path
async fn route_request(method: &Method, path: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    // 1. Check HTTP method
    let is_head = match *method {
        Method::GET => false,
        Method::HEAD => true,
        Method::OPTIONS => return http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            return http::build_405_response();
        }
    };

    // 2. Health check endpoints
    let health = &state.config.health;
    if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        return http::build_health_response("ok");
    }

    // 3. Sitemap
    if path == state.config.sitemap.route {
        return sitemap::serve_sitemap(state, is_head).await;
    }

    http::build_404_response()
}

fn log_access<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    state: &AppState,
    remote_addr: Option<SocketAddr>,
    started: Instant,
) {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        remote_addr,
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
        .unwrap_or(usize::MAX);
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    logger::log_access(&entry, &state.config.logging.access_log_format);
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
