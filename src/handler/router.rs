//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body
//! size limit, exact-path route matching, and access logging.

use crate::config::AppState;
use crate::handler::{pages, static_files};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Route resolved from the request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Projects,
    Login,
    Logout,
    Favicon,
    /// `/images/*` static asset fallback
    Asset,
    NotFound,
}

/// Map a request path to its route by exact match
///
/// Only the asset fallback is a prefix match; everything else must
/// match exactly. No path parameters, no middleware chain.
pub fn match_route(path: &str) -> Route {
    match path {
        "/" | "/dashboard" => Route::Dashboard,
        "/projects" => Route::Projects,
        "/login" => Route::Login,
        "/logout" => Route::Logout,
        "/favicon.ico" | "/favicon.svg" => Route::Favicon,
        p if p.starts_with("/images/") => Route::Asset,
        _ => Route::NotFound,
    }
}

/// Methods accepted on a route, for the `Allow` header
const fn allowed_methods(route: Route) -> &'static str {
    match route {
        Route::Login => "GET, HEAD, POST, OPTIONS",
        _ => "GET, HEAD, OPTIONS",
    }
}

fn method_allowed(route: Route, method: &Method) -> bool {
    match *method {
        Method::GET | Method::HEAD => true,
        Method::POST => route == Route::Login,
        _ => false,
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let is_head = method == Method::HEAD;

    let route = match_route(&path);

    // 1. Method validation
    if method == Method::OPTIONS {
        return Ok(http::build_options_response(
            state.config.http.enable_cors,
            allowed_methods(route),
        ));
    }
    if !method_allowed(route, &method) {
        logger::log_warning(&format!("Method not allowed: {method} {path}"));
        return Ok(http::build_405_response(allowed_methods(route)));
    }

    // 2. Body size limit
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        method.to_string(),
        path.clone(),
    );
    entry.query.clone_from(&query);
    entry.referer = header_value(&req, "referer");
    entry.user_agent = header_value(&req, "user-agent");
    let if_none_match = header_value(&req, "if-none-match");

    // 3. Dispatch
    let static_root = state.config.static_files.root.clone();
    let response = match route {
        Route::Dashboard => pages::dashboard(&state, is_head),
        Route::Projects => pages::projects(&state, is_head),
        Route::Login if method == Method::POST => pages::login_submit(req, &state).await,
        Route::Login => pages::login_form(query.as_deref(), is_head),
        Route::Logout => pages::logout(),
        Route::Favicon => {
            static_files::serve_favicon(&static_root, if_none_match.as_deref(), is_head).await
        }
        Route::Asset => {
            static_files::serve_asset(&static_root, &path, if_none_match.as_deref(), is_head).await
        }
        Route::NotFound => http::build_404_response(),
    };

    // 4. Access log
    if state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed)
    {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Validate Content-Length and return 413 when the limit is exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    let size_str = content_length.to_str().ok()?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
        _ => None,
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_route_matching() {
        assert_eq!(match_route("/"), Route::Dashboard);
        assert_eq!(match_route("/dashboard"), Route::Dashboard);
        assert_eq!(match_route("/projects"), Route::Projects);
        assert_eq!(match_route("/login"), Route::Login);
        assert_eq!(match_route("/logout"), Route::Logout);
        assert_eq!(match_route("/favicon.ico"), Route::Favicon);
        assert_eq!(match_route("/favicon.svg"), Route::Favicon);
    }

    #[test]
    fn test_asset_prefix_matching() {
        assert_eq!(match_route("/images/logo.svg"), Route::Asset);
        assert_eq!(match_route("/images/nested/icon.png"), Route::Asset);
        // No trailing-slash normalization: /images is not the fallback
        assert_eq!(match_route("/images"), Route::NotFound);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(match_route("/admin"), Route::NotFound);
        assert_eq!(match_route("/projects/1"), Route::NotFound);
        assert_eq!(match_route("/dashboard/"), Route::NotFound);
    }

    #[test]
    fn test_post_only_allowed_on_login() {
        assert!(method_allowed(Route::Login, &Method::POST));
        assert!(!method_allowed(Route::Dashboard, &Method::POST));
        assert!(!method_allowed(Route::Asset, &Method::POST));
        assert!(method_allowed(Route::NotFound, &Method::GET));
    }

    #[test]
    fn test_allow_header_values() {
        assert_eq!(allowed_methods(Route::Login), "GET, HEAD, POST, OPTIONS");
        assert_eq!(allowed_methods(Route::Projects), "GET, HEAD, OPTIONS");
    }
}
