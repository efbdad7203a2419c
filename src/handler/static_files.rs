//! Static file serving module
//!
//! Resolves asset requests under the configured static root and builds
//! cacheable responses. Paths that escape the root after
//! canonicalization are refused.

use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

const FAVICON_FILE: &str = "favicon.svg";

/// Serve the favicon from the static root
pub async fn serve_favicon(
    root: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let path = Path::new(root).join(FAVICON_FILE);
    match fs::read(&path).await {
        Ok(data) => build_favicon_response(&data, if_none_match, is_head),
        Err(_) => http::build_404_response(),
    }
}

/// Serve an asset under the static root (the `/images/*` fallback)
pub async fn serve_asset(
    root: &str,
    url_path: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match load_asset(root, url_path).await {
        Some((content, content_type)) => {
            let etag = cache::generate_etag(&content);
            if cache::check_etag_match(if_none_match, &etag) {
                return http::build_304_response(&etag);
            }
            http::response::build_cached_response(
                Bytes::from(content),
                content_type,
                &etag,
                is_head,
            )
        }
        None => http::build_404_response(),
    }
}

/// Resolve a URL path against the static root and read the file
///
/// Returns None for missing files and for any resolved path outside
/// the root.
pub async fn load_asset(root: &str, url_path: &str) -> Option<(Vec<u8>, &'static str)> {
    let file_path = resolve_asset_path(root, url_path)?;

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Join the URL path onto the root and refuse anything escaping it
fn resolve_asset_path(root: &str, url_path: &str) -> Option<PathBuf> {
    let relative = url_path.trim_start_matches('/');
    let file_path = Path::new(root).join(relative);

    let root_canonical = match Path::new(root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root not found or inaccessible '{root}': {e}"
            ));
            return None;
        }
    };

    // Missing file is a plain 404, no canonical path to check
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            url_path,
            file_canonical.display()
        ));
        return None;
    }

    if !file_canonical.is_file() {
        return None;
    }

    Some(file_canonical)
}

/// Build favicon response with a day-long cache
fn build_favicon_response(
    data: &[u8],
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "image/svg+xml")
        .header("Content-Length", data.len())
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=86400")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build favicon response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn asset_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std_fs::create_dir(dir.path().join("images")).unwrap();
        std_fs::write(dir.path().join("images/logo.svg"), "<svg></svg>").unwrap();
        std_fs::write(dir.path().join("favicon.svg"), "<svg/>").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_load_existing_asset() {
        let root = asset_root();
        let (content, content_type) = load_asset(root.path().to_str().unwrap(), "/images/logo.svg")
            .await
            .unwrap();
        assert_eq!(content, b"<svg></svg>");
        assert_eq!(content_type, "image/svg+xml");
    }

    #[tokio::test]
    async fn test_missing_asset_is_none() {
        let root = asset_root();
        assert!(
            load_asset(root.path().to_str().unwrap(), "/images/missing.png")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_traversal_is_refused() {
        let root = asset_root();
        let secret = root.path().parent().unwrap().join("portal-secret.txt");
        std_fs::write(&secret, "top secret").unwrap();
        let result = load_asset(root.path().to_str().unwrap(), "/images/../../portal-secret.txt").await;
        std_fs::remove_file(&secret).ok();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_serve_asset_sets_etag() {
        let root = asset_root();
        let resp = serve_asset(root.path().to_str().unwrap(), "/images/logo.svg", None, false).await;
        assert_eq!(resp.status(), 200);
        assert!(resp.headers().contains_key("ETag"));
    }

    #[tokio::test]
    async fn test_serve_asset_304_on_matching_etag() {
        let root = asset_root();
        let etag = cache::generate_etag(b"<svg></svg>");
        let resp = serve_asset(
            root.path().to_str().unwrap(),
            "/images/logo.svg",
            Some(&etag),
            false,
        )
        .await;
        assert_eq!(resp.status(), 304);
    }

    #[tokio::test]
    async fn test_serve_favicon() {
        let root = asset_root();
        let resp = serve_favicon(root.path().to_str().unwrap(), None, false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "image/svg+xml");
    }
}
