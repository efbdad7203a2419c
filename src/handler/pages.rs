//! Page handler module
//!
//! Builds props from the injected services and delegates to the
//! template renderer. A render failure answers 500 and logs the error;
//! there is no retry and no partial output.

use crate::config::AppState;
use crate::http::{self, form};
use crate::logger;
use crate::templates::{self, DashboardProps, LoginProps, ProjectsProps, RenderError};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::sync::Arc;

/// Serve the dashboard page
pub fn dashboard(state: &Arc<AppState>, is_head: bool) -> Response<Full<Bytes>> {
    let props = DashboardProps {
        is_session_valid: true,
        account_name: state.config.portal.account_name.clone(),
        current_lang: state.config.portal.lang.clone(),
    };
    render_or_500("dashboard", templates::dashboard(&props), is_head)
}

/// Serve the projects page from the project directory
pub fn projects(state: &Arc<AppState>, is_head: bool) -> Response<Full<Bytes>> {
    let listing = state.projects.list();
    let props = ProjectsProps {
        is_session_valid: true,
        account_name: state.config.portal.account_name.clone(),
        current_lang: state.config.portal.lang.clone(),
        total_count: listing.len(),
        projects: listing,
    };
    render_or_500("projects", templates::projects(&props), is_head)
}

/// Serve the login form
///
/// `redirect_url` is carried from the query string into the form so a
/// successful login can return the user where they came from.
pub fn login_form(query: Option<&str>, is_head: bool) -> Response<Full<Bytes>> {
    let redirect_url = query
        .map(form::parse)
        .and_then(|mut params| params.remove("redirect_url"))
        .unwrap_or_default();

    let props = LoginProps {
        error_message: String::new(),
        redirect_url,
    };
    render_or_500("login", templates::login(&props), is_head)
}

/// Handle the login form submission
///
/// Validates the submitted pair through the credential capability. On
/// success redirects to `redirect_url` (or `/`); on failure re-renders
/// the form with an error message.
pub async fn login_submit(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_error(&format!("Failed to read login body: {e}"));
            return http::build_500_response();
        }
    };

    let fields = form::parse(&String::from_utf8_lossy(&body));
    process_login(&fields, state)
}

/// Decide the login outcome from the parsed form fields
fn process_login(
    fields: &std::collections::HashMap<String, String>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let username = fields.get("username").map(String::as_str).unwrap_or("");
    let password = fields.get("password").map(String::as_str).unwrap_or("");
    let redirect_url = fields
        .get("redirect_url")
        .map(String::as_str)
        .unwrap_or("");

    if state.credentials.validate(username, password) {
        let target = if redirect_url.is_empty() {
            "/"
        } else {
            redirect_url
        };
        return http::build_redirect_response(target);
    }

    let props = LoginProps {
        error_message: "Invalid username or password".to_string(),
        redirect_url: redirect_url.to_string(),
    };
    render_or_500("login", templates::login(&props), false)
}

/// Handle logout: nothing to clear, back to the login form
pub fn logout() -> Response<Full<Bytes>> {
    http::build_redirect_response("/login")
}

fn render_or_500(
    page: &str,
    result: Result<String, RenderError>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match result {
        Ok(html) => http::build_html_response(html, is_head),
        Err(e) => {
            logger::log_error(&format!("Error rendering {page}: {e}"));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::collections::HashMap;

    fn state() -> Arc<AppState> {
        let config = Config::load_from("no-such-config-file").unwrap();
        Arc::new(AppState::new(&config))
    }

    async fn body_text(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn login_fields(username: &str, password: &str, redirect_url: &str) -> HashMap<String, String> {
        let mut fields = HashMap::new();
        fields.insert("username".to_string(), username.to_string());
        fields.insert("password".to_string(), password.to_string());
        if !redirect_url.is_empty() {
            fields.insert("redirect_url".to_string(), redirect_url.to_string());
        }
        fields
    }

    #[tokio::test]
    async fn test_dashboard_contains_account_name() {
        let resp = dashboard(&state(), false);
        assert_eq!(resp.status(), 200);
        assert!(body_text(resp).await.contains("admin"));
    }

    #[tokio::test]
    async fn test_projects_lists_all_three() {
        let resp = projects(&state(), false);
        assert_eq!(resp.status(), 200);
        let body = body_text(resp).await;
        assert!(body.contains("Projects (3)"));
        assert!(body.contains("library"));
    }

    #[test]
    fn test_head_request_has_length_but_no_body() {
        let resp = projects(&state(), true);
        assert_eq!(resp.status(), 200);
        let length: usize = resp
            .headers()
            .get("Content-Length")
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!(length > 0);
    }

    #[tokio::test]
    async fn test_login_form_carries_redirect_url() {
        let resp = login_form(Some("redirect_url=%2Fprojects"), false);
        assert_eq!(resp.status(), 200);
        assert!(body_text(resp).await.contains("value=\"/projects\""));
    }

    #[test]
    fn test_valid_login_redirects_to_root() {
        let resp = process_login(&login_fields("admin", "Harbor12345", ""), &state());
        assert_eq!(resp.status(), 302);
        assert_eq!(resp.headers().get("Location").unwrap(), "/");
    }

    #[test]
    fn test_valid_login_honors_redirect_url() {
        let resp = process_login(&login_fields("admin", "Harbor12345", "/projects"), &state());
        assert_eq!(resp.status(), 302);
        assert_eq!(resp.headers().get("Location").unwrap(), "/projects");
    }

    #[tokio::test]
    async fn test_invalid_login_rerenders_with_error() {
        let resp = process_login(&login_fields("admin", "wrong", "/projects"), &state());
        assert_eq!(resp.status(), 200);
        let body = body_text(resp).await;
        assert!(body.contains("Invalid username or password"));
        assert!(body.contains("value=\"/projects\""));
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let resp = process_login(&HashMap::new(), &state());
        assert_eq!(resp.status(), 200);
    }

    #[test]
    fn test_logout_redirects_to_login() {
        let resp = logout();
        assert_eq!(resp.status(), 302);
        assert_eq!(resp.headers().get("Location").unwrap(), "/login");
    }
}
