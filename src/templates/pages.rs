//! Page rendering functions
//!
//! Each page shares the portal layout; the body is written per page.

use super::props::{DashboardProps, LoginProps, ProjectsProps};
use super::{escape_html, RenderError};
use std::fmt::Write;

const PORTAL_CSS: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
            background: #f4f6f9;
            color: #222;
            line-height: 1.6;
        }
        header {
            background: #1a2332;
            color: white;
            padding: 12px 24px;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        header .brand { font-size: 1.2em; font-weight: 700; }
        header nav a {
            color: #cfd8e3;
            text-decoration: none;
            margin-left: 18px;
        }
        header nav a:hover { color: white; }
        main { max-width: 960px; margin: 32px auto; padding: 0 24px; }
        .panel {
            background: white;
            border-radius: 8px;
            padding: 24px;
            box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
        }
        table { width: 100%; border-collapse: collapse; margin-top: 16px; }
        th, td { text-align: left; padding: 10px 12px; border-bottom: 1px solid #e3e8ee; }
        th { color: #5a6b7f; font-weight: 600; }
        .badge {
            display: inline-block;
            padding: 2px 10px;
            border-radius: 10px;
            font-size: 0.85em;
        }
        .badge.public { background: #e2f4e8; color: #1d7a3e; }
        .badge.private { background: #edeff3; color: #5a6b7f; }
        .error {
            background: #fdecea;
            color: #b3261e;
            border-radius: 6px;
            padding: 10px 14px;
            margin-bottom: 16px;
        }
        form label { display: block; margin: 12px 0 4px; color: #5a6b7f; }
        form input[type="text"], form input[type="password"] {
            width: 100%;
            padding: 8px 10px;
            border: 1px solid #cfd8e3;
            border-radius: 6px;
        }
        form button {
            margin-top: 18px;
            padding: 10px 24px;
            background: #1a2332;
            color: white;
            border: none;
            border-radius: 6px;
            cursor: pointer;
        }
"#;

/// Write the shared document head and page header
fn write_layout_open(
    out: &mut String,
    lang: &str,
    title: &str,
    account_name: Option<&str>,
) -> Result<(), RenderError> {
    write!(
        out,
        r#"<!DOCTYPE html>
<html lang="{}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} - Registry Portal</title>
    <link rel="icon" type="image/svg+xml" href="/favicon.svg">
    <style>{PORTAL_CSS}</style>
</head>
<body>
    <header>
        <div class="brand">Registry Portal</div>
"#,
        escape_html(lang),
        escape_html(title),
    )?;

    match account_name {
        Some(name) => write!(
            out,
            r#"        <nav>
            <span>{}</span>
            <a href="/dashboard">Dashboard</a>
            <a href="/projects">Projects</a>
            <a href="/logout">Log out</a>
        </nav>
"#,
            escape_html(name),
        )?,
        None => out.push_str("        <nav></nav>\n"),
    }

    out.push_str("    </header>\n    <main>\n");
    Ok(())
}

fn write_layout_close(out: &mut String) {
    out.push_str("    </main>\n</body>\n</html>\n");
}

/// Render the dashboard page
pub fn dashboard(props: &DashboardProps) -> Result<String, RenderError> {
    let mut out = String::with_capacity(4096);
    write_layout_open(
        &mut out,
        &props.current_lang,
        "Dashboard",
        props.is_session_valid.then_some(props.account_name.as_str()),
    )?;

    write!(
        out,
        r#"        <div class="panel">
            <h1>Welcome, {}</h1>
            <p>Manage your container projects and repositories from here.</p>
            <p><a href="/projects">Browse projects</a></p>
        </div>
"#,
        escape_html(&props.account_name),
    )?;

    write_layout_close(&mut out);
    Ok(out)
}

/// Render the projects listing page
pub fn projects(props: &ProjectsProps) -> Result<String, RenderError> {
    let mut out = String::with_capacity(8192);
    write_layout_open(
        &mut out,
        &props.current_lang,
        "Projects",
        props.is_session_valid.then_some(props.account_name.as_str()),
    )?;

    write!(
        out,
        r#"        <div class="panel">
            <h1>Projects ({})</h1>
            <table>
                <tr><th>Name</th><th>Description</th><th>Access</th><th>Repositories</th><th>Created</th></tr>
"#,
        props.total_count,
    )?;

    for project in &props.projects {
        let (badge_class, badge_label) = if project.public {
            ("public", "Public")
        } else {
            ("private", "Private")
        };
        write!(
            out,
            r#"                <tr>
                    <td>{}</td>
                    <td>{}</td>
                    <td><span class="badge {badge_class}">{badge_label}</span></td>
                    <td>{}</td>
                    <td>{}</td>
                </tr>
"#,
            escape_html(&project.name),
            escape_html(&project.description),
            project.repo_count,
            project.created_at.format("%Y-%m-%d"),
        )?;
    }

    out.push_str("            </table>\n        </div>\n");
    write_layout_close(&mut out);
    Ok(out)
}

/// Render the login page
pub fn login(props: &LoginProps) -> Result<String, RenderError> {
    let mut out = String::with_capacity(4096);
    write_layout_open(&mut out, "en", "Sign in", None)?;

    out.push_str("        <div class=\"panel\">\n            <h1>Sign in</h1>\n");

    if !props.error_message.is_empty() {
        write!(
            out,
            "            <div class=\"error\">{}</div>\n",
            escape_html(&props.error_message),
        )?;
    }

    write!(
        out,
        r#"            <form method="post" action="/login">
                <label for="username">Username</label>
                <input type="text" id="username" name="username" autofocus>
                <label for="password">Password</label>
                <input type="password" id="password" name="password">
                <input type="hidden" name="redirect_url" value="{}">
                <button type="submit">Sign in</button>
            </form>
        </div>
"#,
        escape_html(&props.redirect_url),
    )?;

    write_layout_close(&mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::{MockProjectDirectory, ProjectDirectory};

    fn dashboard_props() -> DashboardProps {
        DashboardProps {
            is_session_valid: true,
            account_name: "admin".to_string(),
            current_lang: "en".to_string(),
        }
    }

    #[test]
    fn test_dashboard_shows_account_name() {
        let html = dashboard(&dashboard_props()).unwrap();
        assert!(html.contains("admin"));
        assert!(html.contains("<title>Dashboard - Registry Portal</title>"));
        assert!(html.contains("lang=\"en\""));
    }

    #[test]
    fn test_dashboard_escapes_account_name() {
        let mut props = dashboard_props();
        props.account_name = "<admin>".to_string();
        let html = dashboard(&props).unwrap();
        assert!(html.contains("&lt;admin&gt;"));
        assert!(!html.contains("<admin>"));
    }

    #[test]
    fn test_projects_lists_fixture() {
        let listing = MockProjectDirectory.list();
        let props = ProjectsProps {
            is_session_valid: true,
            account_name: "admin".to_string(),
            current_lang: "en".to_string(),
            total_count: listing.len(),
            projects: listing,
        };
        let html = projects(&props).unwrap();
        assert!(html.contains("Projects (3)"));
        assert!(html.contains("library"));
        assert!(html.contains("myproject"));
        assert!(html.contains("production"));
        assert!(html.contains("Public"));
        assert!(html.contains("Private"));
    }

    #[test]
    fn test_login_without_error() {
        let html = login(&LoginProps::default()).unwrap();
        assert!(html.contains("form method=\"post\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_login_with_error_and_redirect() {
        let props = LoginProps {
            error_message: "Invalid username or password".to_string(),
            redirect_url: "/projects".to_string(),
        };
        let html = login(&props).unwrap();
        assert!(html.contains("Invalid username or password"));
        assert!(html.contains("value=\"/projects\""));
    }
}
