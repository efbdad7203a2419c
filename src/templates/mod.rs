//! Server-side page templates
//!
//! Pure functions from props to full HTML documents. Rendering writes
//! into a string buffer; a failed write surfaces as `RenderError` and
//! the caller answers 500.

mod pages;
mod props;

pub use pages::{dashboard, login, projects};
pub use props::{DashboardProps, LoginProps, ProjectsProps};

/// Template rendering failure
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template write failed: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Escape text for safe interpolation into HTML content or attributes
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert(\"x\")</script>"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("plain"), "plain");
    }
}
