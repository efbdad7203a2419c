// Page props structs
// One immutable props value is built per request and dropped after
// rendering; nothing is persisted.

use crate::projects::Project;
use serde::Serialize;

/// Props for the dashboard page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardProps {
    pub is_session_valid: bool,
    pub account_name: String,
    pub current_lang: String,
}

/// Props for the projects page
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsProps {
    pub is_session_valid: bool,
    pub account_name: String,
    pub current_lang: String,
    pub projects: Vec<Project>,
    pub total_count: usize,
}

/// Props for the login page
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginProps {
    pub error_message: String,
    pub redirect_url: String,
}
