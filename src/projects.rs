//! Project directory seam
//!
//! `ProjectDirectory` is the capability the projects page pulls its
//! listing from. The mock implementation returns a fixed three-project
//! fixture standing in for a real registry backend.

use chrono::{DateTime, Duration, Local};
use serde::Serialize;

/// A registry project as shown on the projects page
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub public: bool,
    pub repo_count: u32,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

/// Capability to list projects visible to the current account
pub trait ProjectDirectory: Send + Sync {
    fn list(&self) -> Vec<Project>;
}

/// Mock directory with a fixed three-project fixture
pub struct MockProjectDirectory;

impl ProjectDirectory for MockProjectDirectory {
    fn list(&self) -> Vec<Project> {
        let now = Local::now();
        vec![
            Project {
                id: 1,
                name: "library".to_string(),
                description: "Default public project".to_string(),
                public: true,
                repo_count: 5,
                created_at: now - Duration::days(60),
                updated_at: now - Duration::days(1),
            },
            Project {
                id: 2,
                name: "myproject".to_string(),
                description: "My private project for development".to_string(),
                public: false,
                repo_count: 12,
                created_at: now - Duration::days(30),
                updated_at: now - Duration::days(3),
            },
            Project {
                id: 3,
                name: "production".to_string(),
                description: "Production container images".to_string(),
                public: false,
                repo_count: 8,
                created_at: now - Duration::days(90),
                updated_at: now - Duration::days(2),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_has_three_projects() {
        let projects = MockProjectDirectory.list();
        assert_eq!(projects.len(), 3);
    }

    #[test]
    fn test_fixture_names_and_visibility() {
        let projects = MockProjectDirectory.list();
        assert_eq!(projects[0].name, "library");
        assert!(projects[0].public);
        assert_eq!(projects[1].name, "myproject");
        assert!(!projects[1].public);
        assert_eq!(projects[2].name, "production");
        assert!(!projects[2].public);
    }

    #[test]
    fn test_fixture_timestamps_ordered() {
        for p in MockProjectDirectory.list() {
            assert!(p.created_at < p.updated_at);
        }
    }
}
