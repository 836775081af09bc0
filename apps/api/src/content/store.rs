use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::content::models::{ContentFile, Profile, ProjectRecord};
use crate::content::seed::default_content;

/// Immutable portfolio content. Built once at startup and shared behind an `Arc`;
/// there is no write path.
#[derive(Debug, Clone)]
pub struct ContentStore {
    profile: Profile,
    projects: Vec<ProjectRecord>,
}

impl ContentStore {
    /// Validates and wraps a content set. Project ids must be unique, and ids and
    /// titles must be non-blank.
    pub fn from_content(content: ContentFile) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &content.projects {
            if project.id.trim().is_empty() {
                bail!("Project with title '{}' has an empty id", project.title);
            }
            if project.title.trim().is_empty() {
                bail!("Project '{}' has an empty title", project.id);
            }
            if !seen.insert(project.id.as_str()) {
                bail!("Duplicate project id '{}'", project.id);
            }
        }

        Ok(Self {
            profile: content.profile,
            projects: content.projects,
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::from_content(default_content())
    }

    /// Loads content from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display()))?;
        let content: ContentFile = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid content file {}", path.display()))?;
        Self::from_content(content)
    }

    /// Loads from `path` when given, otherwise falls back to built-in content.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        let store = match path {
            Some(path) => {
                info!("Loading portfolio content from {}", path.display());
                Self::load(path)?
            }
            None => {
                info!("CONTENT_PATH not set, serving built-in portfolio content");
                Self::builtin()?
            }
        };
        info!("Portfolio content loaded: {} projects", store.projects.len());
        Ok(store)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_content_has_three_projects() {
        let store = ContentStore::builtin().unwrap();
        assert_eq!(store.projects().len(), 3);
        assert_eq!(store.profile().skills.len(), 11);
        assert_eq!(
            store.project("project-2").map(|p| p.title.as_str()),
            Some("AI-Powered Task Manager")
        );
    }

    #[test]
    fn test_unknown_project_is_none() {
        let store = ContentStore::builtin().unwrap();
        assert!(store.project("project-99").is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut content = default_content();
        let copy = content.projects[0].clone();
        content.projects.push(copy);
        let err = ContentStore::from_content(content).unwrap_err();
        assert!(err.to_string().contains("Duplicate project id 'project-1'"));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut content = default_content();
        content.projects[1].title = "  ".to_string();
        assert!(ContentStore::from_content(content).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "profile": {{
                    "headline": "Hi",
                    "bio": "Builder",
                    "skills": ["Rust"],
                    "socialLinks": {{"github": "g", "linkedin": "l", "email": "e"}}
                }},
                "projects": [{{
                    "id": "cli",
                    "title": "CLI",
                    "description": "A tool",
                    "longDescription": "A longer tool",
                    "imageUrl": "img.png",
                    "imageHint": "terminal",
                    "skills": ["Rust"],
                    "achievements": ["Shipped v1"]
                }}]
            }}"#
        )
        .unwrap();

        let store = ContentStore::load(file.path()).unwrap();
        let project = store.project("cli").unwrap();
        assert_eq!(project.long_description, "A longer tool");
        assert!(project.github_url.is_none());
        assert_eq!(store.profile().skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = ContentStore::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid content file"));
    }

    #[test]
    fn test_load_or_builtin_without_path() {
        let store = ContentStore::load_or_builtin(None).unwrap();
        assert_eq!(store.projects().len(), 3);
    }
}
