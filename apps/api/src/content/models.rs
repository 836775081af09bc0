use serde::{Deserialize, Serialize};

/// One portfolio project. Read-only: assist pipelines copy fields out of it but
/// never write results back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    /// Short card blurb.
    pub description: String,
    pub long_description: String,
    pub image_url: String,
    pub image_hint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

/// The about section: headline, bio, skill badges and contact links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub headline: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub social_links: SocialLinks,
}

/// On-disk shape of a content file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFile {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}
