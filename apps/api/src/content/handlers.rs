//! Axum route handlers for read-only portfolio content.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::assist::generate::GenerateDescriptionRequest;
use crate::assist::optimize::OptimizeToneRequest;
use crate::assist::suggest::SuggestKeywordsRequest;
use crate::content::models::{Profile, ProjectRecord};
use crate::errors::AppError;
use crate::state::AppState;

/// Assist requests pre-populated from a project, ready to edit and submit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistDefaults {
    pub generate_description: GenerateDescriptionRequest,
    pub suggest_keywords: SuggestKeywordsRequest,
    pub optimize_tone: OptimizeToneRequest,
}

fn find_project<'a>(state: &'a AppState, id: &str) -> Result<&'a ProjectRecord, AppError> {
    state
        .content
        .project(id)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.content.profile().clone())
}

/// GET /api/v1/projects
pub async fn handle_list_projects(State(state): State<AppState>) -> Json<Vec<ProjectRecord>> {
    Json(state.content.projects().to_vec())
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectRecord>, AppError> {
    Ok(Json(find_project(&state, &id)?.clone()))
}

/// GET /api/v1/projects/:id/assist
///
/// Returns the three assist requests filled from the project's fields.
pub async fn handle_assist_defaults(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssistDefaults>, AppError> {
    let project = find_project(&state, &id)?;
    Ok(Json(AssistDefaults {
        generate_description: project.into(),
        suggest_keywords: project.into(),
        optimize_tone: project.into(),
    }))
}
