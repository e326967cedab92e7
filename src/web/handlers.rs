use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    db::{self, models::Project},
    error::Error,
    web::forms::{ProjectForm, ProjectFormErrors},
    Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::SqlitePool,
    pub settings: crate::config::Settings,
}

fn render<T: Template>(template: &T) -> Result<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|e| Error::Internal(format!("Template render failed: {e}")))
}

/// Project list page with the creation form
#[derive(Template)]
#[template(path = "project_list.html")]
struct ProjectListTemplate {
    projects: Vec<ProjectData>,
    form: FormData,
    errors: ProjectFormErrors,
}

#[derive(Clone)]
#[allow(dead_code)] // Fields are used by Askama templates
struct ProjectData {
    id: i64,
    name: String,
    root_path: String,
    description: String,
}

impl From<Project> for ProjectData {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            root_path: project.root_path.unwrap_or_default(),
            description: project.description,
        }
    }
}

/// Values echoed back into the form inputs
#[derive(Clone, Default)]
#[allow(dead_code)]
struct FormData {
    name: String,
    root_path: String,
    description: String,
}

impl From<&ProjectForm> for FormData {
    fn from(form: &ProjectForm) -> Self {
        Self {
            name: form.name.clone(),
            root_path: form.root_path.clone().unwrap_or_default(),
            description: form.description.clone(),
        }
    }
}

async fn render_project_list(
    state: &AppState,
    form: FormData,
    errors: ProjectFormErrors,
) -> Result<Html<String>> {
    let projects = db::projects::list_projects(&state.pool)
        .await?
        .into_iter()
        .map(ProjectData::from)
        .collect();

    render(&ProjectListTemplate {
        projects,
        form,
        errors,
    })
}

/// GET / - List projects
pub async fn project_list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    render_project_list(&state, FormData::default(), ProjectFormErrors::default()).await
}

/// POST / - Create a project, or re-render the list with form errors
pub async fn create_project(
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> Result<Response> {
    match form.validate() {
        Ok(new_project) => {
            let project = db::projects::create_project(&state.pool, &new_project).await?;
            info!("Created project {} ({})", project.id, project);
            Ok(Redirect::to(&format!("/{}/", project.id)).into_response())
        }
        Err(errors) => {
            debug!("Rejected project form: {:?}", errors);
            let page = render_project_list(&state, FormData::from(&form), errors).await?;
            Ok(page.into_response())
        }
    }
}

/// Project detail page template
#[derive(Template)]
#[template(path = "project_detail.html")]
struct ProjectDetailTemplate {
    project: ProjectData,
    files: Vec<FileData>,
}

#[derive(Clone)]
#[allow(dead_code)]
struct FileData {
    file_name: String,
    last_read_commit: String,
    current_commit: String,
    up_to_date: bool,
}

/// GET /:project_id/ - Project detail page
pub async fn project_detail(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let detail = db::projects::get_project_with_files(&state.pool, project_id).await?;

    let files = detail
        .files
        .into_iter()
        .map(|f| FileData {
            up_to_date: f.last_read_commit == f.current_commit,
            file_name: f.file_name,
            last_read_commit: f.last_read_commit,
            current_commit: f.current_commit,
        })
        .collect();

    render(&ProjectDetailTemplate {
        project: detail.project.into(),
        files,
    })
}

/// GET /:project_id - Redirect to the canonical detail URL
pub async fn project_detail_redirect(Path(project_id): Path<i64>) -> impl IntoResponse {
    Redirect::permanent(&format!("/{project_id}/"))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: String,
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// GET /ready - Readiness check endpoint
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<ReadinessResponse>> {
    let db_healthy = sqlx::query("SELECT 1").fetch_one(&state.pool).await.is_ok();

    Ok(Json(ReadinessResponse {
        ready: db_healthy,
        database: if db_healthy { "ok" } else { "error" }.to_string(),
    }))
}
