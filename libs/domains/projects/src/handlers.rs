use axum::{
    Json, Router,
    extract::{OriginalUri, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProjectResult;
use crate::models::{CreateProject, ProjectResponse, UpdateProject};
use crate::repository::ProjectRepository;
use crate::service::ProjectService;

const TAG: &str = "projects";

/// OpenAPI documentation for the Projects API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_projects,
        create_project,
        get_project,
        update_project,
        delete_project,
    ),
    components(schemas(ProjectResponse, CreateProject, UpdateProject)),
    tags(
        (name = TAG, description = "Project management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the project router with all HTTP endpoints
pub fn router<R: ProjectRepository + 'static>(service: ProjectService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/{project_id}",
            get(get_project)
                .patch(update_project)
                .delete(delete_project),
        )
        .with_state(shared_service)
}

/// List all projects
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of projects", body = Vec<ProjectResponse>),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_projects<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
) -> ProjectResult<Json<Vec<ProjectResponse>>> {
    let projects = service.get_all().await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created successfully", body = ProjectResponse),
        (status = 400, description = "Missing required field"),
        (status = 500, description = "Internal server error")
    )
)]
async fn create_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    OriginalUri(uri): OriginalUri,
    Json(input): Json<CreateProject>,
) -> ProjectResult<impl IntoResponse> {
    let project = service.create(input).await?;

    // Location reflects the request path as the client saw it, including any
    // nesting prefix.
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), project.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProjectResponse::from(project)),
    ))
}

/// Get a project by id
#[utoipa::path(
    get,
    path = "/{project_id}",
    tag = TAG,
    params(
        ("project_id" = i32, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 404, description = "Project doesn't exist"),
        (status = 500, description = "Internal server error")
    )
)]
async fn get_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    Path(project_id): Path<i32>,
) -> ProjectResult<Json<ProjectResponse>> {
    let project = service.get_by_id(project_id).await?;
    Ok(Json(project.into()))
}

/// Partially update a project
#[utoipa::path(
    patch,
    path = "/{project_id}",
    tag = TAG,
    params(
        ("project_id" = i32, Path, description = "Project id")
    ),
    request_body = UpdateProject,
    responses(
        (status = 204, description = "Project updated successfully"),
        (status = 400, description = "No updatable field in request body"),
        (status = 404, description = "Project doesn't exist"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    Path(project_id): Path<i32>,
    Json(changes): Json<UpdateProject>,
) -> ProjectResult<impl IntoResponse> {
    service.update(project_id, changes).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/{project_id}",
    tag = TAG,
    params(
        ("project_id" = i32, Path, description = "Project id")
    ),
    responses(
        (status = 204, description = "Project deleted successfully"),
        (status = 404, description = "Project doesn't exist"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    Path(project_id): Path<i32>,
) -> ProjectResult<impl IntoResponse> {
    service.delete(project_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
