use utoipa::OpenApi;

/// Top-level OpenAPI document, composed from the domain API docs.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Project Finder API",
        version = "0.1.0",
        description = "API for browsing and managing open source projects"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/projects", api = domain_projects::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
