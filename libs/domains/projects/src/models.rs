use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ProjectError, ProjectResult};

/// Project entity as stored in the `projects` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Unique identifier, assigned by the persistence layer
    pub id: i32,
    /// Project name
    pub name: String,
    /// Project description
    pub description: String,
    /// Optional feature summary, set on creation only
    pub features: Option<String>,
    /// Optional author, set on creation only
    pub author: Option<String>,
    /// Optional topic, set on creation only
    pub topic: Option<String>,
    /// Caller-supplied creation timestamp, set on creation only
    pub date_created: Option<DateTime<Utc>>,
}

/// DTO for creating a new project.
///
/// All fields are optional at the deserialization level so that the two
/// required fields can be presence-checked with a field-naming error message
/// instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub features: Option<String>,
    pub author: Option<String>,
    pub topic: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
}

impl CreateProject {
    /// Presence check for the required fields, `name` before `description`.
    /// Returns the first missing field as the error.
    pub fn validate(self) -> ProjectResult<NewProject> {
        let Some(name) = self.name else {
            return Err(ProjectError::MissingField("name"));
        };
        let Some(description) = self.description else {
            return Err(ProjectError::MissingField("description"));
        };

        Ok(NewProject {
            name,
            description,
            features: self.features,
            author: self.author,
            topic: self.topic,
            date_created: self.date_created,
        })
    }
}

/// Validated insert payload, produced by [`CreateProject::validate`]
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub features: Option<String>,
    pub author: Option<String>,
    pub topic: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
}

/// DTO for partially updating a project.
///
/// Only `name` and `description` are updatable through the API; unknown keys
/// in the request body are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateProject {
    /// Whether at least one updatable field is present and non-empty.
    ///
    /// An empty string counts as absent for validation purposes. A
    /// present-but-empty field is still written by the repository when the
    /// payload passes validation.
    pub fn has_changes(&self) -> bool {
        self.name.as_deref().is_some_and(|s| !s.is_empty())
            || self.description.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Client-facing representation of a project.
///
/// Every string-typed field is HTML-escaped; `id` and `date_created` pass
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub features: Option<String>,
    pub author: Option<String>,
    pub topic: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
}

/// Escape a string for safe embedding in HTML contexts.
fn escape(value: &str) -> String {
    html_escape::encode_safe(value).into_owned()
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: escape(&project.name),
            description: escape(&project.description),
            features: project.features.as_deref().map(escape),
            author: project.author.as_deref().map(escape),
            topic: project.topic.as_deref().map(escape),
            date_created: project.date_created,
        }
    }
}
