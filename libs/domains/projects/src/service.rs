//! Business logic for the projects resource.
//!
//! The service owns validation and the mapping from repository outcomes to
//! domain errors; the handlers stay thin HTTP adapters on top of it.

use std::sync::Arc;

use tracing::instrument;

use crate::error::{ProjectError, ProjectResult};
use crate::models::{CreateProject, Project, UpdateProject};
use crate::repository::ProjectRepository;

pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ProjectResult<Vec<Project>> {
        self.repository.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ProjectResult<Project> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateProject) -> ProjectResult<Project> {
        let new_project = input.validate()?;
        self.repository.insert(new_project).await
    }

    /// Partial update. Rejects payloads with no usable field before touching
    /// the repository; a zero affected-row count means the project is gone.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: UpdateProject) -> ProjectResult<()> {
        if !changes.has_changes() {
            return Err(ProjectError::NoUpdatableField);
        }

        let rows_affected = self.repository.update(id, changes).await?;
        if rows_affected == 0 {
            return Err(ProjectError::NotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ProjectResult<()> {
        let rows_affected = self.repository.delete(id).await?;
        if rows_affected == 0 {
            return Err(ProjectError::NotFound);
        }

        Ok(())
    }
}
