//! Repository abstraction for project persistence.
//!
//! The service layer only depends on the [`ProjectRepository`] trait, so the
//! HTTP surface can be exercised against the in-memory implementation while
//! production wires in [`crate::postgres::PgProjectRepository`].

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ProjectResult;
use crate::models::{NewProject, Project, UpdateProject};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, ordered by id
    async fn get_all(&self) -> ProjectResult<Vec<Project>>;

    /// Single project by id, `None` when absent
    async fn get_by_id(&self, id: i32) -> ProjectResult<Option<Project>>;

    /// Insert a new project and return it with its assigned id
    async fn insert(&self, new_project: NewProject) -> ProjectResult<Project>;

    /// Apply the present fields of `changes` to the project with `id`.
    /// Returns the number of rows affected (0 when the project is absent).
    async fn update(&self, id: i32, changes: UpdateProject) -> ProjectResult<u64>;

    /// Delete the project with `id`. Returns the number of rows affected.
    async fn delete(&self, id: i32) -> ProjectResult<u64>;
}

/// In-memory repository backed by a `BTreeMap`, for tests and local demos.
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    projects: BTreeMap<i32, Project>,
    next_id: i32,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn get_all(&self) -> ProjectResult<Vec<Project>> {
        let store = self.inner.read().await;
        Ok(store.projects.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ProjectResult<Option<Project>> {
        let store = self.inner.read().await;
        Ok(store.projects.get(&id).cloned())
    }

    async fn insert(&self, new_project: NewProject) -> ProjectResult<Project> {
        let mut store = self.inner.write().await;
        store.next_id += 1;
        let project = Project {
            id: store.next_id,
            name: new_project.name,
            description: new_project.description,
            features: new_project.features,
            author: new_project.author,
            topic: new_project.topic,
            date_created: new_project.date_created,
        };
        store.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, id: i32, changes: UpdateProject) -> ProjectResult<u64> {
        let mut store = self.inner.write().await;
        match store.projects.get_mut(&id) {
            Some(project) => {
                if let Some(name) = changes.name {
                    project.name = name;
                }
                if let Some(description) = changes.description {
                    project.description = description;
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> ProjectResult<u64> {
        let mut store = self.inner.write().await;
        Ok(store.projects.remove(&id).map_or(0, |_| 1))
    }
}
