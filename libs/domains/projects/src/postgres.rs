//! PostgreSQL-backed repository implementation

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QueryTrait,
};
use tracing::debug;

use crate::entity;
use crate::error::ProjectResult;
use crate::models::{NewProject, Project, UpdateProject};
use crate::repository::ProjectRepository;

#[derive(Debug, Clone)]
pub struct PgProjectRepository {
    db: DatabaseConnection,
}

impl PgProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn get_all(&self) -> ProjectResult<Vec<Project>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProjectResult<Option<Project>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert(&self, new_project: NewProject) -> ProjectResult<Project> {
        let active_model: entity::ActiveModel = new_project.into();
        let model = active_model.insert(&self.db).await?;

        debug!(id = model.id, "inserted project");
        Ok(model.into())
    }

    async fn update(&self, id: i32, changes: UpdateProject) -> ProjectResult<u64> {
        // Single UPDATE ... WHERE id = $1; the affected-row count tells us
        // whether the project existed without a prior SELECT.
        let result = entity::Entity::update_many()
            .filter(entity::Column::Id.eq(id))
            .apply_if(changes.name, |query, name| {
                query.col_expr(entity::Column::Name, Expr::value(name))
            })
            .apply_if(changes.description, |query, description| {
                query.col_expr(entity::Column::Description, Expr::value(description))
            })
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: i32) -> ProjectResult<u64> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
