//! SeaORM entity for the `projects` table

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, NotSet};

use crate::models::{NewProject, Project};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub features: Option<String>,
    pub author: Option<String>,
    pub topic: Option<String>,
    pub date_created: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            features: model.features,
            author: model.author,
            topic: model.topic,
            date_created: model.date_created.map(Into::into),
        }
    }
}

impl From<NewProject> for ActiveModel {
    fn from(new_project: NewProject) -> Self {
        Self {
            // The database assigns the id
            id: NotSet,
            name: ActiveValue::Set(new_project.name),
            description: ActiveValue::Set(new_project.description),
            features: ActiveValue::Set(new_project.features),
            author: ActiveValue::Set(new_project.author),
            topic: ActiveValue::Set(new_project.topic),
            date_created: ActiveValue::Set(new_project.date_created.map(Into::into)),
        }
    }
}
