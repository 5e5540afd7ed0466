use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::text;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    /// Filled from the body on save when left empty.
    #[serde(default)]
    pub excerpt: String,

    pub created_time: DateTimeUtc,
    pub modified_time: DateTimeUtc,

    pub category_id: i64,
    pub author_id: i64,

    #[serde(default)]
    pub views: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::rel_post_tag::Entity")]
    RelTag,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::rel_post_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RelTag.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::rel_post_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::rel_post_tag::Relation::Post.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now();
        if insert && self.created_time.is_not_set() {
            self.created_time = ActiveValue::Set(now);
        }
        if self.modified_time.is_not_set() {
            self.modified_time = ActiveValue::Set(now);
        }

        let excerpt_empty = match &self.excerpt {
            ActiveValue::Set(e) | ActiveValue::Unchanged(e) => e.is_empty(),
            ActiveValue::NotSet => true,
        };
        if excerpt_empty {
            if let ActiveValue::Set(body) | ActiveValue::Unchanged(body) = &self.body {
                self.excerpt = ActiveValue::Set(text::excerpt(body));
            }
        }
        Ok(self)
    }
}

impl Model {
    pub fn absolute_url(&self) -> String {
        format!("/post/{}", self.id)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}
