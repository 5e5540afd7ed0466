use blog_core::model::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::sea_query;

use crate::{unique_index, unique_index_name};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(user::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(user::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(user::Column::Username).string().not_null())
                    .col(
                        ColumnDef::new(user::Column::Email)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(user::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index!(user::Entity, user::Column::Username))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(category::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(category::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(category::Column::Name).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(tag::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(tag::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(tag::Column::Name).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(post::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(post::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(post::Column::Title).string_len(70).not_null())
                    .col(ColumnDef::new(post::Column::Body).text().not_null())
                    .col(
                        ColumnDef::new(post::Column::Excerpt)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(post::Column::CreatedTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(post::Column::ModifiedTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(post::Column::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(post::Column::AuthorId).big_integer().not_null())
                    .col(
                        ColumnDef::new(post::Column::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-post-category_id")
                            .from(post::Entity, post::Column::CategoryId)
                            .to(category::Entity, category::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-post-author_id")
                            .from(post::Entity, post::Column::AuthorId)
                            .to(user::Entity, user::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-post-created_time")
                    .table(post::Entity)
                    .col(post::Column::CreatedTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(comment::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(comment::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(comment::Column::Name).string_len(100).not_null())
                    .col(ColumnDef::new(comment::Column::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(comment::Column::Url)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(comment::Column::Text).text().not_null())
                    .col(
                        ColumnDef::new(comment::Column::CreatedTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(comment::Column::PostId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-comment-post_id")
                            .from(comment::Entity, comment::Column::PostId)
                            .to(post::Entity, post::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-comment-post_id")
                    .table(comment::Entity)
                    .col(comment::Column::PostId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(comment::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(post::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(tag::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(category::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(user::Entity).to_owned())
            .await
    }
}
