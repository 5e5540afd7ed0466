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
                    .table(rel_post_tag::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(rel_post_tag::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(rel_post_tag::Column::PostId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(rel_post_tag::Column::TagId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-rel_post_tag-post_id")
                            .from(rel_post_tag::Entity, rel_post_tag::Column::PostId)
                            .to(post::Entity, post::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-rel_post_tag-tag_id")
                            .from(rel_post_tag::Entity, rel_post_tag::Column::TagId)
                            .to(tag::Entity, tag::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index!(
                rel_post_tag::Entity,
                rel_post_tag::Column::PostId,
                rel_post_tag::Column::TagId
            ))
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-rel_post_tag-tag_id")
                    .table(rel_post_tag::Entity)
                    .col(rel_post_tag::Column::TagId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(rel_post_tag::Entity).to_owned())
            .await
    }
}
