use blog_core::model as sqlm;
use blog_core::source::{
    ArchiveMonth, NamedCount, NewComment, NewPost, PostDetail, PostFilter, PostSource, PostStore,
    PostSummary,
};
use blog_core::{BlogError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    LoaderTrait, ModelTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set, TransactionTrait,
};

use super::filter::SelectPostFilter;

/// Post store over a sea-orm connection.
#[derive(Clone, Debug)]
pub struct DbStore {
    db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    id: i64,
    name: String,
    num_posts: i64,
}

impl From<CountRow> for NamedCount {
    fn from(r: CountRow) -> Self {
        NamedCount {
            id: r.id,
            name: r.name,
            num_posts: r.num_posts,
        }
    }
}

impl DbStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn summaries(&self, posts: Vec<sqlm::post::Model>) -> Result<Vec<PostSummary>> {
        let categories = posts.load_one(sqlm::category::Entity, &self.db).await?;
        let authors = posts.load_one(sqlm::user::Entity, &self.db).await?;

        Ok(posts
            .into_iter()
            .zip(categories)
            .zip(authors)
            .map(|((post, category), author)| {
                PostSummary::new(post, category, author.map(|a| a.username))
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl PostSource for DbStore {
    async fn count(&self, filter: &PostFilter) -> Result<u64> {
        let n = sqlm::post::Entity::find()
            .post_filter(filter)
            .count(&self.db)
            .await?;
        Ok(n)
    }

    async fn fetch(
        &self,
        filter: &PostFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PostSummary>> {
        let posts = sqlm::post::Entity::find()
            .post_filter(filter)
            .order_by_desc(sqlm::post::Column::CreatedTime)
            .order_by_desc(sqlm::post::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;
        self.summaries(posts).await
    }
}

#[async_trait::async_trait]
impl PostStore for DbStore {
    async fn post(&self, id: i64) -> Result<Option<PostDetail>> {
        let db = &self.db;
        let Some(post) = sqlm::post::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let category = post.find_related(sqlm::category::Entity).one(db).await?;
        let author = post
            .find_related(sqlm::user::Entity)
            .one(db)
            .await?
            .map(|u| u.username);
        let tags = post
            .find_related(sqlm::tag::Entity)
            .order_by_asc(sqlm::tag::Column::Id)
            .all(db)
            .await?;
        let comments = self.comments(post.id).await?;

        Ok(Some(PostDetail {
            url: post.absolute_url(),
            post,
            category,
            author,
            tags,
            comments,
        }))
    }

    async fn increase_views(&self, id: i64) -> Result<()> {
        let r = sqlm::post::Entity::update_many()
            .col_expr(
                sqlm::post::Column::Views,
                Expr::col(sqlm::post::Column::Views).add(1),
            )
            .filter(sqlm::post::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if r.rows_affected == 0 {
            return Err(BlogError::NotFound);
        }
        Ok(())
    }

    async fn save_post(&self, post: NewPost) -> Result<sqlm::post::Model> {
        let txn = self.db.begin().await?;

        let model = sqlm::post::ActiveModel {
            id: NotSet,
            title: Set(post.title),
            body: Set(post.body),
            excerpt: Set(post.excerpt),
            created_time: match post.created_time {
                Some(t) => Set(t),
                None => NotSet,
            },
            modified_time: NotSet,
            category_id: Set(post.category_id),
            author_id: Set(post.author_id),
            views: Set(0),
        }
        .insert(&txn)
        .await?;

        let rels = post
            .tag_ids
            .into_iter()
            .map(|tag_id| sqlm::rel_post_tag::ActiveModel {
                id: NotSet,
                post_id: Set(model.id),
                tag_id: Set(tag_id),
            });
        sqlm::rel_post_tag::Entity::insert_many(rels)
            .on_empty_do_nothing()
            .exec(&txn)
            .await?;

        txn.commit().await?;
        log::info!("saved post {}: {}", model.id, model.title);
        Ok(model)
    }

    async fn category(&self, id: i64) -> Result<Option<sqlm::category::Model>> {
        Ok(sqlm::category::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn tag(&self, id: i64) -> Result<Option<sqlm::tag::Model>> {
        Ok(sqlm::tag::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn comments(&self, post_id: i64) -> Result<Vec<sqlm::comment::Model>> {
        Ok(sqlm::comment::Entity::find()
            .filter(sqlm::comment::Column::PostId.eq(post_id))
            .order_by_asc(sqlm::comment::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn add_comment(&self, post_id: i64, comment: NewComment) -> Result<sqlm::comment::Model> {
        if sqlm::post::Entity::find_by_id(post_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(BlogError::NotFound);
        }

        let model = sqlm::comment::ActiveModel {
            id: NotSet,
            name: Set(comment.name),
            email: Set(comment.email),
            url: Set(comment.url),
            text: Set(comment.text),
            created_time: Set(chrono::Utc::now()),
            post_id: Set(post_id),
        }
        .insert(&self.db)
        .await?;
        Ok(model)
    }

    async fn recent_posts(&self, num: u64) -> Result<Vec<PostSummary>> {
        self.fetch(&PostFilter::All, 0, num).await
    }

    async fn archives(&self) -> Result<Vec<ArchiveMonth>> {
        let times: Vec<chrono::DateTime<chrono::Utc>> = sqlm::post::Entity::find()
            .select_only()
            .column(sqlm::post::Column::CreatedTime)
            .order_by_desc(sqlm::post::Column::CreatedTime)
            .into_tuple()
            .all(&self.db)
            .await?;

        let mut months: Vec<ArchiveMonth> = times.into_iter().map(ArchiveMonth::from).collect();
        months.dedup();
        Ok(months)
    }

    async fn categories(&self) -> Result<Vec<NamedCount>> {
        let rows = sqlm::category::Entity::find()
            .select_only()
            .column(sqlm::category::Column::Id)
            .column(sqlm::category::Column::Name)
            .column_as(
                Expr::col((sqlm::post::Entity, sqlm::post::Column::Id)).count(),
                "num_posts",
            )
            .join(JoinType::InnerJoin, sqlm::category::Relation::Post.def())
            .group_by(sqlm::category::Column::Id)
            .group_by(sqlm::category::Column::Name)
            .order_by_asc(sqlm::category::Column::Id)
            .into_model::<CountRow>()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(NamedCount::from).collect())
    }

    async fn tags(&self) -> Result<Vec<NamedCount>> {
        let rows = sqlm::tag::Entity::find()
            .select_only()
            .column(sqlm::tag::Column::Id)
            .column(sqlm::tag::Column::Name)
            .column_as(
                Expr::col((
                    sqlm::rel_post_tag::Entity,
                    sqlm::rel_post_tag::Column::PostId,
                ))
                .count(),
                "num_posts",
            )
            .join(JoinType::InnerJoin, sqlm::tag::Relation::RelPost.def())
            .group_by(sqlm::tag::Column::Id)
            .group_by(sqlm::tag::Column::Name)
            .order_by_asc(sqlm::tag::Column::Id)
            .into_model::<CountRow>()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(NamedCount::from).collect())
    }
}
