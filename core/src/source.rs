//! Read and write access to posts, expressed as traits so listing and detail
//! handlers only depend on what they call.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{category, comment, post, tag};
use crate::Result;

/// Which posts a listing shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostFilter {
    All,
    Archive { year: i32, month: u32 },
    Category(i64),
    Tag(i64),
    /// Case-insensitive substring of the title or the body.
    Search(String),
}

impl PostFilter {
    /// Half-open `[start, end)` range covered by an archive month, `None` for
    /// a month that does not exist.
    pub fn month_bounds(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;
        let (next_year, next_month) = if month == 12 {
            (year.checked_add(1)?, 1)
        } else {
            (year, month + 1)
        };
        let end = Utc
            .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
            .single()?;
        Some((start, end))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub created_time: DateTime<Utc>,
    pub views: i64,
    pub category: Option<category::Model>,
    pub author: Option<String>,
    pub url: String,
}

impl PostSummary {
    pub fn new(post: post::Model, category: Option<category::Model>, author: Option<String>) -> Self {
        Self {
            url: post.absolute_url(),
            id: post.id,
            title: post.title,
            excerpt: post.excerpt,
            created_time: post.created_time,
            views: post.views,
            category,
            author,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostDetail {
    pub post: post::Model,
    pub url: String,
    pub category: Option<category::Model>,
    pub author: Option<String>,
    pub tags: Vec<tag::Model>,
    pub comments: Vec<comment::Model>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ArchiveMonth {
    pub year: i32,
    pub month: u32,
}

impl ArchiveMonth {
    pub fn url(&self) -> String {
        format!("/archives/{}/{}", self.year, self.month)
    }
}

impl From<DateTime<Utc>> for ArchiveMonth {
    fn from(t: DateTime<Utc>) -> Self {
        Self {
            year: t.year(),
            month: t.month(),
        }
    }
}

/// A category or tag with the number of posts filed under it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamedCount {
    pub id: i64,
    pub name: String,
    pub num_posts: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub url: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub excerpt: String,
    pub category_id: i64,
    pub author_id: i64,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
}

/// Item-count and page-fetch providers for post listings. Results are
/// ordered newest first.
#[async_trait::async_trait]
pub trait PostSource: Send + Sync {
    async fn count(&self, filter: &PostFilter) -> Result<u64>;
    async fn fetch(&self, filter: &PostFilter, offset: u64, limit: u64)
        -> Result<Vec<PostSummary>>;
}

#[async_trait::async_trait]
pub trait PostStore: PostSource {
    async fn post(&self, id: i64) -> Result<Option<PostDetail>>;
    async fn increase_views(&self, id: i64) -> Result<()>;
    async fn save_post(&self, post: NewPost) -> Result<post::Model>;

    async fn category(&self, id: i64) -> Result<Option<category::Model>>;
    async fn tag(&self, id: i64) -> Result<Option<tag::Model>>;

    /// Comments of a post in the order they were posted.
    async fn comments(&self, post_id: i64) -> Result<Vec<comment::Model>>;
    async fn add_comment(&self, post_id: i64, comment: NewComment) -> Result<comment::Model>;

    async fn recent_posts(&self, num: u64) -> Result<Vec<PostSummary>>;
    async fn archives(&self) -> Result<Vec<ArchiveMonth>>;
    /// Categories with at least one post.
    async fn categories(&self) -> Result<Vec<NamedCount>>;
    /// Tags with at least one post.
    async fn tags(&self) -> Result<Vec<NamedCount>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        let (start, end) = PostFilter::month_bounds(2017, 12).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2017, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap());

        assert!(PostFilter::month_bounds(2017, 0).is_none());
        assert!(PostFilter::month_bounds(2017, 13).is_none());
    }

    #[test]
    fn test_archive_month() {
        let t = Utc.with_ymd_and_hms(2017, 5, 20, 8, 30, 0).unwrap();
        let m = ArchiveMonth::from(t);
        assert_eq!(m, ArchiveMonth { year: 2017, month: 5 });
        assert_eq!(m.url(), "/archives/2017/5");
    }
}
