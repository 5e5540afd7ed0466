use blog_core::source::{ArchiveMonth, NamedCount, PostStore, PostSummary};
use serde::Serialize;

use crate::error::ProcessError;

pub const RECENT_POSTS: u64 = 5;

#[derive(Debug, Serialize)]
pub struct Sidebar {
    pub recent_posts: Vec<PostSummary>,
    pub archives: Vec<ArchiveMonth>,
    pub categories: Vec<NamedCount>,
    pub tags: Vec<NamedCount>,
}

pub async fn sidebar<S>(store: &S) -> Result<Sidebar, ProcessError>
where
    S: PostStore + ?Sized,
{
    Ok(Sidebar {
        recent_posts: store.recent_posts(RECENT_POSTS).await?,
        archives: store.archives().await?,
        categories: store.categories().await?,
        tags: store.tags().await?,
    })
}
