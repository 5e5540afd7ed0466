use blog_core::source::{PostDetail, PostStore};

use crate::error::ProcessError;

/// Loads a post and counts the visit.
pub async fn post_detail<S>(store: &S, id: i64) -> Result<PostDetail, ProcessError>
where
    S: PostStore + ?Sized,
{
    let mut detail = store
        .post(id)
        .await?
        .ok_or(ProcessError::NoSuchPost(id.to_string()))?;

    store.increase_views(id).await?;
    detail.post.views += 1;
    Ok(detail)
}
