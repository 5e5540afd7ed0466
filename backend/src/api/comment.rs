use blog_core::model as sqlm;
use blog_core::source::{NewComment, PostStore};
use blog_core::BlogError;
use serde::Serialize;

use crate::error::ProcessError;

#[derive(Debug, Serialize)]
pub struct CommentCreated {
    pub comment: sqlm::comment::Model,
    /// Where the client goes next, the post the comment belongs to.
    pub redirect: String,
}

fn check_required(comment: &NewComment) -> Result<(), ProcessError> {
    let missing: Vec<&str> = [
        ("name", &comment.name),
        ("email", &comment.email),
        ("text", &comment.text),
    ]
    .into_iter()
    .filter(|(_, v)| v.trim().is_empty())
    .map(|(k, _)| k)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProcessError::MissingFields(missing.join(", ")))
    }
}

pub async fn add_comment<S>(
    store: &S,
    post_id: i64,
    data: &[u8],
) -> Result<CommentCreated, ProcessError>
where
    S: PostStore + ?Sized,
{
    let comment: NewComment =
        serde_json::from_slice(data).map_err(|e| ProcessError::BadRequest(e.to_string()))?;
    check_required(&comment)?;

    let comment = match store.add_comment(post_id, comment).await {
        Ok(c) => c,
        Err(BlogError::NotFound) => return Err(ProcessError::NoSuchPost(post_id.to_string())),
        Err(e) => return Err(e.into()),
    };
    log::info!("new comment {} on post {}", comment.id, post_id);

    Ok(CommentCreated {
        comment,
        redirect: format!("/post/{}", post_id),
    })
}
