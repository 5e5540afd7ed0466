use blog_core::model as sqlm;
use blog_core::pagination::{Page, PageLinks, PageRequest, Paginator};
use blog_core::source::{ArchiveMonth, PostFilter, PostSource, PostStore, PostSummary};
use serde::Serialize;

use crate::error::ProcessError;

pub const EMPTY_QUERY_MSG: &str = "Please enter a keyword";

/// What a listing is scoped to, echoed back for the page heading.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scope {
    All,
    Archive(ArchiveMonth),
    Category(sqlm::category::Model),
    Tag(sqlm::tag::Model),
    Search { q: String },
}

#[derive(Debug, Serialize)]
pub struct PostList {
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
    pub page: Page<PostSummary>,
    pub links: PageLinks,
}

/// Resolves the requested page against the filter's item count and fetches
/// that page. Shared by every listing.
pub async fn list_posts<S>(
    source: &S,
    paginator: &Paginator,
    filter: &PostFilter,
    request: PageRequest,
    base_path: &str,
) -> Result<(Page<PostSummary>, PageLinks), ProcessError>
where
    S: PostSource + ?Sized,
{
    let total = source.count(filter).await?;
    let slot = paginator.resolve(request, total)?;
    let items = source.fetch(filter, slot.offset, slot.limit).await?;
    log::debug!(
        "list {:?}: page {}/{}, {} items",
        filter,
        slot.number,
        slot.total_pages,
        items.len()
    );

    let page = paginator.page(items, slot, total)?;
    let links = page.links(base_path);
    Ok((page, links))
}

async fn scoped<S>(
    source: &S,
    paginator: &Paginator,
    scope: Scope,
    filter: PostFilter,
    request: PageRequest,
    base_path: &str,
) -> Result<PostList, ProcessError>
where
    S: PostSource + ?Sized,
{
    let (page, links) = list_posts(source, paginator, &filter, request, base_path).await?;
    Ok(PostList {
        scope,
        error_msg: None,
        page,
        links,
    })
}

pub async fn index<S>(
    source: &S,
    paginator: &Paginator,
    request: PageRequest,
) -> Result<PostList, ProcessError>
where
    S: PostSource + ?Sized,
{
    scoped(source, paginator, Scope::All, PostFilter::All, request, "/list").await
}

pub async fn archives<S>(
    source: &S,
    paginator: &Paginator,
    year: i32,
    month: u32,
    request: PageRequest,
) -> Result<PostList, ProcessError>
where
    S: PostSource + ?Sized,
{
    if PostFilter::month_bounds(year, month).is_none() {
        return Err(ProcessError::WrongDate(format!("{}/{}", year, month)));
    }
    let archive = ArchiveMonth { year, month };
    scoped(
        source,
        paginator,
        Scope::Archive(archive),
        PostFilter::Archive { year, month },
        request,
        &archive.url(),
    )
    .await
}

pub async fn category<S>(
    store: &S,
    paginator: &Paginator,
    id: i64,
    request: PageRequest,
) -> Result<PostList, ProcessError>
where
    S: PostStore + ?Sized,
{
    let cate = store
        .category(id)
        .await?
        .ok_or(ProcessError::NoSuchCategory(id.to_string()))?;
    scoped(
        store,
        paginator,
        Scope::Category(cate),
        PostFilter::Category(id),
        request,
        &format!("/category/{}", id),
    )
    .await
}

pub async fn tag<S>(
    store: &S,
    paginator: &Paginator,
    id: i64,
    request: PageRequest,
) -> Result<PostList, ProcessError>
where
    S: PostStore + ?Sized,
{
    let tag = store
        .tag(id)
        .await?
        .ok_or(ProcessError::NoSuchTag(id.to_string()))?;
    scoped(
        store,
        paginator,
        Scope::Tag(tag),
        PostFilter::Tag(id),
        request,
        &format!("/tag/{}", id),
    )
    .await
}

/// Title or body search. An empty query is not an error, it answers with a
/// message and no posts.
pub async fn search<S>(
    source: &S,
    paginator: &Paginator,
    q: Option<&str>,
    request: PageRequest,
) -> Result<PostList, ProcessError>
where
    S: PostSource + ?Sized,
{
    let q = q.map(str::trim).unwrap_or_default();
    if q.is_empty() {
        let slot = paginator.resolve(PageRequest::default(), 0)?;
        return Ok(PostList {
            scope: Scope::Search { q: String::new() },
            error_msg: Some(EMPTY_QUERY_MSG.to_string()),
            page: paginator.page(Vec::new(), slot, 0)?,
            links: PageLinks::default(),
        });
    }

    let base_path = match serde_urlencoded::to_string([("q", q)]) {
        Ok(query) => format!("/search?{}", query),
        Err(e) => return Err(ProcessError::BadRequest(e.to_string())),
    };
    scoped(
        source,
        paginator,
        Scope::Search { q: q.to_string() },
        PostFilter::Search(q.to_string()),
        request,
        &base_path,
    )
    .await
}
