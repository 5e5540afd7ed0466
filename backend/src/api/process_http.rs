use http_body_util::{BodyExt, Limited};
use hyper::body::Body;
use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;

use super::pagination::PageParams;
use super::{comment, detail, listing, sidebar};
use crate::context::BackendContext;
use crate::error::{HttpError, ProcessError};
use crate::http::body_type::{error_response, json, ResponseBody};

const SECURE_MAX_SIZE: usize = 64 * 1024;

fn parse_id(id: &str) -> Result<i64, ProcessError> {
    id.parse()
        .map_err(|_| ProcessError::WrongId(id.to_string()))
}

async fn read_body<B>(body: B) -> Result<hyper::body::Bytes, ProcessError>
where
    B: Body,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let collected = Limited::new(body, SECURE_MAX_SIZE)
        .collect()
        .await
        .map_err(|e| {
            if e.is::<http_body_util::LengthLimitError>() {
                HttpError::TooLarge(SECURE_MAX_SIZE)
            } else {
                HttpError::Body(e.to_string())
            }
        })?;
    Ok(collected.to_bytes())
}

pub async fn process_http_get(
    ctx: &Arc<BackendContext>,
    path: &[&str],
    query: Option<&str>,
) -> Result<Response<ResponseBody>, ProcessError> {
    let store = ctx.store.as_ref();
    let paginator = &ctx.config.paginator;
    let params = PageParams::from_query(query);

    match path {
        [] | ["list"] => json(
            StatusCode::OK,
            &listing::index(store, paginator, params.page).await?,
        ),
        ["post", id] => json(
            StatusCode::OK,
            &detail::post_detail(store, parse_id(id)?).await?,
        ),
        ["archives", year, month] => {
            let year: i32 = year
                .parse()
                .map_err(|_| ProcessError::WrongDate(format!("{}/{}", year, month)))?;
            let month: u32 = month
                .parse()
                .map_err(|_| ProcessError::WrongDate(format!("{}/{}", year, month)))?;
            json(
                StatusCode::OK,
                &listing::archives(store, paginator, year, month, params.page).await?,
            )
        }
        ["category", id] => json(
            StatusCode::OK,
            &listing::category(store, paginator, parse_id(id)?, params.page).await?,
        ),
        ["tag", id] => json(
            StatusCode::OK,
            &listing::tag(store, paginator, parse_id(id)?, params.page).await?,
        ),
        ["search"] => json(
            StatusCode::OK,
            &listing::search(store, paginator, params.q.as_deref(), params.page).await?,
        ),
        ["sidebar"] => json(StatusCode::OK, &sidebar::sidebar(store).await?),
        _ => Err(ProcessError::NotFound),
    }
}

pub async fn process_http_post<B>(
    ctx: &Arc<BackendContext>,
    path: &[&str],
    body: B,
) -> Result<Response<ResponseBody>, ProcessError>
where
    B: Body,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    match path {
        ["comment", "post", id] => {
            let post_id = parse_id(id)?;
            let data = read_body(body).await?;
            json(
                StatusCode::CREATED,
                &comment::add_comment(ctx.store.as_ref(), post_id, &data).await?,
            )
        }
        _ => Err(ProcessError::NotFound),
    }
}

/// Entry point for every request. Errors are rendered here, the caller always
/// gets a response.
pub async fn process_http<B>(ctx: &Arc<BackendContext>, req: Request<B>) -> Response<ResponseBody>
where
    B: Body,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let (parts, body) = req.into_parts();
    let path_segments: Vec<&str> = parts
        .uri
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    let rsp = match &parts.method {
        &Method::GET => process_http_get(ctx, &path_segments, parts.uri.query()).await,
        &Method::POST => process_http_post(ctx, &path_segments, body).await,
        _ => Err(ProcessError::NotFound),
    };

    match rsp {
        Ok(rsp) => rsp,
        Err(e) => {
            let rsp = error_response(&e);
            if rsp.status().is_server_error() {
                log::error!("{} {}: {}", parts.method, parts.uri, e);
            } else {
                log::debug!("{} {}: {}", parts.method, parts.uri, e);
            }
            rsp
        }
    }
}
