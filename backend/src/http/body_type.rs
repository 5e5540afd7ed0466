use http_body_util::{combinators, BodyExt, Full};
use hyper::body::{Body, Bytes, Frame};
use hyper::header::{self, HeaderValue};
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::pin::Pin;

use crate::error::{HttpError, ProcessError};

/// Type for synthetic boxed body
pub type BoxBody = combinators::BoxBody<Bytes, HttpError>;

/// helper function to build a full body
pub(crate) fn full(body: Bytes) -> BoxBody {
    Full::new(body).map_err(|never| match never {}).boxed()
}

/// Response body use in this project
/// - Empty: no payload.
/// - Boxed: a synthetic body built in memory, e.g. a json document.
pub enum ResponseBody {
    Empty,
    Boxed(BoxBody),
}

impl Body for ResponseBody {
    type Data = Bytes;
    type Error = ProcessError;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        match self.get_mut() {
            ResponseBody::Empty => std::task::Poll::Ready(None),
            ResponseBody::Boxed(boxed) => Pin::new(boxed).poll_frame(cx).map_err(|e| e.into()),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            ResponseBody::Empty => true,
            ResponseBody::Boxed(boxed) => boxed.is_end_stream(),
        }
    }

    fn size_hint(&self) -> hyper::body::SizeHint {
        match self {
            ResponseBody::Empty => hyper::body::SizeHint::with_exact(0),
            ResponseBody::Boxed(boxed) => boxed.size_hint(),
        }
    }
}

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

pub fn json<T: Serialize>(
    status: StatusCode,
    value: &T,
) -> Result<Response<ResponseBody>, ProcessError> {
    let data = serde_json::to_vec(value)?;
    Ok(Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, APPLICATION_JSON)
        .body(ResponseBody::Boxed(full(Bytes::from(data))))?)
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: u16,
    message: &'a str,
}

/// Renders an error as `{ "code": .., "message": .. }`. Never fails, falls
/// back to an empty body with the same status.
pub fn error_response(e: &ProcessError) -> Response<ResponseBody> {
    let status = e.status();
    let message = e.to_string();
    json(
        status,
        &ErrorBody {
            code: status.as_u16(),
            message: &message,
        },
    )
    .unwrap_or_else(|_| {
        let mut rsp = Response::new(ResponseBody::Empty);
        *rsp.status_mut() = status;
        rsp
    })
}
