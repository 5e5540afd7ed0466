use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder;
use log::{info, warn};
use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tracing::Instrument;

use crate::api::process_http::process_http;
use crate::context::BackendContext;

/// Accepts connections until `shutdown` resolves, then waits for the open
/// connections to finish their current request.
pub async fn serve<F>(
    listener: TcpListener,
    ctx: Arc<BackendContext>,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()>,
{
    let mut conns = JoinSet::new();
    let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
    tokio::pin!(shutdown);

    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(v) => v,
                Err(e) => {
                    warn!("accept failed: {}", e);
                    continue;
                }
            },
            _ = &mut shutdown => break,
        };

        let ctx = ctx.clone();
        let mut stop_rx = stop_rx.clone();
        conns.spawn(
            async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let ctx = ctx.clone();
                    let span = tracing::info_span!("request", method = %req.method(), path = %req.uri().path());
                    async move { Ok::<_, Infallible>(process_http(&ctx, req).await) }.instrument(span)
                });

                let builder = Builder::new(TokioExecutor::new());
                let conn = builder.serve_connection(TokioIo::new(stream), service);
                tokio::pin!(conn);

                let res = tokio::select! {
                    res = conn.as_mut() => res,
                    _ = stop_rx.changed() => {
                        conn.as_mut().graceful_shutdown();
                        conn.await
                    }
                };
                if let Err(e) = res {
                    log::debug!("connection error: {}", e);
                }
            }
            .instrument(tracing::debug_span!("conn", %peer)),
        );

        // reap finished connections
        while conns.try_join_next().is_some() {}
    }

    info!("shutting down, {} connections open", conns.len());
    let _ = stop_tx.send(true);
    while conns.join_next().await.is_some() {}
    Ok(())
}
