//! HTTP front end: every routed request becomes a redirect.

use crate::core::resolver::Resolver;
use crate::core::types::{Destination, CHAMPION_GG_BASE_URL, CHAMPION_GG_CHAMPION_URL_SUBPATH};
use crate::error::ServerError;
use crate::router::Route;
use bytes::Bytes;
use http::header::{ALLOW, LOCATION};
use http::{Method, Request, Response, StatusCode};
use http_body_util::Empty;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Upper bound on the buffered request head. hyper answers 431 beyond it.
const MAX_HEAD_BYTES: usize = 8 * 1024;

pub const DEFAULT_HEADER_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause after a failed accept, e.g. EMFILE, before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Characters that may not appear raw inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Location header value for a destination; each segment is percent-encoded
/// so pass-through user text stays inside its path segment.
pub fn encode_location(dest: &Destination) -> String {
    let mut location = format!(
        "{}{}{}",
        CHAMPION_GG_BASE_URL,
        CHAMPION_GG_CHAMPION_URL_SUBPATH,
        utf8_percent_encode(dest.champion.as_str(), SEGMENT)
    );
    if let Some(role) = dest.role {
        location.push('/');
        location.push_str(role.as_str());
    }
    location
}

/// Splits a percent-encoded URI path into decoded segments.
fn decode_path(path: &str) -> Option<Vec<String>> {
    let path = path.strip_prefix('/')?;
    path.split('/')
        .map(|seg| {
            percent_decode_str(seg)
                .decode_utf8()
                .ok()
                .map(|s| s.into_owned())
        })
        .collect()
}

fn status_only(status: StatusCode) -> Response<Empty<Bytes>> {
    let mut response = Response::new(Empty::new());
    *response.status_mut() = status;
    response
}

fn redirect(location: &str) -> Response<Empty<Bytes>> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(LOCATION, location)
        .body(Empty::new())
        .unwrap_or_else(|e| {
            log::error!("Could not build redirect to {:?}: {}", location, e);
            status_only(StatusCode::INTERNAL_SERVER_ERROR)
        })
}

/// Answers a single request. Only the method and the URI path matter, so
/// origin-form and absolute-form targets route the same way.
pub fn respond<B>(request: &Request<B>, resolver: &Resolver) -> Response<Empty<Bytes>> {
    let method = request.method();
    if method != Method::GET && method != Method::HEAD {
        let mut response = status_only(StatusCode::METHOD_NOT_ALLOWED);
        response
            .headers_mut()
            .insert(ALLOW, http::HeaderValue::from_static("GET, HEAD"));
        return response;
    }

    let path = request.uri().path();
    let segments = match decode_path(path) {
        Some(segments) => segments,
        None => {
            log::warn!("Undecodable request path: {:?}", path);
            return status_only(StatusCode::BAD_REQUEST);
        }
    };

    let location = match Route::from_segments(segments).resolve(resolver) {
        None => CHAMPION_GG_BASE_URL.to_string(),
        Some(dest) => encode_location(&dest),
    };
    log::debug!("{} {} -> {}", method, request.uri(), location);
    redirect(&location)
}

pub struct Server {
    listener: TcpListener,
    resolver: Arc<Resolver>,
    header_read_timeout: Duration,
}

impl Server {
    pub async fn bind(addr: SocketAddr, resolver: Arc<Resolver>) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        Ok(Self {
            listener,
            resolver,
            header_read_timeout: DEFAULT_HEADER_READ_TIMEOUT,
        })
    }

    /// Connections that have not sent a complete head within `timeout` are closed.
    pub fn header_read_timeout(mut self, timeout: Duration) -> Self {
        self.header_read_timeout = timeout;
        self
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until the task is dropped. One task per connection.
    /// Accept failures are logged and retried; they never stop the service.
    pub async fn run(self) -> Result<(), ServerError> {
        log::info!("Listening on http://{}", self.local_addr()?);
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    log::warn!("Accept failed: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            let resolver = Arc::clone(&self.resolver);
            let header_read_timeout = self.header_read_timeout;
            tokio::spawn(async move {
                let service = service_fn(move |request| {
                    let response = respond(&request, &resolver);
                    async move { Ok::<_, Infallible>(response) }
                });

                let result = http1::Builder::new()
                    .timer(TokioTimer::new())
                    .header_read_timeout(header_read_timeout)
                    .max_buf_size(MAX_HEAD_BYTES)
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
                if let Err(e) = result {
                    log::debug!("Connection from {} ended: {}", peer, e);
                }
            });
        }
    }
}
