//! Request tracing middleware.
//!
//! Every request gets a fresh UUID `trace_id`. It is held in task-local
//! storage while the handler runs, recorded on the request span, and echoed
//! to the client in the `trace-id` response header.
//!
//! Task-locals do not follow work onto spawned tasks or blocking threads;
//! wrap such work in [`TraceId::scope`] when correlation matters.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use tokio::task_local;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static TRACE_ID: TraceId;
}

/// Per-request trace identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier of the request being served, if any.
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` in scope.
    ///
    /// # Examples
    /// ```
    /// use fleet_backend::middleware::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id: TraceId = "00000000-0000-0000-0000-000000000000".parse().unwrap();
    /// assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Middleware function: install with `App::new().wrap(from_fn(trace_requests))`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use actix_web::middleware::from_fn;
/// use fleet_backend::middleware::trace_requests;
///
/// let _app = App::new().wrap(from_fn(trace_requests));
/// ```
pub async fn trace_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let trace_id = TraceId::generate();
    let span = info_span!(
        "http_request",
        %trace_id,
        method = %req.method(),
        path = %req.path(),
    );

    let mut res = TraceId::scope(trace_id, next.call(req))
        .instrument(span.clone())
        .await?;

    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(error) => {
            error!(parent: &span, %error, "failed to encode trace identifier header");
        }
    }
    info!(parent: &span, status = res.status().as_u16(), "request completed");
    Ok(res)
}
