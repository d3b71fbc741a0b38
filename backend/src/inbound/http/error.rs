//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting actix handlers
//! turn domain failures into consistent JSON responses and status codes.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode};
use crate::middleware::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        Error::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let trace_id = TraceId::current().map(|id| id.to_string());
        if status.is_server_error() {
            error!(
                trace_id = trace_id.as_deref().unwrap_or("-"),
                code = ?self.code(),
                message = self.message(),
                "request failed"
            );
        }
        HttpResponse::build(status).json(redact_if_internal(self))
    }
}

/// Render JSON body rejections as domain `invalid_request` errors.
///
/// Registered through `web::JsonConfig::error_handler`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected request body");
    Error::invalid_request("request body is not valid JSON for this endpoint")
        .with_details(json!({ "code": "malformed_body" }))
        .into()
}
