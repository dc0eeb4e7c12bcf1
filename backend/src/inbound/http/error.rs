//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Extractor rejections (bad query strings, paths, or JSON bodies) are
//! routed through the same payload so clients see one error shape.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(
                trace_id = self.trace_id().unwrap_or_default(),
                message = self.message(),
                "internal error redacted from response"
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

fn rejected(message: &str, reason: impl ToString) -> actix_web::Error {
    Error::invalid_request(message)
        .with_details(json!({ "reason": reason.to_string() }))
        .into()
}

fn reject_query(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejected("invalid query parameters", err)
}

fn reject_path(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    rejected("invalid path parameters", err)
}

fn reject_json(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejected("invalid JSON body", err)
}

/// Query extractor configuration reporting decode failures as `400`.
pub fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(reject_query)
}

/// Path extractor configuration reporting decode failures as `400`.
pub fn path_config() -> PathConfig {
    PathConfig::default().error_handler(reject_path)
}

/// JSON body extractor configuration reporting decode failures as `400`.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(reject_json)
}
