//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting actix handlers
//! turn failures into consistent JSON responses and status codes. Store
//! errors are logged but never echoed to clients.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use tracing::error;

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &Error) -> Error {
    if matches!(err.code(), ErrorCode::InternalError) {
        Error::internal("Internal server error")
    } else {
        err.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

/// JSON extractor configuration routing syntactically malformed bodies
/// through the standard error envelope instead of actix's plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid JSON body: {err}")).into()
    })
}

/// Form extractor configuration matching [`json_config`].
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid form body: {err}")).into()
    })
}

/// Map repository failures onto the internal-error envelope.
///
/// The upstream message is logged but never forwarded to clients.
pub fn map_store_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user repository operation failed");
    Error::internal(err.to_string())
}
