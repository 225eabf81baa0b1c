//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent plain-text responses and
//! status codes.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Body sent with every 404 response.
pub const NOT_FOUND_BODY: &str = "Resource not found.";
/// Body sent with every 500 response; internal detail is never exposed.
pub const INTERNAL_ERROR_BODY: &str = "An error occurred in the server.";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_body(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::NotFound => NOT_FOUND_BODY,
        ErrorCode::InternalError => INTERNAL_ERROR_BODY,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!(
                trace_id = self.trace_id(),
                detail = self.message(),
                "request failed"
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        builder.insert_header(ContentType::plaintext());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.body(public_body(self.code()))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        debug!(error = %err, "actix error promoted to domain error");
        Error::internal(err.to_string())
    }
}
