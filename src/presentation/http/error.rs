// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const BAD_REQUEST: &str = "Bad request";
const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::MalformedInput(msg) | ApplicationError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
                DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
                DomainError::Persistence(msg) => Self::internal(&msg),
            },
        }
    }

    /// Rejection for ids and bodies that do not parse.
    pub fn bad_request() -> Self {
        Self::from_error(ApplicationError::malformed(BAD_REQUEST))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::from_error(ApplicationError::not_found(msg))
    }

    fn internal(cause: &str) -> Self {
        // The cause stays in the logs; clients get a generic message.
        tracing::error!(error = %cause, "unclassified storage failure");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Client-facing message in the `<code>: <reason>` form.
    pub fn msg(&self) -> String {
        format!("{}: {}", self.status.as_u16(), self.message)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse { msg: self.msg() };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub msg: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
