use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use nudge_domain::{InvalidIDError, LifecycleError};
use thiserror::Error;

/// Error returned by every route. The body is the plain-text message.
#[derive(Error, Debug, PartialEq)]
pub enum NudgeError {
    #[error("Something went wrong on our side, please try again later")]
    InternalError,
    #[error("Bad request: {0}")]
    BadClientData(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<InvalidIDError> for NudgeError {
    fn from(e: InvalidIDError) -> Self {
        Self::BadClientData(e.to_string())
    }
}

impl From<LifecycleError> for NudgeError {
    fn from(e: LifecycleError) -> Self {
        Self::BadClientData(e.to_string())
    }
}

impl ResponseError for NudgeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
