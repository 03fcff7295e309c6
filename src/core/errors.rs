use std::fmt;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

// UnknownUser and WrongPassword share one message text and differ only
// in status code.
#[derive(Debug)]
pub enum ApiError {
    InvalidId,
    NotFound(String),
    UnknownUser,
    WrongPassword,
    Internal(anyhow::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidId => write!(f, "Invalid post id"),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::UnknownUser | ApiError::WrongPassword => {
                write!(f, "Invalid username or password")
            }
            ApiError::Internal(_) => write!(f, "An unexpected error occurred"),
        }
    }
}

impl std::error::Error for ApiError {}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnknownUser => StatusCode::BAD_REQUEST,
            ApiError::WrongPassword => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(source) = self {
            tracing::error!(error = %source, "request failed");
        }
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::Internal(err.into())
    }
}
