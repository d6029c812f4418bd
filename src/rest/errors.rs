use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};

/// Handler-level error taxonomy. Every error is converted at the boundary to
/// a JSON body `{"error": <message>}`; internal detail is logged, never
/// returned to the caller.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    #[display("{_0}")]
    Validation(#[error(not(source))] String),
    #[display("not found")]
    NotFound,
    #[display("internal server error")]
    Internal(#[error(not(source))] String),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl web::error::WebResponseError for ApiError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        if let ApiError::Internal(detail) = self {
            error!("internal error: {}", detail);
        }

        web::HttpResponse::build(self.status_code())
            .json(&serde_json::json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            ApiError::Validation(_) => http::StatusCode::BAD_REQUEST,
            ApiError::NotFound => http::StatusCode::NOT_FOUND,
            ApiError::Internal(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
