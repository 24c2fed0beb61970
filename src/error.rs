use {
    actix_web::{http::StatusCode, HttpResponse, ResponseError},
    serde::Serialize,
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors surfaced to callers of the HTTP API.
///
/// The `Display` text is the public message; internal detail is logged by the
/// handler and never rendered into a response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing userId")]
    MissingParameter,

    #[error("Error contacting Roblox catalog")]
    ExternalService,

    #[error("Server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter => StatusCode::BAD_REQUEST,
            ApiError::ExternalService | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Status(_) => ApiError::ExternalService,
            CatalogError::Transport(_) => ApiError::Internal,
        }
    }
}
