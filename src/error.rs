use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("seriesCount must be a positive integer, got {0}")]
    InvalidSeriesCount(i32),

    #[error("No drawing is linked to resource {resource_type}/{resource_id}")]
    DrawingNotLinked {
        resource_type: String,
        resource_id: String,
    },
}

impl actix_web::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidSeriesCount(_) => StatusCode::BAD_REQUEST,
            ServiceError::DrawingNotLinked { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
