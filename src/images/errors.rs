use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    GenerationFailed,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to generate image".to_string(),
            },
        }
    }
}
