use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use super::models::generation_request::GenerationRequest;

pub mod placeholder;

/// A backend that turns a validated request into an image url.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ApiError>;
}
