use serde::{Deserialize, Serialize};

use crate::app::models::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Success { image_url: String },
    Failure { error: String },
}

impl From<Result<String, ApiError>> for GenerationResult {
    fn from(result: Result<String, ApiError>) -> Self {
        match result {
            Ok(image_url) => Self::Success { image_url },
            Err(e) => Self::Failure { error: e.message },
        }
    }
}

/// Wire shape of a [`GenerationResult`]: `imageUrl` is present iff `success`,
/// `error` iff not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<GenerationResult> for GenerateImageResponse {
    fn from(result: GenerationResult) -> Self {
        match result {
            GenerationResult::Success { image_url } => Self {
                success: true,
                image_url: Some(image_url),
                error: None,
            },
            GenerationResult::Failure { error } => Self {
                success: false,
                image_url: None,
                error: Some(error),
            },
        }
    }
}
