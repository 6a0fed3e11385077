use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::{
    app::{config, models::api_error::ApiError},
    images::models::generation_request::GenerationRequest,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[validate(
        required(message = "Prompt is required"),
        length(min = 1, message = "Prompt is required"),
        length(max = 500, message = "Prompt must be less than 500 characters")
    )]
    pub prompt: Option<String>,
    pub style: Option<String>,
    #[validate(
        range(min = 256, message = "Width must be greater than or equal to 256"),
        range(max = 1024, message = "Width must be less than or equal to 1024")
    )]
    pub width: Option<i64>,
    #[validate(
        range(min = 256, message = "Height must be greater than or equal to 256"),
        range(max = 1024, message = "Height must be less than or equal to 1024")
    )]
    pub height: Option<i64>,
}

impl GenerateImageDto {
    /// Validates the dto and fills in default dimensions.
    ///
    /// When several fields are invalid, the reported error follows field
    /// order: prompt, width, height.
    pub fn to_request(&self) -> Result<GenerationRequest, ApiError> {
        if let Err(e) = self.validate() {
            return Err(first_violation(&e));
        }

        let (Some(prompt), Ok(width), Ok(height)) = (
            &self.prompt,
            u32::try_from(self.width.unwrap_or(config::DEFAULT_DIMENSION.into())),
            u32::try_from(self.height.unwrap_or(config::DEFAULT_DIMENSION.into())),
        )
        else {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid generate image request".to_string(),
            });
        };

        Ok(GenerationRequest::new(
            prompt.to_string(),
            self.style.to_owned(),
            width,
            height,
        ))
    }
}

fn first_violation(e: &ValidationErrors) -> ApiError {
    let errors = e.field_errors();

    let message = ["prompt", "width", "height"]
        .iter()
        .filter_map(|field| errors.get(field))
        .filter_map(|field_errors| field_errors.first())
        .find_map(|error| error.message.as_ref())
        .map(|message| message.to_string())
        .unwrap_or_else(|| e.to_string());

    ApiError {
        code: StatusCode::BAD_REQUEST,
        message,
    }
}
