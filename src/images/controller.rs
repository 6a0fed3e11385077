use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::{app::models::json_from_request::JsonFromRequest, AppState};

use super::{
    dtos::generate_image_dto::GenerateImageDto,
    models::generation_result::{GenerateImageResponse, GenerationResult},
    service,
};

pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> (StatusCode, Json<GenerateImageResponse>) {
    let result = service::generate_image(&dto, &state.generator).await;
    let code = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => e.code,
    };

    (code, Json(GenerationResult::from(result).into()))
}
