use std::sync::Arc;

use tokio::task::JoinError;

use crate::app::models::api_error::ApiError;

use super::{
    apis::ImageGenerator, dtos::generate_image_dto::GenerateImageDto,
    enums::generation_status::GenerationStatus, errors::ImagesApiError,
};

pub async fn generate_image(
    dto: &GenerateImageDto,
    generator: &Arc<dyn ImageGenerator>,
) -> Result<String, ApiError> {
    let request = match dto.to_request() {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e.message, "rejected generate image request");
            return Err(e);
        }
    };

    tracing::debug!(
        status = GenerationStatus::Pending.value(),
        width = request.width(),
        height = request.height(),
        style = request.style().unwrap_or_default(),
        "generating image"
    );

    // a panic inside the generator surfaces as a JoinError instead of
    // unwinding through the handler
    let generator = Arc::clone(generator);
    let task = tokio::spawn(async move { generator.generate(&request).await });

    let result = match task.await {
        Ok(Ok(image_url)) => Ok(image_url),
        Ok(Err(e)) => {
            tracing::error!(code = %e.code, message = %e.message, "image generator failed");
            Err(generation_failed(Some(e.message)))
        }
        Err(e) => {
            tracing::error!(%e, "image generation task aborted");
            Err(generation_failed(panic_message(e)))
        }
    };

    tracing::debug!(
        status = GenerationStatus::Resolved.value(),
        success = result.is_ok(),
        "generated image"
    );

    result
}

fn generation_failed(message: Option<String>) -> ApiError {
    let mut e = ImagesApiError::GenerationFailed.value();

    if let Some(message) = message.filter(|m| !m.trim().is_empty()) {
        e.message = message;
    }

    e
}

fn panic_message(e: JoinError) -> Option<String> {
    let Ok(payload) = e.try_into_panic()
    else {
        return None;
    };

    if let Some(message) = payload.downcast_ref::<&str>() {
        return Some(message.to_string());
    }

    payload.downcast_ref::<String>().cloned()
}

#[cfg(test)]
mod tests {
    use std::{panic, time::Duration};

    use async_trait::async_trait;
    use axum::http::StatusCode;

    use super::*;
    use crate::images::{
        apis::placeholder::PlaceholderGenerator,
        models::{generation_request::GenerationRequest, generation_result::GenerationResult},
    };

    struct FailingGenerator {
        message: &'static str,
    }

    #[async_trait]
    impl ImageGenerator for FailingGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, ApiError> {
            Err(ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: self.message.to_string(),
            })
        }
    }

    struct PanickingGenerator;

    #[async_trait]
    impl ImageGenerator for PanickingGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, ApiError> {
            panic!("upstream exploded")
        }
    }

    struct SilentPanicGenerator;

    #[async_trait]
    impl ImageGenerator for SilentPanicGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, ApiError> {
            panic::panic_any(42_u8)
        }
    }

    async fn generate_image_result(
        dto: &GenerateImageDto,
        generator: &Arc<dyn ImageGenerator>,
    ) -> GenerationResult {
        generate_image(dto, generator).await.into()
    }

    fn placeholder() -> Arc<dyn ImageGenerator> {
        Arc::new(PlaceholderGenerator::new(Duration::ZERO))
    }

    fn dto(prompt: &str, width: Option<i64>, height: Option<i64>) -> GenerateImageDto {
        GenerateImageDto {
            prompt: Some(prompt.to_string()),
            style: None,
            width,
            height,
        }
    }

    #[tokio::test]
    async fn sunset_resolves_to_placeholder_url() {
        let result = generate_image_result(&dto("sunset", Some(512), Some(512)), &placeholder()).await;

        assert_eq!(
            result,
            GenerationResult::Success {
                image_url: "https://placehold.co/512x512/6366f1/ffffff?text=sunset".to_string()
            }
        );
    }

    #[tokio::test]
    async fn empty_prompt_fails_without_calling_generator() {
        let generator: Arc<dyn ImageGenerator> = Arc::new(PanickingGenerator);
        let result = generate_image_result(&dto("", Some(512), Some(512)), &generator).await;

        assert_eq!(
            result,
            GenerationResult::Failure {
                error: "Prompt is required".to_string()
            }
        );
    }

    #[tokio::test]
    async fn oversized_width_fails_with_bound_message() {
        let e = generate_image(&dto("x", Some(2000), Some(512)), &placeholder())
            .await
            .unwrap_err();

        assert_eq!(e.code, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Width must be less than or equal to 1024");
    }

    #[tokio::test]
    async fn generator_error_message_is_kept() {
        let generator: Arc<dyn ImageGenerator> = Arc::new(FailingGenerator {
            message: "upstream unavailable",
        });
        let e = generate_image(&dto("sunset", None, None), &generator)
            .await
            .unwrap_err();

        assert_eq!(e.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "upstream unavailable");
    }

    #[tokio::test]
    async fn generator_error_without_message_falls_back() {
        let generator: Arc<dyn ImageGenerator> = Arc::new(FailingGenerator { message: "" });
        let result = generate_image_result(&dto("sunset", None, None), &generator).await;

        assert_eq!(
            result,
            GenerationResult::Failure {
                error: "Failed to generate image".to_string()
            }
        );
    }

    #[tokio::test]
    async fn generator_panic_becomes_failure() {
        let generator: Arc<dyn ImageGenerator> = Arc::new(PanickingGenerator);
        let result = generate_image_result(&dto("sunset", None, None), &generator).await;

        assert_eq!(
            result,
            GenerationResult::Failure {
                error: "upstream exploded".to_string()
            }
        );
    }

    #[tokio::test]
    async fn panic_without_message_falls_back() {
        let generator: Arc<dyn ImageGenerator> = Arc::new(SilentPanicGenerator);
        let result = generate_image_result(&dto("sunset", None, None), &generator).await;

        assert_eq!(
            result,
            GenerationResult::Failure {
                error: "Failed to generate image".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_calls_are_not_serialized() {
        let generator: Arc<dyn ImageGenerator> =
            Arc::new(PlaceholderGenerator::new(Duration::from_millis(2000)));
        let first = dto("first", None, None);
        let second = dto("second", None, None);

        let started = tokio::time::Instant::now();
        let (a, b) = tokio::join!(
            generate_image(&first, &generator),
            generate_image(&second, &generator)
        );

        assert!(started.elapsed() < Duration::from_millis(4000));
        assert!(a.unwrap().ends_with("?text=first"));
        assert!(b.unwrap().ends_with("?text=second"));
    }
}
