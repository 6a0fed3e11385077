use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::{
    app::{config, models::api_error::ApiError},
    images::models::generation_request::GenerationRequest,
};

use super::ImageGenerator;

/// Mock generator. Waits `delay` to stand in for a network call, then
/// answers with a placehold.co url built from the request.
#[derive(Debug, Clone)]
pub struct PlaceholderGenerator {
    delay: Duration,
}

impl PlaceholderGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ImageGenerator for PlaceholderGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ApiError> {
        sleep(self.delay).await;

        Ok(placeholder_url(request))
    }
}

pub fn placeholder_url(request: &GenerationRequest) -> String {
    let text: String = request
        .prompt()
        .chars()
        .take(config::PLACEHOLDER_TEXT_LENGTH)
        .collect();

    format!(
        "{}/{}x{}/{}/{}?text={}",
        config::PLACEHOLDER_HOST,
        request.width(),
        request.height(),
        config::PLACEHOLDER_BACKGROUND,
        config::PLACEHOLDER_FOREGROUND,
        encode_uri_component(&text)
    )
}

/// Percent-encodes like `encodeURIComponent`: RFC 3986 unreserved characters
/// plus `!'()*` stay literal.
fn encode_uri_component(value: &str) -> String {
    // a literal '%' always encodes to %25, so these sequences only come from
    // the characters they name
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
