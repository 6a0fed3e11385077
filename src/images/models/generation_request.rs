/// A request that passed validation, with default dimensions filled in.
///
/// Only `GenerateImageDto::to_request` builds one, so every instance holds a
/// prompt of 1..=500 characters and dimensions within 256..=1024.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    style: Option<String>,
    width: u32,
    height: u32,
}

impl GenerationRequest {
    pub(in crate::images) fn new(
        prompt: String,
        style: Option<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            prompt,
            style,
            width,
            height,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
