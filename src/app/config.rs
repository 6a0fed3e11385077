pub static APP_NAME: &str = "Placeholder Image API";

pub static DEFAULT_PORT: u16 = 3000;
pub static DEFAULT_GENERATION_DELAY_MS: u64 = 2000;

pub static PLACEHOLDER_HOST: &str = "https://placehold.co";
pub static PLACEHOLDER_BACKGROUND: &str = "6366f1";
pub static PLACEHOLDER_FOREGROUND: &str = "ffffff";

pub static MIN_DIMENSION: u32 = 256;
pub static MAX_DIMENSION: u32 = 1024;
pub static DEFAULT_DIMENSION: u32 = 512;

pub static PLACEHOLDER_TEXT_LENGTH: usize = 20;
