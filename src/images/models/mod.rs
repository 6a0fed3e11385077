pub mod generation_request;
pub mod generation_result;
