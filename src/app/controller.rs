use axum::response::Html;

use super::{
    errors::DefaultApiError, models::api_error::ApiError,
    templates::index_template::index_template,
};

pub async fn get_root() -> Html<String> {
    Html(index_template())
}

pub async fn fallback() -> ApiError {
    DefaultApiError::NotFound.value()
}
