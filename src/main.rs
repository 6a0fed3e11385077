use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app::{config, envy::Envy},
    images::apis::{placeholder::PlaceholderGenerator, ImageGenerator},
};

mod app;
mod images;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ImageGenerator>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // images
        .route("/images/generate", post(images::controller::generate_image))
        .fallback(app::controller::fallback)
        // layers
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));

    // tracing
    tracing_subscriber::fmt::init();

    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(config::DEFAULT_PORT);
    let generator = PlaceholderGenerator::new(envy.generation_delay());

    tracing::info!(
        app_env = %envy.app_env,
        delay = ?envy.generation_delay(),
        "starting {}",
        config::APP_NAME
    );

    let state = AppState {
        generator: Arc::new(generator),
    };

    let app = router(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
