pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::suggestion;
pub use modules::topic;

use crate::auth::application::domain::AuthKeys;
use crate::suggestion::adapter::outgoing::gemini::{GeminiClient, GeminiConfig};
use crate::suggestion::application::domain::{
    FixedWindowRateLimiter, RateLimitConfig, SystemClock,
};
use crate::suggestion::application::ports::incoming::use_cases::GenerateSuggestionsUseCase;
use crate::suggestion::application::services::GenerateSuggestionsService;
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, GetCategoriesService, GetSingleTopicService,
    GetTopicCatalogService, GetTopicsService, UpdateTopicService,
};
use crate::topic::application::TopicUseCases;

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
    pub generate_suggestions_use_case: Arc<dyn GenerateSuggestionsUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // Client credentials and upstream AI settings fail fast here rather than
    // on the first request that needs them.
    let auth_keys = AuthKeys::from_env();
    let rate_limit_config = RateLimitConfig::from_env();
    let gemini_config = GeminiConfig::from_env();

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Create repositories and use cases
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));

    let topic_use_cases = TopicUseCases {
        create: Arc::new(CreateTopicService::new(topic_repo.clone())),
        get_list: Arc::new(GetTopicsService::new(topic_query.clone())),
        get_catalog: Arc::new(GetTopicCatalogService::new(topic_query.clone())),
        get_single: Arc::new(GetSingleTopicService::new(topic_query.clone())),
        update: Arc::new(UpdateTopicService::new(topic_repo.clone())),
        delete: Arc::new(DeleteTopicService::new(topic_repo.clone())),
        get_categories: Arc::new(GetCategoriesService::new(topic_query.clone())),
    };

    let generate_suggestions_service = GenerateSuggestionsService::new(
        topic_query,
        topic_repo,
        GeminiClient::new(gemini_config),
        FixedWindowRateLimiter::new(rate_limit_config, SystemClock),
    );

    let state = AppState {
        topic: topic_use_cases,
        generate_suggestions_use_case: Arc::new(generate_suggestions_service),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(auth_keys.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .app_data(crate::shared::api::custom_query_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_single_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
    // AI suggestions
    cfg.service(crate::suggestion::adapter::incoming::web::routes::generate_suggestions_handler);
    // OpenAPI document
    cfg.service(crate::api::openapi::openapi_spec_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
