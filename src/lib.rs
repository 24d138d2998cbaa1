#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::api::api_v1_deals;
#[cfg(feature = "server")]
use crate::routes::main::{show_index, show_search};
#[cfg(feature = "server")]
use crate::search_client::DealSearcher;
#[cfg(feature = "server")]
use crate::search_client::gemini::GeminiClient;

pub mod domain;
pub mod links;
pub mod parser;
pub mod prompt;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod search_client;
#[cfg(feature = "server")]
pub mod services;

/// Minimum secret length accepted by the cookie signing key.
#[cfg(feature = "server")]
const MIN_SECRET_LEN: usize = 64;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    if server_config.gemini_api_key.trim().is_empty() {
        return Err(std::io::Error::other(
            "Gemini API key is not configured (set API_KEY or APP_GEMINI_API_KEY)",
        ));
    }

    if server_config.secret.len() < MIN_SECRET_LEN {
        return Err(std::io::Error::other(format!(
            "Secret must be at least {MIN_SECRET_LEN} bytes long"
        )));
    }

    let client = GeminiClient::new(
        server_config.gemini_api_key.clone(),
        server_config.gemini_base_url.clone(),
        server_config.gemini_model.clone(),
    );
    let model = client.model().to_string();
    let searcher: Arc<dyn DealSearcher> = Arc::new(client);
    let searcher = web::Data::from(searcher);

    // Flash messages carry form validation feedback across redirects.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting server on {}:{} with model {}",
        server_config.address,
        server_config.port,
        model
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_deals))
            .service(show_index)
            .service(show_search)
            .app_data(web::Data::new(tera.clone()))
            .app_data(searcher.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
