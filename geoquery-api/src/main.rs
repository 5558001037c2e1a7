use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use std::sync::{Arc, RwLock};
use tracing_subscriber::prelude::*;

mod config;
mod handlers;
mod helpers;
mod integrations;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "geoquery API"
    }))
}

#[get("/health")]
async fn health(data: web::Data<handlers::AppState>) -> impl Responder {
    // The dataset file is the only local resource a query depends on.
    let dataset_available = data
        .config
        .read()
        .ok()
        .and_then(|config| {
            config
                .dataset
                .as_ref()
                .map(|d| std::path::Path::new(&d.path).exists())
        })
        .unwrap_or(false);

    if dataset_available {
        HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "dataset": "available"
        }))
    } else {
        HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "unhealthy",
            "dataset": "missing"
        }))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("geoquery-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Load config
    let (config, config_path) = config::ApiConfig::load().expect("Failed to load config");
    tracing::info!("Config loaded from {:?}", config_path);

    if config.gemini_api_key().is_none() {
        tracing::warn!("No Gemini API key configured; /process-query will return 400");
    }

    let app_state = handlers::AppState {
        config: Arc::new(RwLock::new(config.clone())),
    };

    // Get server config or use defaults
    let (host, port) = if let Some(server_config) = &config.server {
        (server_config.host.clone(), server_config.port)
    } else {
        ("127.0.0.1".to_string(), 8080)
    };

    tracing::info!("Server will listen on {}:{}", host, port);

    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(app_state.clone()))
            .service(hello)
            .service(health)
            .route("/settings", web::get().to(handlers::settings::get_settings))
            .route("/process-query", web::post().to(handlers::query::process_query))
            // The original frontend calls the route with a trailing slash.
            .route("/process-query/", web::post().to(handlers::query::process_query))
    })
    .bind((host.as_str(), port))?
    .run();

    server.await
}
