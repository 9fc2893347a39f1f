//! Game Shelf server - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_files::Files;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::{web, App, HttpServer};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use game_shelf_lib::api;
use game_shelf_lib::config::Config;
use game_shelf_lib::db::DbPool;
use game_shelf_lib::middleware::RequestLogger;
use game_shelf_lib::migration::{Migrator, MigratorTrait};
use game_shelf_lib::services::BlogStore;

/// Perform health check (for Docker healthcheck).
async fn health_check() -> bool {
    // Simple check - just verify we can load config
    Config::from_env().is_ok()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Check for --health-check flag (used by Docker HEALTHCHECK)
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--health-check") {
        dotenvy::dotenv().ok();
        if health_check().await {
            std::process::exit(0);
        } else {
            std::process::exit(1);
        }
    }

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - GSS_ENV may be 'development' (default) or 'production'");
            error!("  - In production, GSS_DATABASE_URL and GSS_SESSION_SECRET must be set");
            error!("  - In production, values must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Game Shelf Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
        info!("Using development defaults for DATABASE_URL and SESSION_SECRET");
    }

    // Make sure the database directory exists for file-backed SQLite URLs
    if let Some(path) = config
        .database_url
        .strip_prefix("sqlite://")
        .map(|rest| rest.split('?').next().unwrap_or(rest))
    {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .expect("Failed to create database directory");
            }
        }
    }

    // Open the single shared database handle
    let pool = DbPool::connect(&config.database_url)
        .await
        .expect("Failed to initialize database");
    info!("Database connection established");

    // Create both tables if absent, usuarios first
    Migrator::up(pool.connection(), None)
        .await
        .expect("Failed to run migrations");
    info!("Database migrations complete");

    // Seed the default admin account on a fresh store
    pool.seed_default_admin()
        .await
        .expect("Failed to seed default admin");

    // Load the read-only blog
    let blog = BlogStore::load(&config.posts_path).expect("Failed to load blog posts");
    info!(
        "Blog loaded: {} posts from {}",
        blog.all().len(),
        config.posts_path.display()
    );

    // Prepare shared state
    let bind_address = config.bind_address();
    let session_key = config.session_key();
    let static_dir = config.static_dir.clone();
    let is_development = config.is_development();

    if static_dir.is_some() {
        info!("Static file serving enabled from {:?}", static_dir);
    }

    let worker_count = if is_development {
        info!(
            "Starting server at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!(
            "Starting server at http://{} ({} workers)",
            bind_address, cpus
        );
        cpus
    };

    // Start HTTP server
    let server = HttpServer::new(move || {
        // Cookie sessions carry the authenticated principal between
        // requests. The cookie is not marked secure, matching the observed
        // system's development posture.
        let session = SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
            .cookie_secure(false)
            .build();

        let mut app = App::new()
            .wrap(RequestLogger)
            .wrap(session)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(blog.clone()))
            .configure(api::configure_app);

        if let Some(ref dir) = static_dir {
            app = app.service(Files::new("/public", dir.clone()).prefer_utf8(true));
        }

        app
    });

    server.workers(worker_count).bind(&bind_address)?.run().await
}
