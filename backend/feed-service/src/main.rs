use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use feed_service::db::ensure_schema;
use feed_service::handlers;
use feed_service::media::AssetStore;
use feed_service::middleware::GatewayIdentity;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn health_summary(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "feed-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "feed-service"
        })),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match feed_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting feed-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool. The acquire timeout bounds every
    // store call: a saturated pool fails the request instead of hanging it.
    let db_pool = match PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Connected to database");

    ensure_schema(&db_pool)
        .await
        .context("schema bootstrap failed")?;

    let assets = Arc::new(AssetStore::new(config.media.asset_dir.clone()));
    let assets_data = web::Data::new(assets);

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(assets_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/health", web::get().to(health_summary))
            .service(
                web::scope("")
                    .wrap(GatewayIdentity)
                    .service(
                        web::scope("/posts")
                            .service(
                                web::resource("")
                                    .route(web::post().to(handlers::create_post))
                                    .route(web::get().to(handlers::get_feed)),
                            )
                            .route("/user/{userId}", web::get().to(handlers::get_user_posts))
                            .route(
                                "/user/{userId}/liked",
                                web::get().to(handlers::get_user_liked_posts),
                            )
                            .route(
                                "/user/{userId}/commented",
                                web::get().to(handlers::get_user_commented_posts),
                            )
                            .route("/{id}/like", web::patch().to(handlers::like_post))
                            .route("/{id}", web::delete().to(handlers::delete_post)),
                    )
                    .service(
                        web::scope("/comments")
                            .service(
                                web::resource("").route(web::post().to(handlers::create_comment)),
                            )
                            .route(
                                "/post/{postId}",
                                web::get().to(handlers::get_post_comments),
                            )
                            .route("/{id}", web::delete().to(handlers::delete_comment)),
                    )
                    .service(
                        web::scope("/users")
                            .route("/{id}", web::get().to(handlers::get_user))
                            .route("/{id}/friends", web::get().to(handlers::get_user_friends))
                            .route(
                                "/{id}/{friendId}",
                                web::patch().to(handlers::toggle_friend),
                            ),
                    )
                    .service(
                        web::scope("/notifications")
                            .service(
                                web::resource("")
                                    .route(web::post().to(handlers::create_notification)),
                            )
                            .route(
                                "/{userId}/unread",
                                web::get().to(handlers::get_unread_count),
                            )
                            .route("/{userId}/read", web::patch().to(handlers::mark_all_read))
                            .route(
                                "/{userId}",
                                web::get().to(handlers::get_user_notifications),
                            ),
                    )
                    .route("/search", web::get().to(handlers::search)),
            )
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
