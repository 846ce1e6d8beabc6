use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use barbearia::config::Config;
use barbearia::middleware::{RequestId, SessionAuth};
use barbearia::modules::appointments::{AppointmentService, MySqlAppointmentStore};
use barbearia::modules::auth::{AuthService, MySqlAuthStore};
use barbearia::modules::barbers::{BarberService, MySqlBarberStore};
use barbearia::modules::promotions::{MySqlPromotionStore, PromotionService};
use barbearia::modules::{appointments, auth, barbers, health, promotions};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "barbearia=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting Barbearia Management API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Explicit constructor-based composition: store -> service -> transport
    let appointment_service = Arc::new(AppointmentService::new(Arc::new(
        MySqlAppointmentStore::new(db_pool.clone()),
    )));
    let barber_service = Arc::new(BarberService::new(Arc::new(MySqlBarberStore::new(
        db_pool.clone(),
    ))));
    let promotion_service = Arc::new(PromotionService::new(Arc::new(MySqlPromotionStore::new(
        db_pool.clone(),
    ))));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(MySqlAuthStore::new(db_pool.clone())),
        config.auth.session_ttl_hours,
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(appointment_service.clone()))
            .app_data(web::Data::new(barber_service.clone()))
            .app_data(web::Data::new(promotion_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .configure(health::controllers::configure)
            .service(
                web::scope("/api")
                    .wrap(SessionAuth::new(db_pool.clone()))
                    .configure(appointments::controllers::configure)
                    .configure(barbers::controllers::configure)
                    .configure(promotions::controllers::configure)
                    .configure(auth::controllers::configure),
            )
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .wrap(Cors::permissive())
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated unexpectedly")
}
