//! gRPC server initialization and lifecycle management
//!
//! - Configuration and tracing
//! - Database connection with retry, optional migrations
//! - Health service (grpc.health.v1.Health) driven by a database probe
//! - Graceful shutdown on SIGINT / SIGTERM

use core_config::FromEnv;
use database::postgres::{DatabaseConnection, check_health_detailed};
use domain_products::{PgProductRepository, ProductRepository, ProductService};
use eyre::{Result, WrapErr};
use rpc::catalog::v1::product_service_server::{ProductServiceServer, SERVICE_NAME};
use std::time::Duration;
use tokio::signal;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tonic_health::ServingStatus;
use tonic_health::server::{HealthReporter, health_reporter};
use tracing::{info, warn};

use crate::config::Config;
use crate::service::ProductServiceImpl;

/// Wrap a domain service in the generated tonic server
pub fn product_service<R>(
    service: ProductService<R>,
    compression: bool,
) -> ProductServiceServer<ProductServiceImpl<R>>
where
    R: ProductRepository + 'static,
{
    let server = ProductServiceServer::new(ProductServiceImpl::new(service));
    if compression {
        server
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd)
    } else {
        server
    }
}

/// Run the gRPC server until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is missing or invalid
/// - Database connection or migrations fail
/// - Server binding fails
pub async fn run() -> Result<()> {
    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    core_config::tracing::init_tracing(&config.environment);

    let addr = config
        .server
        .socket_addr()
        .wrap_err("Invalid gRPC listen address")?;

    info!("Connecting to database...");
    let db = database::postgres::connect_from_config_with_retry(
        config.database.clone(),
        Some(config.connect_retry.clone()),
    )
    .await
    .wrap_err("Failed to connect to database")?;

    if config.run_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db, "products-service")
            .await
            .wrap_err("Failed to run migrations")?;
    }

    let service = ProductService::new(PgProductRepository::new(db.clone()));

    let (health_reporter, health_service) = health_reporter();
    set_status(&health_reporter, ServingStatus::Serving).await;
    let watcher = tokio::spawn(watch_database(
        db,
        health_reporter.clone(),
        config.health_check_interval,
    ));

    info!(
        %addr,
        compression = config.server.enable_compression,
        "ProductService listening"
    );

    let result = Server::builder()
        .add_service(health_service)
        .add_service(product_service(service, config.server.enable_compression))
        .serve_with_shutdown(addr, shutdown_signal())
        .await;

    watcher.abort();
    set_status(&health_reporter, ServingStatus::NotServing).await;
    result.wrap_err("gRPC server failed")?;

    info!("ProductService stopped");
    Ok(())
}

/// Mark both the product service and the generic "" entry
async fn set_status(reporter: &HealthReporter, status: ServingStatus) {
    reporter.set_service_status(SERVICE_NAME, status).await;
    reporter.set_service_status("", status).await;
}

/// Flip the health status whenever the database probe changes outcome
async fn watch_database(db: DatabaseConnection, reporter: HealthReporter, every: Duration) {
    let mut interval = tokio::time::interval(every);
    let mut healthy = true;

    loop {
        interval.tick().await;
        let status = check_health_detailed(&db).await;

        if status.healthy == healthy {
            continue;
        }
        healthy = status.healthy;

        if healthy {
            info!(
                response_time_ms = status.response_time_ms,
                "Database reachable again, serving"
            );
            set_status(&reporter, ServingStatus::Serving).await;
        } else {
            warn!(
                error = status.message.as_deref().unwrap_or_default(),
                "Database probe failed, not serving"
            );
            set_status(&reporter, ServingStatus::NotServing).await;
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal, shutting down gracefully"),
        _ = terminate => info!("Received SIGTERM signal, shutting down gracefully"),
    }
}
