use actix_web::{middleware::Logger, web, App, HttpServer};
use restaurant_api::config::{EnvConfig, CONFIG};
use restaurant_api::db::database_service::DatabaseService;
use restaurant_api::routes::configure_routes;
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env().map_err(io::Error::other)?;
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(DatabaseService::new(&config.db_url).await.map_err(io::Error::other)?);
    let _ = CONFIG.set(config);

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
