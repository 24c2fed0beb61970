mod catalog;
mod config;
mod error;
mod services;

mod logger;

use {
    crate::{catalog::CatalogClient, config::Config, logger::TracingLogger},
    actix_web::{web, App, HttpServer},
};

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    logger::init()?;

    let config = Config::from_env()?;

    let catalog = web::Data::new(CatalogClient::new(config.catalog_url.clone()));

    tracing::debug!(catalog_url = %catalog.base_url(), "using catalog");

    let server = HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .service(services::passes())
            .wrap(TracingLogger)
    })
    .bind(config.bind_addr())?
    .run();

    tracing::info!("Server started on port {}", config.port);

    server.await?;

    Ok(())
}
