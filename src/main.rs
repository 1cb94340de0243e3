use actix_web::{App, HttpServer, middleware::Logger, web};
use env_logger::Env;
use rsync_preview::api;
use rsync_preview::appstate::appstate::AppState;
use rsync_preview::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("invalid configuration: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    log::info!(
        "serving rsync command preview on http://{}:{} ({} workers)",
        config.host,
        config.port,
        config.workers
    );

    let state = web::Data::new(AppState::new(&config));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::configure)
            .wrap(Logger::default())
            .default_service(web::route().to(api::not_found))
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
