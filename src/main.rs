use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use summarize::api::{configure_routes, AppState};
use summarize::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    // A missing .env is fine, the variables may come from the environment
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        }
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = config::AppConfig::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::other(e)
    })?;

    let state = AppState::new(&app_config).map_err(std::io::Error::other)?;
    let port = app_config.port;

    log::info!("Server running on port {}", port);
    log::info!("Test the endpoint: POST http://localhost:{}/api/summarize", port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
