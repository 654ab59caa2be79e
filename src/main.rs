use std::process;

use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;

use product_catalog::db::establish_connection_pool;
use product_catalog::models::config::ServerConfig;
use product_catalog::repository::DieselRepository;
use product_catalog::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting catalog server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
