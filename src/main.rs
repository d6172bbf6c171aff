use actix_web::{App, HttpServer, middleware, web};
use rand::distr::{Alphanumeric, SampleString};

use expohall::auth::rate_limit::RateLimiter;
use expohall::auth::token::TokenService;
use expohall::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data/expohall.db".to_string());
    if let Some(dir) = std::path::Path::new(&database_path).parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).expect("Failed to create data directory");
    }

    let pool = db::init_pool(&database_path);
    db::run_migrations(&pool);

    // Token signing secret. A generated secret invalidates all tokens on
    // restart, so warn loudly outside of throwaway setups.
    let secret = match std::env::var("JWT_SECRET") {
        Ok(val) if val.len() >= 32 => {
            log::info!("Using JWT_SECRET from environment");
            val
        }
        Ok(val) => {
            log::warn!(
                "JWT_SECRET too short ({} bytes, need 32+), generating random secret",
                val.len()
            );
            Alphanumeric.sample_string(&mut rand::rng(), 48)
        }
        Err(_) => {
            log::warn!("No JWT_SECRET set, generating random secret (tokens lost on restart)");
            Alphanumeric.sample_string(&mut rand::rng(), 48)
        }
    };
    let tokens = web::Data::new(TokenService::new(&secret));
    let limiter = web::Data::new(RateLimiter::new());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(tokens.clone())
            .app_data(limiter.clone())
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
