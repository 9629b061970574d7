//! API server binary: wires configuration, MySQL, SMTP and the auth
//! workflow into an actix-web application.

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use signet_api::config::Config;
use signet_api::routes::AppState;
use signet_api::{app, middleware};
use signet_core::services::auth::{AuthService, AuthServiceConfig};
use signet_core::services::password::PasswordHasher;
use signet_core::services::token::{TokenCodec, TokenKeys};
use signet_infra::database::{DatabasePool, MySqlSessionRepository, MySqlUserRepository};
use signet_infra::email::SmtpMailer;

fn startup_error(error: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, error.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    info!("Starting Signet API server ({:?})", config.environment);

    // Key material is loaded once; everything downstream shares the codec
    let keys = TokenKeys::from_config(&config.jwt).map_err(startup_error)?;
    let codec = Arc::new(TokenCodec::new(keys));

    let pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(startup_error)?;
    pool.health_check().await.map_err(startup_error)?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let session_repository = Arc::new(MySqlSessionRepository::new(pool.get_pool().clone()));
    let mailer = Arc::new(SmtpMailer::new(&config.email).map_err(startup_error)?);

    let auth_config = AuthServiceConfig {
        access_token_ttl_secs: config.jwt.access_token_ttl_secs,
        refresh_token_ttl_secs: config.jwt.refresh_token_ttl_secs,
        public_base_url: config.public_base_url.clone(),
    };

    let state = web::Data::new(AppState {
        auth_service: AuthService::new(
            user_repository,
            session_repository,
            mailer,
            Arc::clone(&codec),
            PasswordHasher::default(),
            auth_config,
        ),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let environment = config.environment;
    let workers = config.server.workers;

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::create_cors(environment))
            .wrap(middleware::DeserializeUser::new(Arc::clone(&codec)))
            .app_data(state.clone())
            .configure(
                app::configure::<MySqlUserRepository, MySqlSessionRepository, SmtpMailer>,
            )
    });

    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}
