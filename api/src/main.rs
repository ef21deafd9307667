use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use folio_core::services::auth::AuthService;
use folio_core::services::contact::ContactService;
use folio_core::services::notification::Notifier;
use folio_core::services::token::TokenService;
use folio_infra::mail::{NoopMailer, ResendMailer};
use folio_infra::store::{InMemoryContactRepository, InMemoryUserRepository};

use folio_api::app::create_app;
use folio_api::config::{provisioned_users, ApiConfig};
use folio_api::routes::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("starting Folio API server");

    // Signing-key misconfiguration is fatal: fail before binding, never
    // per request.
    let config = ApiConfig::from_env().unwrap_or_else(|err| {
        log::error!("configuration error: {err}");
        std::process::exit(1);
    });
    let users = provisioned_users().unwrap_or_else(|err| {
        log::error!("configuration error: {err}");
        std::process::exit(1);
    });

    let token_service = Arc::new(TokenService::new(&config.token));
    let user_repository = Arc::new(InMemoryUserRepository::with_users(users));
    let contact_repository = Arc::new(InMemoryContactRepository::new());

    let notifier: Arc<dyn Notifier> = match ResendMailer::from_env() {
        Ok(mailer) => Arc::new(mailer),
        Err(err) => {
            warn!("mail delivery disabled: {err}");
            Arc::new(NoopMailer)
        }
    };

    let app_state = web::Data::new(AppState {
        auth_service: AuthService::new(user_repository, Arc::clone(&token_service)),
        contact_service: ContactService::new(contact_repository, notifier, config.admin_email.clone()),
    });

    let bind_address = format!("{}:{}", config.host, config.port);
    info!("server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone(), Arc::clone(&token_service)))
        .bind(&bind_address)?
        .run()
        .await
}
