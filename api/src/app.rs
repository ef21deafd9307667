//! Application factory.
//!
//! Builds the actix application from the shared state and the process-wide
//! token service, wiring the per-route authorization policy into the
//! access gate.

use std::sync::Arc;

use actix_web::{http::Method, middleware::Logger, web, App, HttpResponse};

use folio_core::domain::entities::user::UserRole;
use folio_core::repositories::{ContactRepository, UserRepository};
use folio_core::services::token::TokenService;

use crate::middleware::access_gate::{Access, AccessGate, PolicyTable};
use crate::middleware::cors::create_cors;
use crate::routes::auth::login::login;
use crate::routes::contact::{list::list, submit::submit};
use crate::routes::AppState;

/// The authorization policy of the HTTP surface
///
/// One table, evaluated by the access gate before dispatch. Everything not
/// listed is open and falls through to the 404 handler.
pub fn route_policy() -> PolicyTable {
    PolicyTable::new()
        .route(Method::GET, "/health", Access::Open)
        .route(Method::POST, "/auth/login", Access::Open)
        .route(Method::POST, "/contact", Access::Open)
        .route(Method::GET, "/contact", Access::Roles(vec![UserRole::Admin]))
}

/// Create and configure the application with all dependencies
pub fn create_app<U, C>(
    app_state: web::Data<AppState<U, C>>,
    token_service: Arc<TokenService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    let cors = create_cors();
    let gate = AccessGate::new(token_service, Arc::new(route_policy()));

    App::new()
        .app_data(app_state)
        // Order matters: the gate runs closest to the handlers, after
        // logging and CORS.
        .wrap(gate)
        .wrap(cors)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/auth").route("/login", web::post().to(login::<U, C>)),
        )
        .service(
            web::scope("/contact")
                .route("", web::post().to(submit::<U, C>))
                .route("", web::get().to(list::<U, C>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "folio-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
