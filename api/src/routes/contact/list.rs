use actix_web::{web, HttpResponse};

use folio_core::repositories::{ContactRepository, UserRepository};

use crate::dto::contact_dto::ContactResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::access_gate::AuthContext;
use crate::routes::AppState;

/// Handler for GET /contact (ADMIN role required)
///
/// The access gate has already verified the token and role; the extracted
/// context is used for audit logging only.
///
/// # Responses
/// - 200 OK: all persisted messages in insertion order
/// - 401/403: enforced by the access gate before dispatch
pub async fn list<U, C>(auth: AuthContext, state: web::Data<AppState<U, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    log::info!("contact list requested by {}", auth.username);

    match state.contact_service.list().await {
        Ok(messages) => HttpResponse::Ok().json(
            messages
                .into_iter()
                .map(ContactResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}
