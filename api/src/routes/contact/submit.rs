use actix_web::{web, HttpResponse};
use validator::Validate;

use folio_core::repositories::{ContactRepository, UserRepository};

use crate::dto::contact_dto::{ContactRequest, ContactResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /contact (open to anonymous callers)
///
/// Persists the message and returns it with its server-assigned id and
/// timestamp. The notification attempt triggered by the save runs on its
/// own task and never influences this response.
///
/// # Responses
/// - 201 Created: the persisted record
/// - 400 Bad Request: validation failure
/// - 500 Internal Server Error: persistence failure, nothing kept
pub async fn submit<U, C>(
    state: web::Data<AppState<U, C>>,
    request: web::Json<ContactRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    log::info!("contact message received from {}", request.email);

    match state
        .contact_service
        .submit(&request.name, &request.email, &request.message)
        .await
    {
        Ok(saved) => HttpResponse::Created().json(ContactResponse::from(saved)),
        Err(error) => handle_domain_error(error),
    }
}
