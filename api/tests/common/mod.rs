//! Shared fixtures for API integration tests.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use folio_core::domain::entities::user::{User, UserRole};
use folio_core::repositories::contact::MockContactRepository;
use folio_core::repositories::user::MockUserRepository;
use folio_core::services::auth::AuthService;
use folio_core::services::contact::ContactService;
use folio_core::services::notification::{EmailNotification, NotificationError, Notifier};
use folio_core::services::token::{TokenConfig, TokenService};

use folio_api::routes::AppState;

pub const SECRET: &str = "integration-secret";
pub const ADMIN_PASSWORD: &str = "admin-pass";
pub const GUEST_PASSWORD: &str = "guest-pass";

/// Notifier that counts attempts and optionally fails each one
pub struct TestNotifier {
    pub fail: bool,
    pub attempts: Arc<AtomicUsize>,
}

#[async_trait]
impl Notifier for TestNotifier {
    async fn send(&self, _notification: &EmailNotification) -> Result<(), NotificationError> {
        self.attempts.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if self.fail {
            Err(NotificationError::Transport {
                message: "simulated transport failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

pub struct TestBackend {
    pub state: web::Data<AppState<MockUserRepository, MockContactRepository>>,
    pub token_service: Arc<TokenService>,
    pub notification_attempts: Arc<AtomicUsize>,
}

/// Builds application state with a seeded admin and guest user
pub async fn test_backend(fail_notifier: bool) -> TestBackend {
    let user_repository = MockUserRepository::new();
    user_repository
        .insert(User::new(
            "admin",
            bcrypt::hash(ADMIN_PASSWORD, 4).unwrap(),
            UserRole::Admin,
        ))
        .await;
    user_repository
        .insert(User::new(
            "guest",
            bcrypt::hash(GUEST_PASSWORD, 4).unwrap(),
            UserRole::Viewer,
        ))
        .await;

    let token_service = Arc::new(TokenService::new(&TokenConfig::new(SECRET)));
    let notification_attempts = Arc::new(AtomicUsize::new(0));
    let notifier = Arc::new(TestNotifier {
        fail: fail_notifier,
        attempts: Arc::clone(&notification_attempts),
    });

    let state = web::Data::new(AppState {
        auth_service: AuthService::new(Arc::new(user_repository), Arc::clone(&token_service)),
        contact_service: ContactService::new(
            Arc::new(MockContactRepository::new()),
            notifier,
            "admin@folio.dev",
        ),
    });

    TestBackend {
        state,
        token_service,
        notification_attempts,
    }
}
