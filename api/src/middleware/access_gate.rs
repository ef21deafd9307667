//! Access gate middleware enforcing the per-route authorization policy.
//!
//! Authorization is data-driven: the gate is constructed with an explicit
//! policy table mapping `(method, path)` to an access requirement, and
//! evaluates it before dispatch. A route marked open admits anonymous
//! requests, but a bearer token that IS present gets its signature and
//! expiry checked regardless of the route's policy; only the role check is
//! skipped for open routes.
//!
//! Verification is pure: the gate holds the process-wide `TokenService` and
//! no per-session state.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::{header::AUTHORIZATION, Method},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use folio_core::domain::entities::user::UserRole;
use folio_core::errors::TokenError;
use folio_core::services::token::TokenService;

use crate::handlers::error::{forbidden_error, unauthorized_error};

/// Access requirement for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Anonymous access allowed; role check skipped
    Open,
    /// A verified token whose role claim is in the set is required
    Roles(Vec<UserRole>),
}

/// Explicit per-route authorization policy
///
/// Routes not present in the table are treated as open so they fall
/// through to the 404 handler instead of answering 401.
#[derive(Debug, Default)]
pub struct PolicyTable {
    rules: Vec<(Method, String, Access)>,
}

impl PolicyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule for a method and path
    pub fn route(mut self, method: Method, path: &str, access: Access) -> Self {
        self.rules.push((method, normalize(path).to_string(), access));
        self
    }

    /// Look up the requirement for a request
    pub fn access_for(&self, method: &Method, path: &str) -> Access {
        let path = normalize(path);
        self.rules
            .iter()
            .find(|(m, p, _)| m == method && p == path)
            .map(|(_, _, access)| access.clone())
            .unwrap_or(Access::Open)
    }
}

/// Strips a trailing slash so `/contact/` and `/contact` share a rule
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Verified principal claims injected into requests that carried a token
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject of the verified token
    pub username: String,
    /// Role carried by the token
    pub role: UserRole,
}

/// Extractor for handlers on protected routes
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

/// Access gate middleware factory
pub struct AccessGate {
    token_service: Arc<TokenService>,
    policy: Arc<PolicyTable>,
}

impl AccessGate {
    /// Creates a gate over the given verifier and policy table
    pub fn new(token_service: Arc<TokenService>, policy: Arc<PolicyTable>) -> Self {
        Self {
            token_service,
            policy,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
            policy: Arc::clone(&self.policy),
        }))
    }
}

/// Access gate middleware service
pub struct AccessGateMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    policy: Arc<PolicyTable>,
}

impl<S, B> Service<ServiceRequest> for AccessGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);
        let policy = Arc::clone(&self.policy);

        Box::pin(async move {
            let access = policy.access_for(req.method(), req.path());

            match extract_bearer_token(&req) {
                None => {
                    if matches!(access, Access::Roles(_)) {
                        let err = unauthorized_error("Authentication required");
                        return Ok(req.error_response(err).map_into_right_body());
                    }
                    // Anonymous request on an open route; no claims.
                }
                Some(token) => {
                    // Signature and expiry always run when a token is
                    // present, open route or not.
                    let claims = match token_service.verify(&token) {
                        Ok(claims) => claims,
                        Err(err) => {
                            let err = match err {
                                TokenError::Expired => unauthorized_error("Token expired"),
                                _ => unauthorized_error("Invalid token"),
                            };
                            return Ok(req.error_response(err).map_into_right_body());
                        }
                    };

                    let role = UserRole::parse(&claims.role);
                    if let Access::Roles(required) = &access {
                        if !role.is_some_and(|r| required.contains(&r)) {
                            return Ok(req.error_response(forbidden_error()).map_into_right_body());
                        }
                    }

                    if let Some(role) = role {
                        req.extensions_mut().insert(AuthContext {
                            username: claims.sub,
                            role,
                        });
                    }
                }
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn policy_lookup_matches_method_and_path() {
        let policy = PolicyTable::new()
            .route(Method::POST, "/contact", Access::Open)
            .route(Method::GET, "/contact", Access::Roles(vec![UserRole::Admin]));

        assert_eq!(policy.access_for(&Method::POST, "/contact"), Access::Open);
        assert_eq!(
            policy.access_for(&Method::GET, "/contact"),
            Access::Roles(vec![UserRole::Admin])
        );
        // Trailing slash shares the rule.
        assert_eq!(
            policy.access_for(&Method::GET, "/contact/"),
            Access::Roles(vec![UserRole::Admin])
        );
    }

    #[test]
    fn unlisted_routes_are_open() {
        let policy = PolicyTable::new();
        assert_eq!(policy.access_for(&Method::GET, "/nope"), Access::Open);
    }
}
