/// HTTP middleware utilities for the feed service
///
/// The service sits behind an authenticating gateway: every request reaches
/// us with an already-verified acting-user id in the `X-User-Id` header. The
/// middleware trusts that id and makes it available to handlers; ownership
/// checks (is the actor the author?) happen in the service layer.
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

/// Header carrying the authenticated acting-user id, set by the gateway.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Extracted acting-user identifier stored in request extensions.
#[derive(Debug, Clone)]
pub struct UserId(pub Uuid);

/// Actix middleware that lifts the gateway-authenticated user id into
/// request extensions.
pub struct GatewayIdentity;

impl<S, B> Transform<S, ServiceRequest> for GatewayIdentity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = GatewayIdentityService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GatewayIdentityService {
            service: Rc::new(service),
        }))
    }
}

pub struct GatewayIdentityService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for GatewayIdentityService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let header = req
                .headers()
                .get(USER_ID_HEADER)
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| ErrorUnauthorized("Missing X-User-Id header"))?;

            let user_id = Uuid::parse_str(header)
                .map_err(|_| ErrorUnauthorized("Invalid user ID"))?;

            req.extensions_mut().insert(UserId(user_id));

            service.call(req).await
        })
    }
}

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<UserId>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("User ID missing")),
        )
    }
}
