use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

use crate::constants::{
    ALLOWED_HEADERS, ALLOWED_METHODS, ALLOWED_ORIGIN, CONTENT_SECURITY_POLICY, PERMISSIONS_POLICY,
};

/// Security and CORS headers added to every response, including static files and errors
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY))
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::REFERRER_POLICY, "no-referrer"))
        .add(("Permissions-Policy", PERMISSIONS_POLICY))
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOWED_ORIGIN))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
}
