use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Origin, UserAgent};
use std::net::SocketAddr;
use tracing::info;

/// Logs method, path, IP address, origin and user-agent for each incoming
/// HTTP request, then the response status. Skips CORS preflight `OPTIONS`
/// requests.
///
/// ```ignore
/// use axum::Router;
/// use axum::middleware::from_fn;
/// use api::middleware::log_request;
///
/// let app = Router::new().layer(from_fn(log_request));
/// ```
///
/// The client IP is read from `ConnectInfo` when the server was started with
/// `into_make_service_with_connect_info`; otherwise it is logged as `unknown`.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if parts.method == Method::OPTIONS {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());

    let origin = TypedHeader::<Origin>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(o)| o.to_string());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    let method = parts.method.clone();
    let path = parts.uri.path().to_owned();

    info!(
        method = %method,
        path = %path,
        ip = %ip,
        origin = %origin.as_deref().unwrap_or("unknown"),
        user_agent = %user_agent.as_deref().unwrap_or("unknown"),
        "Incoming request"
    );

    let response = next.run(Request::from_parts(parts, body)).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        "Request completed"
    );

    response
}
