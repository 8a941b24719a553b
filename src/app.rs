use std::any::Any;

use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, Any as AnyOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{API_KEY_VAR, Config};
use crate::design::GatewayClient;
use crate::error::AppError;
use crate::routes::create_routes;

/// Request headers browsers may send to the designer endpoints
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Initialize tracing and logging for the application
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    info!("Initializing application router");

    if config.gateway.api_key.is_none() {
        warn!(
            "{} is not set; design requests will fail until it is configured",
            API_KEY_VAR
        );
    }
    let gateway = GatewayClient::new(config.gateway.clone())?;
    info!("AI gateway client ready for {}", config.gateway.base_url);

    Ok(Router::new()
        .merge(create_routes())
        .layer(Extension(gateway))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        )))
}

/// Any origin may call the service; OPTIONS requests are answered here
/// with an empty body.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::list(
            ALLOWED_HEADERS.split(", ").map(HeaderName::from_static),
        ))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error occurred".to_string()
    };

    AppError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_panic_becomes_error_envelope() {
        let response = handle_panic(Box::new("exploded"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_allowed_headers_are_valid_names() {
        let names: Vec<&str> = ALLOWED_HEADERS.split(", ").collect();
        assert_eq!(names, vec!["authorization", "x-client-info", "apikey", "content-type"]);
    }
}
