use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer for the configured browser origins.
///
/// The catalog API is read-mostly and unauthenticated, so only the methods it
/// serves are allowed and credentials are not.
pub fn create_cors_layer(origins: &[String]) -> io::Result<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<_, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS origin: {}", e),
            )
        })?;

    if allowed.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "At least one CORS origin is required",
        ));
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_origin_list() {
        assert!(create_cors_layer(&[]).is_err());
    }

    #[test]
    fn test_rejects_invalid_header_value() {
        assert!(create_cors_layer(&["http://bad\norigin".to_string()]).is_err());
    }

    #[test]
    fn test_accepts_multiple_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://catalog.example.com".to_string(),
        ];
        assert!(create_cors_layer(&origins).is_ok());
    }
}
