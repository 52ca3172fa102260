use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ryb_mix::{MixError, ParseColorError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Too many paints: {count} (max {max})")]
    TooManyPaints { count: usize, max: usize },

    #[error("Paint not found: {0}")]
    PaintNotFound(String),

    #[error("Brand not found: {0}")]
    BrandNotFound(String),

    #[error(transparent)]
    Mix(#[from] MixError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::TooManyPaints { .. } => StatusCode::BAD_REQUEST,
            ApiError::PaintNotFound(_) | ApiError::BrandNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Mix(MixError::InvalidTarget { .. }) => StatusCode::BAD_REQUEST,
            // Catalog colors are validated at load, so this is a server fault
            ApiError::Mix(MixError::InvalidPaintColor { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Problems with the paint catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no brands")]
    Empty,

    #[error("Duplicate brand id: {0}")]
    DuplicateBrand(String),

    #[error("Duplicate paint id: {0}")]
    DuplicatePaint(String),

    #[error("Paint {id} has invalid color {value:?}: {source}")]
    InvalidColor {
        id: String,
        value: String,
        #[source]
        source: ParseColorError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(
            ApiError::PaintNotFound("wn-nope".to_string()).to_string(),
            "Paint not found: wn-nope"
        );
        assert_eq!(
            ApiError::BrandNotFound("acme".to_string()).to_string(),
            "Brand not found: acme"
        );
        assert_eq!(
            ApiError::TooManyPaints { count: 30, max: 24 }.to_string(),
            "Too many paints: 30 (max 24)"
        );
        assert_eq!(
            ApiError::InvalidRequest("no paints".to_string()).to_string(),
            "Invalid request: no paints"
        );
    }

    #[test]
    fn test_mix_error_is_transparent() {
        let error = ApiError::from(MixError::InvalidTarget {
            value: "#12".to_string(),
            source: ParseColorError::InvalidLength(2),
        });
        assert_eq!(
            error.to_string(),
            "invalid target color \"#12\": invalid hex color length 2 (expected 3 or 6 digits)"
        );
    }

    #[test]
    fn test_catalog_error_messages() {
        assert_eq!(CatalogError::Empty.to_string(), "Catalog has no brands");
        assert_eq!(
            CatalogError::DuplicatePaint("wn-white".to_string()).to_string(),
            "Duplicate paint id: wn-white"
        );
        let error = CatalogError::InvalidColor {
            id: "x".to_string(),
            value: "#ggg".to_string(),
            source: ParseColorError::InvalidDigit('g'),
        };
        assert_eq!(
            error.to_string(),
            "Paint x has invalid color \"#ggg\": invalid hex digit 'g'"
        );
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::InvalidRequest("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::TooManyPaints { count: 2, max: 1 }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::PaintNotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::BrandNotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Mix(MixError::InvalidTarget {
            value: "x".to_string(),
            source: ParseColorError::InvalidDigit('x'),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Internal("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
