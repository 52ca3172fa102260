use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Json as JsonExtractor,
};
use ryb_mix::{MixOutcome, Srgb};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::catalog::PaintResponse;
use crate::error::ApiError;
use crate::services::{MixRequest, MixService};

/// Request body for a mix
#[derive(Debug, Deserialize, ToSchema)]
pub struct MixRequestBody {
    /// Target color as hex (`#rrggbb`, `rrggbb` or `#rgb`)
    pub target: String,
    /// Ids of the paints the painter owns
    #[serde(default)]
    pub paints: Vec<String>,
    /// Only use owned paints from these brands
    #[serde(default)]
    pub brands: Option<Vec<String>>,
}

/// One paint in the recipe
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentResponse {
    pub paint: PaintResponse,
    /// Integer parts of this paint
    pub parts: u32,
    /// Share of the mix, whole percent
    pub percent: u32,
}

/// Response from a mix
#[derive(Debug, Serialize, ToSchema)]
pub struct MixResponse {
    /// Status code (200 = success)
    pub status: u16,
    /// The requested color, normalized
    pub target: String,
    /// Predicted color of the mix
    pub mixed_color: String,
    /// How close the mix gets, 0-100
    pub accuracy_percent: u8,
    /// Paints and parts; empty when no paints were given
    pub components: Vec<ComponentResponse>,
    /// The recipe as a sentence
    pub instructions: String,
    /// A catalog paint that would improve a weak match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<PaintResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_tip: Option<String>,
}

impl MixResponse {
    pub fn new(target: &str, outcome: &MixOutcome) -> Self {
        let total = outcome.total_parts();
        Self {
            status: 200,
            target: target
                .parse::<Srgb>()
                .map_or_else(|_| target.to_string(), Srgb::to_hex),
            mixed_color: outcome.mixed_color.clone(),
            accuracy_percent: outcome.accuracy_percent,
            components: outcome
                .components
                .iter()
                .map(|c| ComponentResponse {
                    paint: PaintResponse::from(&c.paint),
                    parts: c.parts,
                    percent: c.percent_of(total),
                })
                .collect(),
            instructions: outcome.instructions(),
            suggestion: outcome.suggestion.as_ref().map(PaintResponse::from),
            suggestion_tip: outcome.suggestion_tip(),
        }
    }
}

/// Find the best mix
///
/// Searches every single paint, pair and triple of the owned paints at
/// fixed part ratios and returns the combination closest to the target.
/// When accuracy is low, suggests one paint from the full catalog.
#[utoipa::path(
    post,
    path = "/api/mix",
    request_body = MixRequestBody,
    responses(
        (status = 200, description = "Best mix found", body = MixResponse),
        (status = 400, description = "Missing or invalid target color, or too many paints"),
        (status = 404, description = "Unknown paint or brand"),
    ),
    tag = "Mixing"
)]
pub async fn handle_mix(
    State(service): State<Arc<MixService>>,
    JsonExtractor(body): JsonExtractor<MixRequestBody>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(
        target_color = %body.target,
        paints = body.paints.len(),
        brands = ?body.brands,
        "Mix request received"
    );

    if body.target.trim().is_empty() {
        return Err(ApiError::InvalidRequest("target color is required".to_string()));
    }

    let request = MixRequest {
        target: body.target,
        paint_ids: body.paints,
        brand_ids: body.brands,
    };
    let target = request.target.clone();
    let outcome = service.mix_blocking(request).await?;

    Ok(Json(MixResponse::new(&target, &outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ryb_mix::{Paint, WeightedPaint};

    #[test]
    fn test_mix_response_from_outcome() {
        let white = Paint::new("w", "White", "#ffffff", "PW6").with_brand("Acme");
        let blue = Paint::new("b", "Blue", "#163e6f", "PB29").with_brand("Acme");
        let outcome = MixOutcome {
            components: vec![WeightedPaint::new(white, 1), WeightedPaint::new(blue.clone(), 3)],
            mixed_color: "#636e7d".to_string(),
            accuracy_percent: 10,
            suggestion: Some(blue),
        };

        let response = MixResponse::new("3A6EA5", &outcome);
        assert_eq!(response.target, "#3a6ea5");
        assert_eq!(response.components[0].percent, 25);
        assert_eq!(response.components[1].percent, 75);
        assert_eq!(response.instructions, "1 part White + 3 parts Blue");
        assert_eq!(
            response.suggestion_tip.as_deref(),
            Some("Adding Blue (PB29) to your mix could improve the match.")
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["components"][1]["paint"]["hex"], "#163e6f");
        assert_eq!(json["components"][1]["paint"]["brand"], "Acme");
    }

    #[test]
    fn test_unmixed_response_omits_suggestion() {
        let response = MixResponse::new("#3a6ea5", &MixOutcome::unmixed());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["mixed_color"], "#808080");
        assert_eq!(json["accuracy_percent"], 0);
        assert_eq!(json["components"], serde_json::json!([]));
        assert_eq!(json["instructions"], "");
        assert!(json.get("suggestion").is_none());
    }
}
