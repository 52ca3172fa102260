use std::sync::Arc;

use ryb_mix::{MixOutcome, PaintMixer};

use crate::error::ApiError;
use crate::models::{AppConfig, Catalog};

/// A painter's request: which paints they own and what color they want
#[derive(Debug, Clone, Default)]
pub struct MixRequest {
    pub target: String,
    pub paint_ids: Vec<String>,
    /// Restrict owned paints to these brands; all brands when `None`
    pub brand_ids: Option<Vec<String>>,
}

/// Resolves requests against the catalog and runs the mixer
pub struct MixService {
    catalog: Arc<Catalog>,
    mixer: PaintMixer,
    max_owned_paints: usize,
}

impl MixService {
    pub fn new(catalog: Arc<Catalog>, config: &AppConfig) -> Self {
        Self {
            catalog,
            mixer: config.mixer(),
            max_owned_paints: config.max_owned_paints,
        }
    }

    /// Best mix of the requested owned paints. The suggestion pool is the
    /// whole catalog.
    ///
    /// CPU-bound: call from a blocking context.
    pub fn mix(&self, request: &MixRequest) -> Result<MixOutcome, ApiError> {
        let owned = self
            .catalog
            .select_owned(&request.paint_ids, request.brand_ids.as_deref())?;
        if owned.len() > self.max_owned_paints {
            return Err(ApiError::TooManyPaints {
                count: owned.len(),
                max: self.max_owned_paints,
            });
        }

        tracing::debug!(
            target_color = %request.target,
            owned = owned.len(),
            "Searching for best mix"
        );
        let outcome = self.mixer.mix(&request.target, &owned, self.catalog.paints())?;
        tracing::info!(
            target_color = %request.target,
            mixed = %outcome.mixed_color,
            accuracy = outcome.accuracy_percent,
            components = outcome.components.len(),
            suggestion = ?outcome.suggestion.as_ref().map(|p| p.id.as_str()),
            "Mix computed"
        );
        Ok(outcome)
    }

    /// [`mix`](Self::mix) on the blocking thread pool.
    pub async fn mix_blocking(
        self: Arc<Self>,
        request: MixRequest,
    ) -> Result<MixOutcome, ApiError> {
        tokio::task::spawn_blocking(move || self.mix(&request))
            .await
            .map_err(|e| ApiError::Internal(format!("Mix task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CATALOG: &str = r##"[
        {"id": "acme", "brand": "Acme", "colors": [
            {"id": "white", "name": "White", "hex": "#ffffff", "pigment": "PW6"},
            {"id": "yellow", "name": "Yellow", "hex": "#ffff00", "pigment": "PY3"},
            {"id": "ultramarine", "name": "Ultramarine", "hex": "#163e6f", "pigment": "PB29"}
        ]},
        {"id": "zenith", "brand": "Zenith", "colors": [
            {"id": "cobalt", "name": "Cobalt Blue", "hex": "#0000ff", "pigment": "PB28"}
        ]}
    ]"##;

    fn service(config: AppConfig) -> MixService {
        MixService::new(Arc::new(Catalog::from_json(CATALOG).unwrap()), &config)
    }

    fn request(target: &str, paints: &[&str]) -> MixRequest {
        MixRequest {
            target: target.to_string(),
            paint_ids: paints.iter().map(|s| s.to_string()).collect(),
            brand_ids: None,
        }
    }

    #[test]
    fn test_mix_green() {
        let service = service(AppConfig::default());
        let outcome = service.mix(&request("#8daf69", &["cobalt", "yellow"])).unwrap();
        assert_eq!(outcome.mixed_color, "#8daf69");
        assert_eq!(outcome.accuracy_percent, 100);
        // Catalog order, not request order
        assert_eq!(outcome.instructions(), "1 part Yellow + 1 part Cobalt Blue");
    }

    #[test]
    fn test_suggestion_comes_from_other_brand() {
        let service = service(AppConfig::default());
        let outcome = service.mix(&request("#3a6ea5", &["white"])).unwrap();
        assert_eq!(
            outcome.suggestion.map(|p| p.id),
            Some("cobalt".to_string())
        );
    }

    #[test]
    fn test_brand_filter_can_empty_the_palette() {
        let service = service(AppConfig::default());
        let mut req = request("#3a6ea5", &["white"]);
        req.brand_ids = Some(vec!["zenith".to_string()]);
        let outcome = service.mix(&req).unwrap();
        assert_eq!(outcome, MixOutcome::unmixed());
    }

    #[test]
    fn test_too_many_paints() {
        let service = service(AppConfig {
            max_owned_paints: 2,
            ..Default::default()
        });
        let err = service
            .mix(&request("#3a6ea5", &["white", "yellow", "cobalt"]))
            .unwrap_err();
        assert!(matches!(err, ApiError::TooManyPaints { count: 3, max: 2 }));
    }

    #[test]
    fn test_errors_propagate() {
        let service = service(AppConfig::default());
        assert!(matches!(
            service.mix(&request("#3a6ea5", &["nope"])).unwrap_err(),
            ApiError::PaintNotFound(_)
        ));
        assert!(matches!(
            service.mix(&request("#3a6ea", &["white"])).unwrap_err(),
            ApiError::Mix(ryb_mix::MixError::InvalidTarget { .. })
        ));
    }

    #[tokio::test]
    async fn test_mix_blocking() {
        let service = Arc::new(service(AppConfig::default()));
        let outcome = service
            .mix_blocking(request("#ffff00", &["yellow"]))
            .await
            .unwrap();
        assert_eq!(outcome.mixed_color, "#ffff00");
    }
}
