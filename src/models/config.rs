use crate::assets::AssetLoader;
use ryb_mix::PaintMixer;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Brand used by the CLI when neither brands nor paints are given
    pub default_brand: Option<String>,

    /// Suggest a catalog paint below this accuracy
    pub suggestion_threshold: u8,

    /// Largest number of owned paints combined in one mix
    pub max_components: usize,

    /// Upper bound on owned paints per HTTP request
    pub max_owned_paints: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_brand: Some("winsor-newton".to_string()),
            suggestion_threshold: ryb_mix::api::DEFAULT_SUGGESTION_THRESHOLD,
            max_components: ryb_mix::api::DEFAULT_MAX_COMPONENTS,
            max_owned_paints: 24,
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        default_brand = ?config.default_brand,
                        suggestion_threshold = config.suggestion_threshold,
                        max_components = config.max_components,
                        max_owned_paints = config.max_owned_paints,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Mixer configured from these settings.
    pub fn mixer(&self) -> PaintMixer {
        PaintMixer::new()
            .suggestion_threshold(self.suggestion_threshold)
            .max_components(self.max_components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_brand.as_deref(), Some("winsor-newton"));
        assert_eq!(config.suggestion_threshold, 80);
        assert_eq!(config.max_components, 3);
        assert_eq!(config.max_owned_paints, 24);
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = AppConfig::load_from_assets(&AssetLoader::new(None, None));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let yaml = r#"
default_brand: golden
max_components: 2
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_brand.as_deref(), Some("golden"));
        assert_eq!(config.max_components, 2);
        // Missing keys keep their defaults
        assert_eq!(config.suggestion_threshold, 80);
        assert_eq!(config.max_owned_paints, 24);
    }

    #[test]
    fn test_mixer_from_config() {
        let config = AppConfig {
            suggestion_threshold: 60,
            max_components: 9,
            ..Default::default()
        };
        let mixer = config.mixer();
        assert_eq!(mixer.get_suggestion_threshold(), 60);
        // Clamped by the mixer
        assert_eq!(mixer.get_max_components(), 3);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "suggestion_threshold: [not, a, number]\n").unwrap();

        let config = AppConfig::load_from_assets(&AssetLoader::new(None, Some(path)));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_external_config_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "suggestion_threshold: 0\nmax_owned_paints: 6\n").unwrap();

        let config = AppConfig::load_from_assets(&AssetLoader::new(None, Some(path)));
        assert_eq!(config.suggestion_threshold, 0);
        assert_eq!(config.max_owned_paints, 6);
    }
}
