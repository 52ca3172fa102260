//! Asset loading with embedded fallbacks
//!
//! The paint catalog and the config file ship inside the binary. Each can be
//! overridden from the filesystem:
//!
//! - If the env var is NOT set: use the embedded asset only (no filesystem access)
//! - If the env var IS set and the file is missing: seed it with the embedded asset
//! - If the env var IS set and the file exists: use the file

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default paint catalog
#[derive(RustEmbed)]
#[folder = "catalog/"]
#[include = "*.json"]
struct EmbeddedCatalog;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const CATALOG_ASSET: &str = "paints.json";
const CONFIG_ASSET: &str = "config.yaml";

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Catalog,
    Config,
}

impl AssetCategory {
    fn asset_name(self) -> &'static str {
        match self {
            AssetCategory::Catalog => CATALOG_ASSET,
            AssetCategory::Config => CONFIG_ASSET,
        }
    }

    fn embedded(self) -> Option<Cow<'static, [u8]>> {
        match self {
            AssetCategory::Catalog => EmbeddedCatalog::get(CATALOG_ASSET).map(|f| f.data),
            AssetCategory::Config => EmbeddedConfig::get(CONFIG_ASSET).map(|f| f.data),
        }
    }
}

/// Report of seeding operations
#[derive(Debug, Default)]
pub struct SeedReport {
    pub catalog_seeded: bool,
    pub config_seeded: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        !self.catalog_seeded && !self.config_seeded
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External catalog file (from CATALOG_FILE env var)
    catalog_file: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(catalog_file: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            catalog_file,
            config_file,
        }
    }

    /// Create a loader from `CATALOG_FILE` and `CONFIG_FILE`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("CATALOG_FILE").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    pub fn catalog_file(&self) -> Option<&Path> {
        self.catalog_file.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    fn path_for(&self, category: AssetCategory) -> Option<&Path> {
        match category {
            AssetCategory::Catalog => self.catalog_file(),
            AssetCategory::Config => self.config_file(),
        }
    }

    fn read(&self, category: AssetCategory) -> io::Result<Cow<'static, [u8]>> {
        // Try external first
        if let Some(path) = self.path_for(category) {
            if path.exists() {
                tracing::trace!(path = %path.display(), ?category, "Loading asset from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        // Fall back to embedded
        category
            .embedded()
            .inspect(|_| tracing::trace!(?category, "Loading asset from embedded data"))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded {} not found", category.asset_name()),
                )
            })
    }

    fn read_string(&self, category: AssetCategory) -> io::Result<String> {
        let bytes = self.read(category)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read the paint catalog as a UTF-8 string
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded catalog.
    pub fn read_catalog_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Catalog)
    }

    /// Read the config file as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Config)
    }

    /// Where an asset is actually read from, for display.
    pub fn describe_source(&self, category: AssetCategory) -> String {
        match self.path_for(category) {
            Some(path) if path.exists() => path.display().to_string(),
            Some(_) => "embedded (file not found)".to_string(),
            None => "embedded".to_string(),
        }
    }

    /// Seed missing files with embedded assets
    ///
    /// Only operates on paths that were configured (env var was set).
    pub fn seed_if_configured(&self) -> io::Result<SeedReport> {
        let mut report = SeedReport::default();

        for category in [AssetCategory::Catalog, AssetCategory::Config] {
            let Some(path) = self.path_for(category) else {
                continue;
            };
            if path.exists() {
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Some(data) = category.embedded() {
                fs::write(path, &*data)?;
                tracing::info!(
                    path = %path.display(),
                    ?category,
                    "Seeded file with embedded default"
                );
                match category {
                    AssetCategory::Catalog => report.catalog_seeded = true,
                    AssetCategory::Config => report.config_seeded = true,
                }
            }
        }

        Ok(report)
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths (or defaults if not set).
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let path = self
                .path_for(category)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(format!("./{}", category.asset_name())));

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Some(data) = category.embedded() {
                fs::write(&path, &*data)?;
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Catalog => EmbeddedCatalog::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => vec![CONFIG_ASSET.to_string()],
        }
    }
}
