use ryb_mix::{Paint, Srgb};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::assets::AssetLoader;
use crate::error::{ApiError, CatalogError};

/// One brand group as stored in the catalog file
#[derive(Debug, Deserialize)]
struct BrandRecord {
    id: String,
    brand: String,
    colors: Vec<Paint>,
}

/// A paint brand and its range, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub paints: Vec<Paint>,
}

/// Validated, read-only paint catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    brands: Vec<Brand>,
    /// Every paint across all brands, in catalog order
    paints: Vec<Paint>,
    /// Paint id -> (brand index, index into `paints`)
    index: HashMap<String, (usize, usize)>,
}

impl Catalog {
    /// Parse and validate a catalog.
    ///
    /// Requires at least one brand, unique brand and paint ids, and a
    /// parseable color for every paint. Colors are normalized to `#rrggbb`
    /// and each paint gets its brand's display name.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<BrandRecord> = serde_json::from_str(json)?;
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut brand_ids = HashSet::new();
        let mut brands = Vec::with_capacity(records.len());
        let mut paints = Vec::new();
        let mut index = HashMap::new();

        for (brand_idx, record) in records.into_iter().enumerate() {
            if !brand_ids.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateBrand(record.id));
            }

            let mut range = Vec::with_capacity(record.colors.len());
            for mut paint in record.colors {
                let srgb: Srgb = paint
                    .hex_color
                    .parse()
                    .map_err(|source| CatalogError::InvalidColor {
                        id: paint.id.clone(),
                        value: paint.hex_color.clone(),
                        source,
                    })?;
                if index.contains_key(&paint.id) {
                    return Err(CatalogError::DuplicatePaint(paint.id));
                }

                paint.hex_color = srgb.to_hex();
                paint.brand = Some(record.brand.clone());
                index.insert(paint.id.clone(), (brand_idx, paints.len()));
                paints.push(paint.clone());
                range.push(paint);
            }

            brands.push(Brand {
                id: record.id,
                name: record.brand,
                paints: range,
            });
        }

        Ok(Self {
            brands,
            paints,
            index,
        })
    }

    /// Load the catalog from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Result<Self, CatalogError> {
        let content = loader.read_catalog_string()?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            brands = catalog.brands.len(),
            paints = catalog.paints.len(),
            "Loaded paint catalog"
        );
        Ok(catalog)
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    /// All paints across all brands, in catalog order
    pub fn paints(&self) -> &[Paint] {
        &self.paints
    }

    pub fn paint(&self, id: &str) -> Option<&Paint> {
        self.index.get(id).map(|&(_, i)| &self.paints[i])
    }

    /// Look up brands by id, failing on the first unknown one.
    pub fn require_brands(&self, ids: &[String]) -> Result<Vec<&Brand>, ApiError> {
        ids.iter()
            .map(|id| {
                self.brand(id)
                    .ok_or_else(|| ApiError::BrandNotFound(id.clone()))
            })
            .collect()
    }

    /// All paints of the given brands, in catalog order.
    pub fn paints_in_brands(&self, brand_ids: &[String]) -> Result<Vec<Paint>, ApiError> {
        let selected: HashSet<&str> = self
            .require_brands(brand_ids)?
            .into_iter()
            .map(|b| b.id.as_str())
            .collect();
        Ok(self
            .brands
            .iter()
            .filter(|b| selected.contains(b.id.as_str()))
            .flat_map(|b| b.paints.iter().cloned())
            .collect())
    }

    /// Resolve a painter's owned paints.
    ///
    /// Every id must exist. When `brand_ids` is given, paints outside those
    /// brands are dropped. The result is in catalog order with duplicates
    /// removed, whatever order the ids came in.
    pub fn select_owned(
        &self,
        paint_ids: &[String],
        brand_ids: Option<&[String]>,
    ) -> Result<Vec<Paint>, ApiError> {
        let allowed: Option<HashSet<&str>> = brand_ids
            .map(|ids| {
                self.require_brands(ids)
                    .map(|brands| brands.into_iter().map(|b| b.id.as_str()).collect())
            })
            .transpose()?;

        let mut wanted: Vec<usize> = Vec::with_capacity(paint_ids.len());
        for id in paint_ids {
            let &(brand_idx, paint_idx) = self
                .index
                .get(id)
                .ok_or_else(|| ApiError::PaintNotFound(id.clone()))?;
            let in_brands = allowed
                .as_ref()
                .map_or(true, |a| a.contains(self.brands[brand_idx].id.as_str()));
            if in_brands {
                wanted.push(paint_idx);
            }
        }
        wanted.sort_unstable();
        wanted.dedup();

        Ok(wanted.into_iter().map(|i| self.paints[i].clone()).collect())
    }
}
