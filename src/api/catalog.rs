use axum::{
    extract::{Query, State},
    response::Json,
};
use ryb_mix::Paint;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::{Brand, Catalog};

/// A catalog paint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaintResponse {
    /// Unique paint id
    pub id: String,
    /// Display name
    pub name: String,
    /// Swatch color, `#rrggbb`
    pub hex: String,
    /// Colour Index pigment code(s)
    pub pigment: String,
    /// Brand display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl From<&Paint> for PaintResponse {
    fn from(paint: &Paint) -> Self {
        Self {
            id: paint.id.clone(),
            name: paint.name.clone(),
            hex: paint.hex_color.clone(),
            pigment: paint.pigment_label.clone(),
            brand: paint.brand.clone(),
        }
    }
}

/// A paint brand
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandResponse {
    pub id: String,
    pub name: String,
    /// Number of paints in the range
    pub paint_count: usize,
}

impl From<&Brand> for BrandResponse {
    fn from(brand: &Brand) -> Self {
        Self {
            id: brand.id.clone(),
            name: brand.name.clone(),
            paint_count: brand.paints.len(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BrandsResponse {
    pub brands: Vec<BrandResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaintsResponse {
    pub paints: Vec<PaintResponse>,
}

/// Query parameters for the paint listing
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaintsQuery {
    /// Only list this brand's paints
    #[serde(default)]
    pub brand: Option<String>,
}

/// List paint brands
#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "All brands in catalog order", body = BrandsResponse),
    ),
    tag = "Catalog"
)]
pub async fn handle_brands(State(catalog): State<Arc<Catalog>>) -> Json<BrandsResponse> {
    Json(BrandsResponse {
        brands: catalog.brands().iter().map(BrandResponse::from).collect(),
    })
}

/// List paints
///
/// All paints in catalog order, or one brand's range.
#[utoipa::path(
    get,
    path = "/api/paints",
    params(PaintsQuery),
    responses(
        (status = 200, description = "Paints in catalog order", body = PaintsResponse),
        (status = 404, description = "Unknown brand"),
    ),
    tag = "Catalog"
)]
pub async fn handle_paints(
    State(catalog): State<Arc<Catalog>>,
    Query(query): Query<PaintsQuery>,
) -> Result<Json<PaintsResponse>, ApiError> {
    let paints = match query.brand {
        Some(id) => {
            let brand = catalog
                .brand(&id)
                .ok_or_else(|| ApiError::BrandNotFound(id.clone()))?;
            brand.paints.iter().map(PaintResponse::from).collect()
        }
        None => catalog.paints().iter().map(PaintResponse::from).collect(),
    };

    Ok(Json(PaintsResponse { paints }))
}
