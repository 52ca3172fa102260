pub mod catalog;
pub mod mix;

pub use catalog::{__path_handle_brands, __path_handle_paints};
pub use catalog::{
    handle_brands, handle_paints, BrandResponse, BrandsResponse, PaintResponse, PaintsQuery,
    PaintsResponse,
};
pub use mix::{handle_mix, ComponentResponse, MixRequestBody, MixResponse, __path_handle_mix};
