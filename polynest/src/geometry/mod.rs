#[doc(inline)]
pub use d_transformation::DTransformation;
#[doc(inline)]
pub use transformation::Transformation;

pub mod convex_hull;
mod d_transformation;
pub mod geo_traits;
pub mod kernel;
pub mod primitives;
pub mod shape_modification;
mod transformation;
