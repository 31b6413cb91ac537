//! Geometry kernel and no-fit-polygon toolkit for nesting irregular 2D parts on a rectangular sheet.
//!
//! The crate provides the building blocks used by an optimizer:
//! * [`geometry`]: polygons, rigid transformations, spacing (buffer) and the overlap predicate.
//! * [`nfp`]: pluggable no-fit-polygon strategies that yield candidate translations.
//! * [`entities`]: parts, sheets, placements and layouts.
//! * [`io`]: serializable external representations of instances and solutions.

/// Entities to model nesting problems
pub mod entities;

/// Error type shared by the whole crate
mod error;

/// Geometric primitives and the kernel operations on them
pub mod geometry;

/// Importing instances and exporting layouts
pub mod io;

/// No-fit-polygon strategies
pub mod nfp;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::NestError;

#[doc(inline)]
pub use error::Result;
