//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::{BufferedPart, Layout, Placement};
use crate::geometry::geo_traits::Transformable;

/// The cached shape of `placement` equals the contour of `part` transformed by its [`DTransformation`](crate::geometry::DTransformation).
pub fn placement_matches_part(placement: &Placement, part: &BufferedPart) -> bool {
    if placement.part_idx != part.part_idx {
        return false;
    }
    let expected = part.shape.transform_clone(&placement.d_transf.compose());
    let matches = expected
        .vertices
        .iter()
        .zip_eq(placement.shape.vertices.iter())
        .all(|(a, b)| approx_eq!(f64, a.0, b.0, epsilon = 1e-6) && approx_eq!(f64, a.1, b.1, epsilon = 1e-6));
    if !matches {
        error!(
            "placement of part {} does not match its transformation {}",
            placement.part_id, placement.d_transf
        );
    }
    matches
}

/// Every part appears at most once in `layout`.
pub fn layout_parts_unique(layout: &Layout) -> bool {
    layout.placements.iter().map(|p| p.part_idx).all_unique()
}

/// No placed shapes overlap, except for those involved in a fallback placement.
pub fn layout_is_overlap_free_besides_fallbacks(layout: &Layout) -> bool {
    layout
        .placements
        .iter()
        .filter(|p| !p.fallback)
        .tuple_combinations()
        .all(|(a, b)| {
            let ok = !crate::geometry::kernel::overlaps(&a.shape, &b.shape);
            if !ok {
                error!("parts {} and {} overlap", a.part_id, b.part_id);
            }
            ok
        })
}
