use itertools::Itertools;

use crate::geometry::convex_hull::convex_hull_from_points;
use crate::geometry::primitives::{Point, SPolygon};
use crate::nfp::{Nfp, NfpStrategy};

/// NFP as the convex hull of the Minkowski difference `fixed ⊕ (-moving)`.
///
/// Exact when both polygons are convex, the convex hull of the true NFP otherwise.
/// Every candidate on its boundary therefore places `moving` in contact with, or clear of, `fixed`
/// (as long as `fixed` is convex).
#[derive(Clone, Copy, Debug, Default)]
pub struct MinkowskiHullNfp;

impl NfpStrategy for MinkowskiHullNfp {
    fn nfp(&self, fixed: &SPolygon, moving: &SPolygon) -> Nfp {
        let points = fixed
            .vertices
            .iter()
            .cartesian_product(moving.vertices.iter())
            .map(|(f, m)| Point(f.0 - m.0, f.1 - m.1))
            .collect_vec();

        Nfp::new(vec![convex_hull_from_points(points)])
    }
}
