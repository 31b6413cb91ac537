use geo::BooleanOps;
use geo_types::LineString;
use itertools::Itertools;

use crate::geometry::primitives::{Point, SPolygon};
use crate::nfp::{Nfp, NfpStrategy};

/// Approximates the NFP by the boolean difference `fixed \ moving`.
///
/// Cheap, but not a true no-fit polygon: it merely serves as a source of candidate translations,
/// which still need to be checked for overlap.
/// Two coincident identical polygons produce an empty NFP.
#[derive(Clone, Copy, Debug, Default)]
pub struct DifferenceNfp;

impl NfpStrategy for DifferenceNfp {
    fn nfp(&self, fixed: &SPolygon, moving: &SPolygon) -> Nfp {
        let diff = fixed.to_geo().difference(&moving.to_geo());

        let rings = diff
            .0
            .iter()
            .flat_map(|p| std::iter::once(p.exterior()).chain(p.interiors()))
            .map(open_ring)
            .collect_vec();

        Nfp::new(rings)
    }
}

fn open_ring(ls: &LineString<f64>) -> Vec<Point> {
    let mut points = ls.coords().map(|c| Point(c.x, c.y)).collect_vec();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}
