use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, Rect, SPolygon};

#[doc(inline)]
pub use difference::DifferenceNfp;
#[doc(inline)]
pub use minkowski::MinkowskiHullNfp;

mod difference;
mod minkowski;

/// A no-fit polygon, represented as the set of rings bounding it.
///
/// The rings are stored open: the edge from the last back to the first vertex is implied.
/// The NFP can be empty, in which case it does not yield any candidate positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Nfp {
    pub rings: Vec<Vec<Point>>,
}

impl Nfp {
    pub fn new(rings: Vec<Vec<Point>>) -> Self {
        let rings = rings.into_iter().filter(|r| !r.is_empty()).collect();
        Nfp { rings }
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Candidate translations sampled from the boundary of the NFP.
    ///
    /// For every ring and every pair of consecutive vertices `(v, next)`, including the closing pair,
    /// `v` is yielded first, followed by the midpoint of `v` and `next`.
    pub fn candidates(&self) -> impl Iterator<Item = Point> + '_ {
        self.rings.iter().flat_map(|ring| {
            let n = ring.len();
            (0..n).flat_map(move |i| {
                let v = ring[i];
                let next = ring[(i + 1) % n];
                [v, v.midpoint(&next)]
            })
        })
    }

    pub fn n_candidates(&self) -> usize {
        self.rings.iter().map(|r| 2 * r.len()).sum()
    }

    /// Bounding box of all rings, `None` if the NFP is empty.
    pub fn bbox(&self) -> Option<Rect> {
        Rect::from_points(self.rings.iter().flatten())
    }
}

/// Strategy to compute the no-fit polygon of a `moving` polygon with respect to a `fixed` one.
///
/// The reference point of `moving` is its coordinate origin:
/// translating `moving` by a point of the NFP brings it in contact with `fixed`.
pub trait NfpStrategy: Send + Sync {
    fn nfp(&self, fixed: &SPolygon, moving: &SPolygon) -> Nfp;
}

/// Selectable [`NfpStrategy`] implementations
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NfpKind {
    /// See [`MinkowskiHullNfp`]
    #[default]
    MinkowskiHull,
    /// See [`DifferenceNfp`]
    Difference,
}

impl NfpKind {
    pub fn strategy(&self) -> &'static dyn NfpStrategy {
        match self {
            NfpKind::MinkowskiHull => &MinkowskiHullNfp,
            NfpKind::Difference => &DifferenceNfp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_alternate_vertices_and_midpoints() {
        let nfp = Nfp::new(vec![vec![
            Point(0.0, 0.0),
            Point(2.0, 0.0),
            Point(2.0, 2.0),
        ]]);
        let candidates = nfp.candidates().collect::<Vec<_>>();
        assert_eq!(
            candidates,
            vec![
                Point(0.0, 0.0),
                Point(1.0, 0.0),
                Point(2.0, 0.0),
                Point(2.0, 1.0),
                Point(2.0, 2.0),
                Point(1.0, 1.0),
            ]
        );
        assert_eq!(nfp.n_candidates(), candidates.len());
    }

    #[test]
    fn empty_nfp_has_no_candidates() {
        let nfp = Nfp::new(vec![vec![]]);
        assert!(nfp.is_empty());
        assert_eq!(nfp.candidates().count(), 0);
        assert!(nfp.bbox().is_none());
    }

    #[test]
    fn kind_deserializes_from_snake_case() {
        let kind: NfpKind = serde_json::from_str("\"difference\"").unwrap();
        assert_eq!(kind, NfpKind::Difference);
        assert_eq!(NfpKind::default(), NfpKind::MinkowskiHull);
    }
}
