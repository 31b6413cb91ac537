use itertools::Itertools;
use log::{debug, trace};
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use polynest::entities::{BufferedPart, Placement};
use polynest::geometry::DTransformation;
use polynest::geometry::geo_traits::Shape;
use polynest::geometry::kernel;
use polynest::geometry::primitives::{Point, Rect, SPolygon};
use polynest::nfp::NfpStrategy;
use polynest::util::assertions;

use crate::config::{NestingConfig, SheetPolicy};

/// Searches for the position of a part, relative to the parts that are already placed,
/// that minimizes the bounding box area of the layout.
///
/// Candidate positions are sampled from the no-fit polygons of the part with respect to every placed part.
pub struct PlacementSearch<'a> {
    strategy: &'a dyn NfpStrategy,
    /// If set, candidates have to lie within this rectangle
    container: Option<Rect>,
    parallel: bool,
}

/// A candidate translation with the bounding box area the layout would have if it were accepted
struct Candidate {
    translation: Point,
    area: f64,
}

impl<'a> PlacementSearch<'a> {
    pub fn new(strategy: &'a dyn NfpStrategy, container: Option<Rect>, parallel: bool) -> Self {
        Self {
            strategy,
            container,
            parallel,
        }
    }

    pub fn from_config(config: &NestingConfig, sheet: Rect) -> Self {
        let container = match config.sheet_policy {
            SheetPolicy::Unbounded => None,
            SheetPolicy::Contain => Some(sheet),
        };
        PlacementSearch::new(
            config.nfp_strategy.strategy(),
            container,
            config.parallel_candidates,
        )
    }

    /// Places `part` with respect to `placed`.
    ///
    /// `shape` is the contour of `part` transformed by `base`: the search only translates it further.
    /// If no candidate is free of overlap, the shape is translated to the origin and the
    /// resulting [`Placement`] is flagged as a fallback.
    pub fn place(
        &self,
        part: &BufferedPart,
        shape: &SPolygon,
        base: DTransformation,
        placed: &[Placement],
    ) -> Placement {
        let placement = match self.best_translation(shape, placed) {
            Some(t) => {
                let d_transf = base.then_translate(t.into());
                Placement::with_shape(part, d_transf, kernel::translate(shape, t.into()), false)
            }
            None => {
                if !placed.is_empty() {
                    debug!(
                        "[SEARCH] no free position for part {}, falling back to the origin",
                        part.id
                    );
                }
                let t = kernel::origin_translation(shape);
                let d_transf = base.then_translate(t);
                let fallback = !placed.is_empty() || !self.fits_container(&shape.bbox().translate(t));
                Placement::with_shape(part, d_transf, kernel::translate(shape, t), fallback)
            }
        };
        debug_assert!(assertions::placement_matches_part(&placement, part));
        placement
    }

    /// Finds the candidate translation for `shape` with the lowest layout bounding box area.
    /// Ties are broken by enumeration order: placed parts in order, then NFP rings, vertices before midpoints.
    fn best_translation(&self, shape: &SPolygon, placed: &[Placement]) -> Option<Point> {
        let placed_bbox = kernel::bounding_box(placed.iter().map(|p| p.shape.as_ref()))?;
        let shape_bbox = shape.bbox();

        //enumerate all candidates, sorted by the area they would result in (stable sort keeps enumeration order on ties)
        let candidates = placed
            .iter()
            .flat_map(|p| {
                let nfp = self.strategy.nfp(&p.shape, shape);
                nfp.candidates().collect_vec()
            })
            .map(|c| {
                let bbox = Rect::bounding_rect(placed_bbox, shape_bbox.translate(c.into()));
                Candidate {
                    translation: c,
                    area: bbox.area(),
                }
            })
            .sorted_by_key(|c| OrderedFloat(c.area))
            .collect_vec();

        trace!("[SEARCH] evaluating {} candidates", candidates.len());

        //the first valid candidate in the sorted list is the best one
        let is_valid = |c: &Candidate| self.translation_is_valid(shape, &shape_bbox, c.translation, placed);
        let best = match self.parallel {
            false => candidates.iter().find(|c| is_valid(c)),
            true => candidates.par_iter().find_first(|c| is_valid(c)),
        };

        best.map(|c| {
            trace!(
                "[SEARCH] best candidate at ({:.3}, {:.3}) with area {:.3}",
                c.translation.0, c.translation.1, c.area
            );
            c.translation
        })
    }

    fn translation_is_valid(
        &self,
        shape: &SPolygon,
        shape_bbox: &Rect,
        t: Point,
        placed: &[Placement],
    ) -> bool {
        if !self.fits_container(&shape_bbox.translate(t.into())) {
            return false;
        }
        let candidate = kernel::translate(shape, t.into());
        !placed.iter().any(|p| kernel::overlaps(&p.shape, &candidate))
    }

    fn fits_container(&self, bbox: &Rect) -> bool {
        self.container.is_none_or(|c| c.almost_contains(bbox))
    }
}
