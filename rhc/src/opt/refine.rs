use itertools::Itertools;
use log::debug;

use polynest::entities::{BufferedPart, Placement};
use polynest::geometry::kernel;
use polynest::util::FPA;

use crate::opt::search::PlacementSearch;

/// Hill climber over the rotations of the placed parts.
///
/// Every part in turn is rotated by `-step` and `+step` degrees around the coordinate origin and
/// placed again against the other parts. The first rotation that strictly reduces the bounding box
/// area is accepted. Sweeps are repeated until one passes without any improvement.
pub struct RotationRefiner<'a> {
    pub search: &'a PlacementSearch<'a>,
    pub step: f64,
    pub max_sweeps: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct RefineResult {
    pub placements: Vec<Placement>,
    pub n_sweeps: usize,
    pub n_accepted: usize,
}

impl<'a> RotationRefiner<'a> {
    pub fn new(search: &'a PlacementSearch<'a>, step: f64, max_sweeps: Option<usize>) -> Self {
        Self {
            search,
            step,
            max_sweeps,
        }
    }

    /// Refines `placements`, whose parts are looked up in `parts` by their index.
    /// The bounding box area of the result is never larger than the one of the input.
    pub fn refine(&self, parts: &[BufferedPart], placements: Vec<Placement>) -> RefineResult {
        let mut current = placements;
        let mut current_area = kernel::bounding_box_area(current.iter().map(|p| p.shape.as_ref()));
        let (mut n_sweeps, mut n_accepted) = (0, 0);

        loop {
            if self.max_sweeps.is_some_and(|max| n_sweeps >= max) {
                debug!("[REFINE] sweep limit of {n_sweeps} reached");
                break;
            }
            n_sweeps += 1;
            let mut improved = false;

            for i in 0..current.len() {
                for angle in [-self.step, self.step] {
                    let target = &current[i];
                    let part = parts
                        .iter()
                        .find(|p| p.part_idx == target.part_idx)
                        .expect("placed part is not part of the run");

                    let others = current
                        .iter()
                        .enumerate()
                        .filter(|(j, _)| *j != i)
                        .map(|(_, p)| p.clone())
                        .collect_vec();

                    let rotated = kernel::rotate(&target.shape, angle);
                    let base = target.d_transf.then_rotate(angle);
                    let moved = self.search.place(part, &rotated, base, &others);
                    if moved.fallback {
                        //would break the overlap-free guarantee
                        continue;
                    }

                    let area = kernel::bounding_box_area(
                        others
                            .iter()
                            .chain(std::iter::once(&moved))
                            .map(|p| p.shape.as_ref()),
                    );

                    if FPA(area) < FPA(current_area) {
                        debug!(
                            "[REFINE] rotating part {} by {angle}° reduces area {:.3} -> {:.3}",
                            moved.part_id, current_area, area
                        );
                        current = others;
                        current.push(moved);
                        current_area = area;
                        improved = true;
                        n_accepted += 1;
                        break;
                    }
                }
            }

            if !improved {
                break;
            }
        }

        RefineResult {
            placements: current,
            n_sweeps,
            n_accepted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polynest::entities::Part;
    use polynest::geometry::DTransformation;
    use polynest::geometry::geo_traits::Shape;
    use polynest::geometry::primitives::{Point, Rect, SPolygon};
    use polynest::nfp::MinkowskiHullNfp;

    fn buffered(idx: usize, shape: SPolygon) -> BufferedPart {
        BufferedPart::derive(idx, &Part::new(format!("p{idx}"), shape), 0.0)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn tilted_part_is_straightened() {
        //a 4x1 rectangle tilted by 15 degrees, one step away from being axis aligned
        let rect = SPolygon::from(Rect::try_new(0.0, 0.0, 4.0, 1.0).unwrap());
        let tilted = kernel::rotate(&rect, 15.0);
        let parts = vec![buffered(0, tilted)];

        let search = PlacementSearch::new(&MinkowskiHullNfp, None, false);
        let initial = vec![search.place(&parts[0], &parts[0].shape, DTransformation::empty(), &[])];
        let initial_area = kernel::bounding_box_area(initial.iter().map(|p| p.shape.as_ref()));

        let refiner = RotationRefiner::new(&search, 15.0, None);
        let result = refiner.refine(&parts, initial);
        let refined_area =
            kernel::bounding_box_area(result.placements.iter().map(|p| p.shape.as_ref()));

        assert!(initial_area > 4.0 + 1e-3);
        assert!((refined_area - 4.0).abs() < 1e-6);
        assert_eq!(result.n_accepted, 1);
        assert!((result.placements[0].d_transf.rotation() - 345.0).abs() < 1e-9);
    }

    #[test]
    fn refiner_never_worsens_and_respects_sweep_cap() {
        let search = PlacementSearch::new(&MinkowskiHullNfp, None, false);
        let parts = vec![
            buffered(0, SPolygon::from(Rect::try_new(0.0, 0.0, 2.0, 1.0).unwrap())),
            buffered(1, SPolygon::new(vec![Point(0.0, 0.0), Point(2.0, 0.0), Point(0.0, 2.0)]).unwrap()),
        ];
        let first = search.place(&parts[0], &parts[0].shape, DTransformation::empty(), &[]);
        let second = search.place(&parts[1], &parts[1].shape, DTransformation::empty(), &[first.clone()]);
        let initial = vec![first, second];
        let initial_area = kernel::bounding_box_area(initial.iter().map(|p| p.shape.as_ref()));

        let unlimited = RotationRefiner::new(&search, 15.0, None).refine(&parts, initial.clone());
        let area = kernel::bounding_box_area(unlimited.placements.iter().map(|p| p.shape.as_ref()));
        assert!(area <= initial_area);
        assert_eq!(unlimited.placements.len(), 2);

        let capped = RotationRefiner::new(&search, 15.0, Some(0)).refine(&parts, initial);
        assert_eq!(capped.n_sweeps, 0);
        assert_eq!(capped.n_accepted, 0);
        assert!(capped.placements.iter().all(|p| p.shape.bbox().area() > 0.0));
    }
}
