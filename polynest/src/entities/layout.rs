use itertools::Itertools;

use crate::entities::{Placement, Sheet};
use crate::geometry::kernel;
use crate::geometry::primitives::{Rect, SPolygon};

/// A part that was left out of a nesting run, with the reason why.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedPart {
    pub id: String,
    pub reason: String,
}

/// A [`Layout`] is an ordered set of [`Placement`]s on a [`Sheet`].
/// Its score is the area of the axis-aligned bounding box around all placed shapes.
#[derive(Clone, Debug)]
pub struct Layout {
    pub sheet: Sheet,
    pub placements: Vec<Placement>,
    /// Parts that could not be part of the layout
    pub skipped: Vec<SkippedPart>,
}

impl Layout {
    pub fn new(sheet: Sheet, placements: Vec<Placement>) -> Self {
        Layout {
            sheet,
            placements,
            skipped: vec![],
        }
    }

    pub fn empty(sheet: Sheet) -> Self {
        Layout::new(sheet, vec![])
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &SPolygon> {
        self.placements.iter().map(|p| p.shape.as_ref())
    }

    /// Bounding box of all placed shapes, `None` if the layout is empty
    pub fn bbox(&self) -> Option<Rect> {
        kernel::bounding_box(self.shapes())
    }

    pub fn bbox_area(&self) -> f64 {
        kernel::bounding_box_area(self.shapes())
    }

    /// Number of placements that were put at the origin because no free position was found
    pub fn n_fallbacks(&self) -> usize {
        self.placements.iter().filter(|p| p.fallback).count()
    }

    /// True if no pair of placed shapes has overlapping interiors.
    pub fn is_overlap_free(&self) -> bool {
        self.placements
            .iter()
            .tuple_combinations()
            .all(|(a, b)| !kernel::overlaps(&a.shape, &b.shape))
    }

    /// True if every placed shape lies within the sheet.
    pub fn fits_sheet(&self) -> bool {
        self.bbox()
            .is_none_or(|bbox| self.sheet.rect().almost_contains(&bbox))
    }

    /// Returns the layout translated such that the minimum corner of its bounding box is at `(0, 0)`.
    /// The score is unaffected.
    pub fn normalized(&self) -> Layout {
        match self.bbox() {
            None => self.clone(),
            Some(bbox) => {
                let t = (-bbox.x_min, -bbox.y_min);
                Layout {
                    placements: self.placements.iter().map(|p| p.translated(t)).collect(),
                    ..self.clone()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{BufferedPart, Part};
    use crate::geometry::DTransformation;

    fn placed_square(idx: usize, x: f64, y: f64) -> Placement {
        let part = Part::new(
            format!("sq{idx}"),
            SPolygon::from(Rect::try_new(0.0, 0.0, 1.0, 1.0).unwrap()),
        );
        let bp = BufferedPart::derive(idx, &part, 0.0).unwrap().unwrap();
        Placement::new(&bp, DTransformation::new(0.0, (x, y)), false)
    }

    #[test]
    fn empty_layout_has_no_area() {
        let layout = Layout::empty(Sheet::new(10.0, 10.0).unwrap());
        assert_eq!(layout.bbox_area(), 0.0);
        assert!(layout.is_overlap_free());
        assert!(layout.fits_sheet());
    }

    #[test]
    fn touching_placements_are_overlap_free() {
        let sheet = Sheet::new(10.0, 10.0).unwrap();
        let layout = Layout::new(sheet, vec![placed_square(0, 0.0, 0.0), placed_square(1, 1.0, 0.0)]);
        assert!(layout.is_overlap_free());
        assert_eq!(layout.bbox_area(), 2.0);

        let layout = Layout::new(sheet, vec![placed_square(0, 0.0, 0.0), placed_square(1, 0.5, 0.0)]);
        assert!(!layout.is_overlap_free());
    }

    #[test]
    fn normalization_keeps_the_score() {
        let sheet = Sheet::new(2.0, 2.0).unwrap();
        let layout = Layout::new(sheet, vec![placed_square(0, -3.0, 2.0), placed_square(1, -2.0, 2.0)]);
        assert!(!layout.fits_sheet());

        let normalized = layout.normalized();
        let bbox = normalized.bbox().unwrap();
        assert_eq!((bbox.x_min, bbox.y_min), (0.0, 0.0));
        assert_eq!(normalized.bbox_area(), layout.bbox_area());
        assert!(normalized.fits_sheet());
    }
}
