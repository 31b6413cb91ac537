//! Kernel operations on [`SPolygon`]s used by the placement search.

use geo::{Area, BooleanOps};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Rect, SPolygon};

/// Intersections smaller than this fraction of the smallest polygon's area are treated as touching.
pub const OVERLAP_TOLERANCE: f64 = 1e-9;

/// Translation that moves the minimum corner of the bounding box of `shape` to `(0, 0)`.
pub fn origin_translation(shape: &SPolygon) -> (f64, f64) {
    let bbox = shape.bbox();
    (-bbox.x_min, -bbox.y_min)
}

/// Translates `shape` so the minimum corner of its bounding box lies on the origin.
pub fn translate_to_origin(shape: &SPolygon) -> SPolygon {
    translate(shape, origin_translation(shape))
}

/// Rotates `shape` around the coordinate origin (not its own centroid) by `angle` degrees.
pub fn rotate(shape: &SPolygon, angle: f64) -> SPolygon {
    shape.transform_clone(&Transformation::from_rotation(angle))
}

pub fn translate(shape: &SPolygon, (dx, dy): (f64, f64)) -> SPolygon {
    shape.transform_clone(&Transformation::from_translation((dx, dy)))
}

/// Smallest axis-aligned rectangle covering every vertex of every polygon, `None` if there are none.
pub fn bounding_box<'a>(shapes: impl IntoIterator<Item = &'a SPolygon>) -> Option<Rect> {
    shapes
        .into_iter()
        .map(|s| s.bbox())
        .reduce(Rect::bounding_rect)
}

/// Area of [`bounding_box`], `0.0` for an empty sequence.
pub fn bounding_box_area<'a>(shapes: impl IntoIterator<Item = &'a SPolygon>) -> f64 {
    bounding_box(shapes).map_or(0.0, |bbox| bbox.area())
}

/// True if the interiors of `a` and `b` intersect.
///
/// Shapes that only share (parts of) their boundary are not overlapping.
/// A cheap bounding box test is done first, the exact test computes the area of the boolean intersection.
pub fn overlaps(a: &SPolygon, b: &SPolygon) -> bool {
    if !a.bbox().interiors_overlap(&b.bbox()) {
        return false;
    }
    let intersection_area = a.to_geo().intersection(&b.to_geo()).unsigned_area();
    intersection_area > OVERLAP_TOLERANCE * f64::min(a.area(), b.area())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Point;
    use test_case::test_case;

    fn square(x: f64, y: f64, size: f64) -> SPolygon {
        SPolygon::from(Rect::try_new(x, y, x + size, y + size).unwrap())
    }

    fn triangle() -> SPolygon {
        SPolygon::new(vec![Point(3.0, 2.0), Point(5.0, 2.0), Point(4.0, 4.0)]).unwrap()
    }

    #[test]
    fn translate_to_origin_moves_bbox_corner() {
        let moved = translate_to_origin(&triangle());
        let bbox = moved.bbox();
        assert_eq!((bbox.x_min, bbox.y_min), (0.0, 0.0));
        assert_eq!((bbox.x_max, bbox.y_max), (2.0, 2.0));
        assert_eq!(moved.area(), triangle().area());
    }

    #[test]
    fn rotation_is_about_the_coordinate_origin() {
        let rotated = rotate(&square(1.0, 0.0, 1.0), 90.0);
        assert_eq!(rotated.bbox(), Rect::try_new(-1.0, 1.0, 0.0, 2.0).unwrap());

        let full_turn = rotate(&rotate(&triangle(), 180.0), 180.0);
        assert_eq!(full_turn.vertices, triangle().vertices);
    }

    #[test]
    fn bounding_box_area_of_sets() {
        assert_eq!(bounding_box_area(&Vec::<SPolygon>::new()), 0.0);
        let shapes = [square(0.0, 0.0, 1.0), square(2.0, 1.0, 1.0)];
        assert_eq!(bounding_box_area(&shapes), 6.0);
    }

    #[test_case(square(1.0, 0.0, 1.0), false; "shared edge")]
    #[test_case(square(1.0, 1.0, 1.0), false; "shared corner")]
    #[test_case(square(3.0, 3.0, 1.0), false; "disjoint")]
    #[test_case(square(0.5, 0.5, 1.0), true; "partial overlap")]
    #[test_case(square(0.25, 0.25, 0.5), true; "contained")]
    #[test_case(square(0.0, 0.0, 1.0), true; "identical")]
    fn overlap_against_unit_square(other: SPolygon, expected: bool) {
        let unit = square(0.0, 0.0, 1.0);
        assert_eq!(overlaps(&unit, &other), expected);
        assert_eq!(overlaps(&other, &unit), expected);
    }
}
