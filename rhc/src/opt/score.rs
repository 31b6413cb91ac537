use ordered_float::NotNan;

use polynest::geometry::kernel;
use polynest::geometry::primitives::SPolygon;

/// The score of a layout: area of the axis-aligned bounding box around all placed shapes.
/// Lower is better.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Eq, Ord)]
pub struct LayoutScore(NotNan<f64>);

impl LayoutScore {
    /// Score of a layout that does not exist yet, worse than any real layout
    pub const WORST: LayoutScore = LayoutScore(unsafe { NotNan::new_unchecked(f64::INFINITY) });

    /// Bounding box areas of finite coordinates are never NaN, an empty layout scores 0.
    pub fn new(area: f64) -> Self {
        LayoutScore(NotNan::new(area).expect("layout area is NaN"))
    }

    pub fn from_shapes<'a>(shapes: impl IntoIterator<Item = &'a SPolygon>) -> Self {
        LayoutScore::new(kernel::bounding_box_area(shapes))
    }

    pub fn area(&self) -> f64 {
        self.0.into_inner()
    }
}
