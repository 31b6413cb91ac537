use std::sync::Arc;

use crate::entities::BufferedPart;
use crate::geometry::DTransformation;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::SPolygon;

/// A [`BufferedPart`] positioned by a [`DTransformation`].
#[derive(Clone, Debug)]
pub struct Placement {
    /// Index of the part in the input sequence
    pub part_idx: usize,
    pub part_id: String,
    /// Maps the buffered contour onto the sheet
    pub d_transf: DTransformation,
    /// The buffered contour after the transformation
    pub shape: Arc<SPolygon>,
    /// True if the placement search found no free position and the part was put at the origin regardless
    pub fallback: bool,
}

impl Placement {
    pub fn new(part: &BufferedPart, d_transf: DTransformation, fallback: bool) -> Self {
        let shape = part.shape.transform_clone(&d_transf.compose());
        Placement::with_shape(part, d_transf, shape, fallback)
    }

    /// Creates a placement for a transformed shape that was already computed.
    /// `shape` must equal the contour of `part` transformed by `d_transf`.
    pub fn with_shape(
        part: &BufferedPart,
        d_transf: DTransformation,
        shape: SPolygon,
        fallback: bool,
    ) -> Self {
        Placement {
            part_idx: part.part_idx,
            part_id: part.id.clone(),
            d_transf,
            shape: Arc::new(shape),
            fallback,
        }
    }

    /// The same placement, shifted by `(dx, dy)`.
    pub fn translated(&self, (dx, dy): (f64, f64)) -> Self {
        let shape = crate::geometry::kernel::translate(&self.shape, (dx, dy));
        Placement {
            d_transf: self.d_transf.then_translate((dx, dy)),
            shape: Arc::new(shape),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Part;
    use crate::geometry::geo_traits::Shape;
    use crate::geometry::primitives::Rect;

    #[test]
    fn shape_follows_the_transformation() {
        let part = Part::new("p", SPolygon::from(Rect::try_new(0.0, 0.0, 2.0, 1.0).unwrap()));
        let bp = BufferedPart::derive(0, &part, 0.0).unwrap().unwrap();
        let placement = Placement::new(&bp, DTransformation::new(90.0, (1.0, 0.0)), false);
        assert_eq!(placement.shape.bbox(), Rect::try_new(0.0, 0.0, 1.0, 2.0).unwrap());

        let moved = placement.translated((2.0, 3.0));
        assert_eq!(moved.shape.bbox(), Rect::try_new(2.0, 3.0, 3.0, 5.0).unwrap());
        assert_eq!(moved.d_transf, DTransformation::new(90.0, (3.0, 3.0)));
    }
}
