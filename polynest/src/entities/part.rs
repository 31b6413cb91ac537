use std::sync::Arc;

use crate::Result;
use crate::geometry::primitives::SPolygon;
use crate::geometry::shape_modification::apply_spacing;

/// A part to be nested, as supplied by the caller.
#[derive(Clone, Debug)]
pub struct Part {
    pub id: String,
    /// Contour of the part, in the coordinates of the input
    pub shape: SPolygon,
}

impl Part {
    pub fn new(id: impl Into<String>, shape: SPolygon) -> Self {
        Part {
            id: id.into(),
            shape,
        }
    }
}

/// A [`Part`] whose contour has been offset by the spacing of a nesting run.
/// All placement decisions are made on buffered parts.
#[derive(Clone, Debug)]
pub struct BufferedPart {
    /// Index of the original part in the input sequence
    pub part_idx: usize,
    pub id: String,
    pub shape: Arc<SPolygon>,
}

impl BufferedPart {
    /// Buffers `part` by `spacing`.
    /// Returns `Ok(None)` if the offset collapses the contour, in which case the part has no footprint.
    pub fn derive(part_idx: usize, part: &Part, spacing: f64) -> Result<Option<BufferedPart>> {
        let shape = apply_spacing(&part.shape, spacing)?;
        Ok(shape.map(|shape| BufferedPart {
            part_idx,
            id: part.id.clone(),
            shape: Arc::new(shape),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Rect;

    #[test]
    fn unbuffered_part_keeps_its_contour() {
        let part = Part::new("a", SPolygon::from(Rect::try_new(0.0, 0.0, 1.0, 2.0).unwrap()));
        let bp = BufferedPart::derive(3, &part, 0.0).unwrap().unwrap();
        assert_eq!(bp.part_idx, 3);
        assert_eq!(bp.id, "a");
        assert_eq!(bp.shape.vertices, part.shape.vertices);
    }
}
