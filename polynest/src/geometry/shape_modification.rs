use geo::Area;
use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::geometry::primitives::SPolygon;
use crate::{NestError, Result};

/// Offsets the boundary of a [`SPolygon`] outwards (`spacing > 0`) or inwards (`spacing < 0`).
///
/// A `spacing` of zero returns an unmodified copy.
/// Returns `Ok(None)` if an inward offset collapses the polygon entirely, which is a valid outcome:
/// the shape no longer has any footprint.
/// If the offset splits the polygon into several components, only the largest one is kept.
pub fn apply_spacing(shape: &SPolygon, spacing: f64) -> Result<Option<SPolygon>> {
    if !spacing.is_finite() {
        return Err(NestError::InvalidGeometry(format!(
            "spacing must be finite, got {spacing}"
        )));
    }
    if spacing == 0.0 {
        return Ok(Some(shape.clone()));
    }

    let buffered = geo_buffer::buffer_polygon(&shape.to_geo(), spacing);

    let n_components = buffered.0.len();
    let largest = buffered
        .0
        .into_iter()
        .filter(|p| p.unsigned_area() > 0.0)
        .max_by_key(|p| OrderedFloat(p.unsigned_area()));

    match largest {
        None => {
            debug!("[SPACING] offset of {spacing} collapsed the polygon");
            Ok(None)
        }
        Some(polygon) => {
            if n_components > 1 {
                warn!(
                    "[SPACING] offset of {spacing} split the polygon into {n_components} components, keeping the largest"
                );
            }
            if !polygon.interiors().is_empty() {
                debug!("[SPACING] holes created by the offset are ignored");
            }
            SPolygon::from_geo(&polygon).map(Some)
        }
    }
}
