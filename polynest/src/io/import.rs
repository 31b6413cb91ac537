use float_cmp::approx_eq;
use itertools::Itertools;
use log::{info, warn};

use crate::entities::{Part, Sheet, SkippedPart};
use crate::geometry::primitives::{Point, SPolygon};
use crate::io::ext_repr::{ExtInstance, ExtPart, ExtSheet};
use crate::{NestError, Result};

/// Internal representation of an [`ExtInstance`], ready to be nested.
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: Option<String>,
    pub sheet: Sheet,
    /// Parts with a valid contour, in input order
    pub parts: Vec<Part>,
    /// Parts that were filtered out during import
    pub rejected: Vec<SkippedPart>,
}

/// Converts an [`ExtInstance`] into an [`Instance`].
///
/// An invalid sheet is an error. Parts with an invalid contour are not: they are logged and
/// collected in [`Instance::rejected`].
pub fn import_instance(ext_instance: &ExtInstance) -> Result<Instance> {
    let sheet = import_sheet(&ext_instance.sheet)?;

    let (parts, rejected): (Vec<Part>, Vec<SkippedPart>) = ext_instance
        .parts
        .iter()
        .map(|ext_part| {
            import_part(ext_part).map_err(|e| {
                warn!("[IMPORT] part {} rejected: {e}", ext_part.id);
                SkippedPart {
                    id: ext_part.id.clone(),
                    reason: e.to_string(),
                }
            })
        })
        .partition_result();

    info!(
        "[IMPORT] {} parts imported, {} rejected, sheet {} x {}",
        parts.len(),
        rejected.len(),
        sheet.width,
        sheet.height
    );

    Ok(Instance {
        name: ext_instance.name.clone(),
        sheet,
        parts,
        rejected,
    })
}

pub fn import_sheet(ext_sheet: &ExtSheet) -> Result<Sheet> {
    Sheet::new(ext_sheet.width, ext_sheet.height)
}

pub fn import_part(ext_part: &ExtPart) -> Result<Part> {
    let shape = import_simple_polygon(&ext_part.polygon)?;
    Ok(Part::new(ext_part.id.clone(), shape))
}

pub fn import_simple_polygon(coords: &[(f64, f64)]) -> Result<SPolygon> {
    let mut points = coords.iter().map(|&(x, y)| Point(x, y)).collect_vec();
    //Strip the last vertex if it is the same as the first one
    if points.len() > 1 && points[0] == points[points.len() - 1] {
        points.pop();
    }
    //Remove duplicates that are consecutive (e.g. [1, 2, 2, 3] -> [1, 2, 3])
    eliminate_degenerate_points(&mut points);
    //Bail if there are any non-consecutive duplicates.
    if points.len() != points.iter().unique().count() {
        return Err(NestError::InvalidGeometry(
            "simple polygon has non-consecutive duplicate vertices".into(),
        ));
    }
    SPolygon::new(points)
}

pub fn eliminate_degenerate_points(points: &mut Vec<Point>) {
    let mut indices_to_remove = vec![];
    let n_points = points.len();
    if n_points < 2 {
        return;
    }
    for i in 0..n_points {
        let j = (i + 1) % n_points;
        let p_i = points[i];
        let p_j = points[j];
        if approx_eq!(f64, p_i.0, p_j.0) && approx_eq!(f64, p_i.1, p_j.1) {
            //points are equal, mark for removal
            indices_to_remove.push(i);
        }
    }
    //remove points in reverse order to avoid shifting indices
    indices_to_remove.sort_unstable_by(|a, b| b.cmp(a));
    for index in indices_to_remove {
        if index < points.len() {
            let j = (index + 1) % points.len();
            warn!(
                "[IMPORT] degenerate point of input simple polygon eliminated (idx: {}, {:?}, {:?})",
                index, points[index], points[j]
            );
            points.remove(index);
        }
    }
}
