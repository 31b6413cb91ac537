use itertools::Itertools;

use crate::entities::{Layout, Placement, Sheet, SkippedPart};
use crate::io::ext_repr::{ExtPlacement, ExtSheet, ExtSkippedPart, ExtSolution};

/// Exports a [`Layout`] by composing an [`ExtSolution`] from it.
pub fn export_layout(layout: &Layout) -> ExtSolution {
    ExtSolution {
        placements: layout.placements.iter().map(export_placement).collect_vec(),
        sheet: export_sheet(&layout.sheet),
        bbox_area: layout.bbox_area(),
        skipped: layout.skipped.iter().map(export_skipped_part).collect_vec(),
    }
}

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    let (x, y) = placement.d_transf.translation();
    ExtPlacement {
        id: placement.part_id.clone(),
        x,
        y,
        rotation: placement.d_transf.rotation(),
        fallback: placement.fallback,
    }
}

pub fn export_sheet(sheet: &Sheet) -> ExtSheet {
    ExtSheet {
        width: sheet.width,
        height: sheet.height,
    }
}

pub fn export_skipped_part(skipped: &SkippedPart) -> ExtSkippedPart {
    ExtSkippedPart {
        id: skipped.id.clone(),
        reason: skipped.reason.clone(),
    }
}
