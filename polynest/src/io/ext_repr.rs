use serde::{Deserialize, Serialize};

/// External representation of a nesting instance: a sheet and the parts to nest on it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// Optional name of the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub sheet: ExtSheet,
    pub parts: Vec<ExtPart>,
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSheet {
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`Part`](crate::entities::Part).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    /// Identifier of the part, reported back in the solution
    pub id: String,
    /// Outer boundary of the part as a list of `[x, y]` coordinates.
    /// The ring may be closed (first point repeated at the end) or open.
    pub polygon: Vec<(f64, f64)>,
}

/// External representation of a [`Layout`](crate::entities::Layout).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub placements: Vec<ExtPlacement>,
    pub sheet: ExtSheet,
    /// Area of the bounding box around all placed parts
    pub bbox_area: f64,
    /// Parts which are not part of the layout
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<ExtSkippedPart>,
}

/// External representation of a [`Placement`](crate::entities::Placement).
///
/// The part's input coordinates are first rotated by `rotation` degrees around the origin,
/// and then translated by `(x, y)`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, in `[0, 360)`
    pub rotation: f64,
    /// Present and true if the part was put at the origin as a last resort and may overlap others
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

/// External representation of a [`SkippedPart`](crate::entities::SkippedPart).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSkippedPart {
    pub id: String,
    pub reason: String,
}
