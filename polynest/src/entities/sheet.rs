use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Rect;
use crate::{NestError, Result};

/// Rectangular sheet, anchored at the origin, on which parts are nested.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
}

impl Sheet {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let sheet = Sheet { width, height };
        sheet.validate()?;
        Ok(sheet)
    }

    /// Checks the dimensions, also for sheets that were deserialized directly.
    pub fn validate(&self) -> Result<()> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        match valid(self.width) && valid(self.height) {
            true => Ok(()),
            false => Err(NestError::Configuration(format!(
                "sheet dimensions must be positive, got {} x {}",
                self.width, self.height
            ))),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
