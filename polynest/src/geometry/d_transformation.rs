use std::fmt::Display;

use ordered_float::NotNan;

use crate::geometry::Transformation;
use crate::geometry::transformation::sin_cos_deg;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
/// [Proper rigid transformation](https://en.wikipedia.org/wiki/Rigid_transformation),
/// decomposed into a rotation around the coordinate origin followed by a translation.
pub struct DTransformation {
    /// The rotation in degrees, normalized to `[0, 360)`
    pub rotation: NotNan<f64>,
    /// The translation in the x and y-axis
    pub translation: (NotNan<f64>, NotNan<f64>),
}

impl DTransformation {
    pub fn new(rotation: f64, translation: (f64, f64)) -> Self {
        Self {
            rotation: NotNan::new(rotation.rem_euclid(360.0)).expect("rotation is NaN"),
            translation: (
                NotNan::new(translation.0).expect("translation.0 is NaN"),
                NotNan::new(translation.1).expect("translation.1 is NaN"),
            ),
        }
    }

    pub const fn empty() -> Self {
        const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
        Self {
            rotation: _0,
            translation: (_0, _0),
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation.into()
    }

    pub fn translation(&self) -> (f64, f64) {
        (self.translation.0.into(), self.translation.1.into())
    }

    pub fn compose(&self) -> Transformation {
        Transformation::from_dt(self)
    }

    /// The transformation equivalent to applying `self` and afterwards rotating by `angle` degrees around the origin.
    /// The rotation also acts on the translation: `R(a)·(R(r)·p + t) = R(r + a)·p + R(a)·t`.
    pub fn then_rotate(&self, angle: f64) -> Self {
        let (sin, cos) = sin_cos_deg(angle);
        let (tx, ty) = self.translation();
        DTransformation::new(
            self.rotation() + angle,
            (tx * cos - ty * sin, tx * sin + ty * cos),
        )
    }

    /// The transformation equivalent to applying `self` and afterwards translating by `(dx, dy)`.
    pub fn then_translate(&self, (dx, dy): (f64, f64)) -> Self {
        let (tx, ty) = self.translation();
        DTransformation::new(self.rotation(), (tx + dx, ty + dy))
    }
}

impl Display for DTransformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r: {:.3}°, t: ({:.3}, {:.3})",
            self.rotation.into_inner(),
            self.translation.0.into_inner(),
            self.translation.1.into_inner()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_traits::Transformable;
    use crate::geometry::primitives::Point;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn then_rotate_matches_rotating_the_transformed_point() {
        let dt = DTransformation::new(10.0, (3.0, 1.0));
        let p = Point(0.5, 2.0);

        let moved = p.transform_clone(&dt.compose());
        let expected = moved.transform_clone(&Transformation::from_rotation(25.0));

        let composed = dt.then_rotate(25.0);
        assert_close(p.transform_clone(&composed.compose()), expected);
        assert!((composed.rotation() - 35.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_is_normalized() {
        let dt = DTransformation::empty().then_rotate(-15.0);
        assert!((dt.rotation() - 345.0).abs() < 1e-12);
        let dt = dt.then_rotate(15.0).then_translate((1.0, 2.0));
        assert_eq!(dt, DTransformation::new(0.0, (1.0, 2.0)));
    }
}
