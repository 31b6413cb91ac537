use geo_types::{Coord, LineString, Polygon};
use itertools::Itertools;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use crate::{NestError, Result};

/// Geometric primitive representing a simple polygon: <https://en.wikipedia.org/wiki/Simple_polygon>
///
/// The ring is stored open (the closing vertex is implied) and always oriented counterclockwise.
/// Self-intersections are not checked.
#[derive(Clone, Debug)]
pub struct SPolygon {
    /// Vertices of the outer ring, counterclockwise
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of the interior
    pub area: f64,
}

impl SPolygon {
    /// Create a new simple polygon from a set of points.
    /// Fails if there are fewer than 3 distinct vertices or if the polygon has no area.
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        //strip the closing vertex if present
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.iter().unique().count() < 3 {
            return Err(NestError::InvalidGeometry(format!(
                "simple polygon must have at least 3 distinct vertices: {points:?}"
            )));
        }
        if points.iter().any(|p| !p.0.is_finite() || !p.1.is_finite()) {
            return Err(NestError::InvalidGeometry(format!(
                "simple polygon contains non-finite coordinates: {points:?}"
            )));
        }

        let area = match SPolygon::calculate_area(&points) {
            0.0 => {
                return Err(NestError::InvalidGeometry(format!(
                    "simple polygon has no area: {points:?}"
                )));
            }
            area if area < 0.0 => {
                //edges should always be ordered counterclockwise (positive area)
                points.reverse();
                -area
            }
            area => area,
        };

        let bbox = SPolygon::generate_bounding_box(&points);

        Ok(SPolygon {
            vertices: points,
            bbox,
            area,
        })
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn generate_bounding_box(points: &[Point]) -> Rect {
        Rect::from_points(points).expect("bounding box of an empty point set")
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }

    /// Converts to a [`geo_types::Polygon`] without holes, for use with the `geo` algorithms.
    pub fn to_geo(&self) -> Polygon<f64> {
        let coords = self
            .vertices
            .iter()
            .map(|p| Coord { x: p.0, y: p.1 })
            .collect_vec();
        Polygon::new(LineString::new(coords), vec![])
    }

    /// Converts the exterior of a [`geo_types::Polygon`] back into a [`SPolygon`]. Holes are discarded.
    pub fn from_geo(polygon: &Polygon<f64>) -> Result<Self> {
        let points = polygon
            .exterior()
            .coords()
            .map(|c| Point(c.x, c.y))
            .collect_vec();
        SPolygon::new(points)
    }
}

impl Shape for SPolygon {
    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let SPolygon {
            vertices,
            bbox,
            area: _,
        } = self;

        //transform all points of the simple poly
        vertices.iter_mut().for_each(|p| {
            p.transform(t);
        });

        //regenerate bounding box
        *bbox = SPolygon::generate_bounding_box(vertices);

        self
    }
}

impl From<Rect> for SPolygon {
    fn from(r: Rect) -> Self {
        SPolygon::new(vec![
            Point(r.x_min, r.y_min),
            Point(r.x_max, r.y_min),
            Point(r.x_max, r.y_max),
            Point(r.x_min, r.y_max),
        ])
        .expect("a valid rectangle is a valid polygon")
    }
}
