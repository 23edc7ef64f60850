//! Basic geometric value types shared by the layers.

use lyon::math::{point, Transform};
use lyon::path::Path;

/// A point in millimeters, y pointing down the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub(crate) fn to_lyon(self) -> lyon::math::Point {
        point(self.x as f32, self.y as f32)
    }
}

/// Copy of `path` moved so its local origin lands on `at`.
pub fn translated(path: &Path, at: Point) -> Path {
    path.clone()
        .transformed(&Transform::translation(at.x as f32, at.y as f32))
}

/// Axis-aligned bounds of a path as `(min_x, min_y, max_x, max_y)`.
///
/// An empty path has zero-sized bounds at the origin.
pub fn path_bounds(path: &Path) -> (f64, f64, f64, f64) {
    if path.iter().next().is_none() {
        return (0.0, 0.0, 0.0, 0.0);
    }
    let bb = lyon::algorithms::aabb::bounding_box(path.iter());
    (
        bb.min.x as f64,
        bb.min.y as f64,
        bb.max.x as f64,
        bb.max.y as f64,
    )
}

/// Every on-curve point of a path (starts and segment ends), in order.
pub fn path_points(path: &Path) -> Vec<Point> {
    let mut points = Vec::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => points.push(Point::new(at.x as f64, at.y as f64)),
            lyon::path::Event::Line { to, .. }
            | lyon::path::Event::Quadratic { to, .. }
            | lyon::path::Event::Cubic { to, .. } => {
                points.push(Point::new(to.x as f64, to.y as f64))
            }
            lyon::path::Event::End { .. } => {}
        }
    }
    points
}
