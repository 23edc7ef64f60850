//! Path primitives for the cut sheets.
//!
//! Shapes are built around the origin; callers move them into place with
//! [`translated`](crate::model::translated). The one exception is
//! [`ConnectorRoute`], which is laid out directly in inner frame space.
//!
//! Hexagons have flat top and bottom edges. A vertex at angle θ, measured
//! from the downward vertical axis, lies at `(R·sin θ, R·cos θ)` with
//! `R = 2r/√3` for incircle radius `r`.

use crate::model::Point;
use crate::placement::Placement;
use lyon::geom::Arc;
use lyon::math::{point, vector, Angle, Box2D};
use lyon::path::{Path, Winding};

/// Hexagon corner, named by where it sits on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    LowerRight,
    Right,
    UpperRight,
    UpperLeft,
    Left,
    LowerLeft,
}

impl Corner {
    /// All six corners, going around from the lower right
    pub const ALL: [Corner; 6] = [
        Corner::LowerRight,
        Corner::Right,
        Corner::UpperRight,
        Corner::UpperLeft,
        Corner::Left,
        Corner::LowerLeft,
    ];

    pub fn degrees(&self) -> f64 {
        match self {
            Corner::LowerRight => 30.0,
            Corner::Right => 90.0,
            Corner::UpperRight => 150.0,
            Corner::UpperLeft => 210.0,
            Corner::Left => 270.0,
            Corner::LowerLeft => 330.0,
        }
    }

    /// Vertex position for a hexagon of incircle radius `incircle_radius`
    pub fn vertex(&self, incircle_radius: f64) -> Point {
        let radius = 2.0 * incircle_radius / 3f64.sqrt();
        let angle = self.degrees().to_radians();
        Point::new(radius * angle.sin(), radius * angle.cos())
    }
}

/// Vertices of the listed corners, in order
pub fn hexagon_vertices(incircle_radius: f64, corners: &[Corner]) -> Vec<Point> {
    corners.iter().map(|c| c.vertex(incircle_radius)).collect()
}

/// Closed regular hexagon
pub fn hexagon(incircle_radius: f64) -> Path {
    hexagon_fraction(incircle_radius, &Corner::ALL, true)
}

/// Edge run through `corners` in order, optionally closed
pub fn hexagon_fraction(incircle_radius: f64, corners: &[Corner], closed: bool) -> Path {
    polyline(&hexagon_vertices(incircle_radius, corners), closed)
}

/// Straight segments through `points`
pub fn polyline(points: &[Point], closed: bool) -> Path {
    let mut builder = Path::builder();
    if let Some((first, rest)) = points.split_first() {
        builder.begin(first.to_lyon());
        for p in rest {
            builder.line_to(p.to_lyon());
        }
        builder.end(closed);
    }
    builder.build()
}

/// Four pin pads of an LED, one per quadrant
pub fn led_footprint(pin_width: f64, pin_height: f64, distance_x: f64, distance_y: f64) -> Path {
    let mut builder = Path::builder();
    for (sx, sy) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
        let cx = sx * distance_x / 2.0;
        let cy = sy * distance_y / 2.0;
        let pad = Box2D::new(
            point((cx - pin_width / 2.0) as f32, (cy - pin_height / 2.0) as f32),
            point((cx + pin_width / 2.0) as f32, (cy + pin_height / 2.0) as f32),
        );
        builder.add_rectangle(&pad, Winding::Positive);
    }
    builder.build()
}

/// Which edges of a light shade cell are cut
///
/// Neighbouring honeycomb cells share edges; each cell only cuts the edges
/// no earlier cell has cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadeCell {
    /// Closed hexagon
    Full,
    /// Everything but the top edge, which the cell above already cut
    OpenTop,
    /// Only the top edge
    TopEdge,
    /// The four lower edges closing off the last row
    LowerRim,
}

impl ShadeCell {
    /// Edge runs for the cell at `row`, `column` of a grid with `rows` rows
    pub fn for_cell(row: usize, column: usize, rows: usize) -> Vec<ShadeCell> {
        if column % 2 == 0 {
            if row == 0 {
                vec![ShadeCell::Full]
            } else {
                vec![ShadeCell::OpenTop]
            }
        } else if row + 1 == rows {
            vec![ShadeCell::TopEdge, ShadeCell::LowerRim]
        } else {
            vec![ShadeCell::TopEdge]
        }
    }

    pub fn corners(&self) -> &'static [Corner] {
        match self {
            ShadeCell::Full => &Corner::ALL,
            ShadeCell::OpenTop => &[
                Corner::UpperLeft,
                Corner::Left,
                Corner::LowerLeft,
                Corner::LowerRight,
                Corner::Right,
                Corner::UpperRight,
            ],
            ShadeCell::TopEdge => &[Corner::UpperRight, Corner::UpperLeft],
            ShadeCell::LowerRim => &[Corner::Left, Corner::LowerLeft, Corner::LowerRight, Corner::Right],
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, ShadeCell::Full)
    }

    pub fn path(&self, incircle_radius: f64) -> Path {
        hexagon_fraction(incircle_radius, self.corners(), self.is_closed())
    }
}

/// One leg of the connector route
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteStep {
    Line(Point),
    /// Half circle clockwise on the sheet from the top of the circle, around
    /// its right side, to the bottom
    Detour { center: Point, radius: f64 },
}

/// The wiring channel of the first distance raster
///
/// Starts at the inner frame origin, runs down the left edge, zig-zags one
/// lane per anode row, skirts the nut of the second PCB screw, zig-zags one
/// lane per cathode column and closes along the right and top frame edges.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorRoute {
    steps: Vec<RouteStep>,
}

impl ConnectorRoute {
    pub fn new(placement: &Placement<'_>) -> Self {
        let layout = placement.layout();
        let config = placement.config();
        let hw = &config.hardware;
        let panel = &config.panel;

        let rows = layout.rows as f64;
        let columns = layout.columns as f64;
        let iw = layout.inner_width;
        let ih = layout.inner_height;
        let cd = hw.connector_distance;
        let ax = hw.anodes_connector_offset_x;
        let ay = hw.anodes_connector_offset_y;
        let cy = hw.cathodes_connector_offset_y;
        let nut_screw = placement.pcb_screw_centers()[1];

        let extra = cd / 2.0;
        let nut_extra = hw.nut_size / 3f64.sqrt() + extra;
        let anode_x = ax + cd * (rows - 1.0) + extra;
        let offset_x = iw - panel.border_x
            + panel.frame_width
            + (cd + hw.led_pin_distance_x - layout.last_column_width) / 2.0;
        let offset_y = panel.border_y
            - panel.frame_width
            - (cd - hw.led_pin_distance_y - layout.max_character_height) / 2.0;

        let mut steps = vec![
            RouteStep::Line(Point::new(0.0, 0.0)),
            RouteStep::Line(Point::new(0.0, offset_y)),
            RouteStep::Line(Point::new(ax + extra, offset_y)),
        ];
        for i in 1..layout.rows.saturating_sub(2) {
            let y = offset_y + layout.factor_y * i as f64;
            let i = i as f64;
            steps.push(RouteStep::Line(Point::new(ax + cd * (i - 0.5), y)));
            steps.push(RouteStep::Line(Point::new(ax + cd * (i + 0.5), y)));
        }
        steps.extend([
            RouteStep::Line(Point::new(ax + cd * (rows - 2.5), ih - ay - extra)),
            RouteStep::Line(Point::new(anode_x, ih - ay - extra)),
            RouteStep::Line(Point::new(anode_x, nut_screw.y - nut_extra)),
            RouteStep::Detour {
                center: nut_screw,
                radius: nut_extra,
            },
            RouteStep::Line(Point::new(anode_x, nut_screw.y + nut_extra)),
            RouteStep::Line(Point::new(anode_x, ih - cy - cd * (columns - 0.5))),
        ]);
        for i in (1..layout.columns).rev() {
            let x = offset_x - layout.factor_x * i as f64;
            let i = i as f64;
            steps.push(RouteStep::Line(Point::new(x, ih - cy - cd * (i + 0.5))));
            steps.push(RouteStep::Line(Point::new(x, ih - cy - cd * (i - 0.5))));
        }
        steps.extend([
            RouteStep::Line(Point::new(offset_x, ih - cy - extra)),
            RouteStep::Line(Point::new(offset_x, ih)),
            RouteStep::Line(Point::new(iw, ih)),
            RouteStep::Line(Point::new(iw, 0.0)),
        ]);

        Self { steps }
    }

    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    /// Corner points of the straight legs, in route order
    pub fn waypoints(&self) -> Vec<Point> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                RouteStep::Line(p) => Some(*p),
                RouteStep::Detour { .. } => None,
            })
            .collect()
    }

    /// The route as one closed path
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        let mut started = false;
        for step in &self.steps {
            match *step {
                RouteStep::Line(p) if !started => {
                    builder.begin(p.to_lyon());
                    started = true;
                }
                RouteStep::Line(p) => {
                    builder.line_to(p.to_lyon());
                }
                RouteStep::Detour { center, radius } => {
                    let arc = Arc {
                        center: center.to_lyon(),
                        radii: vector(radius as f32, radius as f32),
                        start_angle: Angle::degrees(-90.0),
                        sweep_angle: Angle::degrees(180.0),
                        x_rotation: Angle::radians(0.0),
                    };
                    if !started {
                        builder.begin(arc.from());
                        started = true;
                    } else {
                        builder.line_to(arc.from());
                    }
                    arc.for_each_cubic_bezier(&mut |ctrl| {
                        builder.cubic_bezier_to(ctrl.ctrl1, ctrl.ctrl2, ctrl.to);
                    });
                }
            }
        }
        if started {
            builder.end(true);
        }
        builder.build()
    }
}
