//! Shape plans: the drawable output of one layer renderer.
//!
//! A plan is an ordered list of stroked or filled primitives in the
//! millimeter space of a single cut sheet. Two colours are reserved: one
//! for cut/etch lines and one pair for filled background and glyphs.

use crate::model::Point;
use lyon::path::Path;
use std::fmt;
use wordclock_settings::OutputSettings;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` notation
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour of every line the laser cuts or etches
pub const COLOR_CUT: Color = Color::rgb(0, 0, 255);
/// Front background in fill mode
pub const COLOR_BACKGROUND: Color = Color::rgb(0, 0, 0);
/// Front glyphs in fill mode
pub const COLOR_GLYPHS: Color = Color::rgb(255, 255, 255);
/// Stroke width of cut lines in millimeters
pub const STROKE_WIDTH: f64 = 0.01;

/// How a primitive is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Stroke(Color),
    Fill(Color),
}

impl Paint {
    pub fn color(&self) -> Color {
        match self {
            Paint::Stroke(c) | Paint::Fill(c) => *c,
        }
    }

    pub fn is_stroke(&self) -> bool {
        matches!(self, Paint::Stroke(_))
    }
}

/// Drawable geometry in sheet coordinates
#[derive(Debug, Clone)]
pub enum Geometry {
    Rect {
        origin: Point,
        width: f64,
        height: f64,
    },
    Circle {
        center: Point,
        radius: f64,
    },
    Line {
        from: Point,
        to: Point,
    },
    Path(Path),
}

impl Geometry {
    pub fn rect(origin: Point, width: f64, height: f64) -> Self {
        Geometry::Rect {
            origin,
            width,
            height,
        }
    }

    /// Circle given by its center and diameter
    pub fn circle(center: Point, diameter: f64) -> Self {
        Geometry::Circle {
            center,
            radius: diameter / 2.0,
        }
    }

    pub fn line(from: Point, to: Point) -> Self {
        Geometry::Line { from, to }
    }
}

/// What a primitive represents on the physical sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeRole {
    /// Outer cut of the sheet
    Outline,
    /// Filled front background
    Background,
    Glyph(char),
    /// Honeycomb edge run of the diffuser
    ShadeCell,
    /// Hexagonal opening above one LED
    LedHole,
    /// Flap polyline of the foldable diffuser box
    FoldTab,
    FoldLine,
    ScrewHole,
    NutCutout,
    PcbHole,
    ConnectorRoute,
    LedFootprint,
    ConnectorHole,
    WireHole,
}

/// One primitive of a plan
///
/// `anchor` is where the primitive's local origin was placed.
#[derive(Debug, Clone)]
pub struct PlannedShape {
    pub role: ShapeRole,
    pub anchor: Point,
    pub geometry: Geometry,
    pub paint: Paint,
}

/// The six cut sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerKind {
    Front,
    LightShade,
    LightShadeRaster,
    DistanceRaster1,
    DistanceRaster2,
    LedCarrier,
}

impl LayerKind {
    pub const ALL: [LayerKind; 6] = [
        LayerKind::Front,
        LayerKind::LightShade,
        LayerKind::LightShadeRaster,
        LayerKind::DistanceRaster1,
        LayerKind::DistanceRaster2,
        LayerKind::LedCarrier,
    ];

    /// Configured artifact file name for this layer
    pub fn file_name<'a>(&self, output: &'a OutputSettings) -> &'a str {
        match self {
            LayerKind::Front => &output.front,
            LayerKind::LightShade => &output.light_shades,
            LayerKind::LightShadeRaster => &output.light_shade_raster,
            LayerKind::DistanceRaster1 => &output.distance_raster_1,
            LayerKind::DistanceRaster2 => &output.distance_raster_2,
            LayerKind::LedCarrier => &output.led_carrier,
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Front => write!(f, "front"),
            LayerKind::LightShade => write!(f, "light shade"),
            LayerKind::LightShadeRaster => write!(f, "light shade raster"),
            LayerKind::DistanceRaster1 => write!(f, "distance raster 1"),
            LayerKind::DistanceRaster2 => write!(f, "distance raster 2"),
            LayerKind::LedCarrier => write!(f, "LED carrier"),
        }
    }
}

/// Ordered shapes of one layer plus the page size they are drawn on
#[derive(Debug, Clone)]
pub struct ShapePlan {
    pub layer: LayerKind,
    pub width: f64,
    pub height: f64,
    shapes: Vec<PlannedShape>,
}

impl ShapePlan {
    pub fn new(layer: LayerKind, width: f64, height: f64) -> Self {
        Self {
            layer,
            width,
            height,
            shapes: Vec::new(),
        }
    }

    /// Append a primitive stroked in the cut colour.
    pub fn cut(&mut self, role: ShapeRole, anchor: Point, geometry: Geometry) {
        self.push(role, anchor, geometry, Paint::Stroke(COLOR_CUT));
    }

    pub fn push(&mut self, role: ShapeRole, anchor: Point, geometry: Geometry, paint: Paint) {
        self.shapes.push(PlannedShape {
            role,
            anchor,
            geometry,
            paint,
        });
    }

    pub fn shapes(&self) -> &[PlannedShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes whose role matches `pred`
    pub fn with_role<'a>(
        &'a self,
        pred: impl Fn(ShapeRole) -> bool + 'a,
    ) -> impl Iterator<Item = &'a PlannedShape> + 'a {
        self.shapes.iter().filter(move |s| pred(s.role))
    }

    pub fn count(&self, role: ShapeRole) -> usize {
        self.shapes.iter().filter(|s| s.role == role).count()
    }

    pub fn glyph_count(&self) -> usize {
        self.with_role(|r| matches!(r, ShapeRole::Glyph(_))).count()
    }

    /// Anchors of all shapes with `role`, in plan order
    pub fn anchors(&self, role: ShapeRole) -> Vec<Point> {
        self.shapes
            .iter()
            .filter(|s| s.role == role)
            .map(|s| s.anchor)
            .collect()
    }
}
