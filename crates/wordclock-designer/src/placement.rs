//! Named offsets into the derived layout.
//!
//! Every position a layer draws at is computed here, so the same LED cell or
//! screw hole resolves to the same coordinates on every sheet.

use crate::layout::DerivedLayout;
use crate::model::Point;
use wordclock_settings::ClockConfig;

/// Offset helpers over one layout and configuration
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    layout: &'a DerivedLayout,
    config: &'a ClockConfig,
}

impl<'a> Placement<'a> {
    pub fn new(layout: &'a DerivedLayout, config: &'a ClockConfig) -> Self {
        Self { layout, config }
    }

    pub fn layout(&self) -> &'a DerivedLayout {
        self.layout
    }

    pub fn config(&self) -> &'a ClockConfig {
        self.config
    }

    // Front panel space

    /// Horizontal center of glyph column `column` on the front panel
    pub fn glyph_column_center(&self, column: usize) -> f64 {
        self.config.panel.border_x
            + self.layout.first_column_width / 2.0
            + column as f64 * self.layout.factor_x
    }

    /// Baseline of glyph row `row` on the front panel
    pub fn baseline(&self, row: usize) -> f64 {
        self.config.panel.border_y
            + self.layout.max_character_height
            + row as f64 * self.layout.factor_y
    }

    /// Where a glyph of `glyph_width` is placed so it centers in its cell.
    pub fn glyph_origin(&self, row: usize, column: usize, glyph_width: f64) -> Point {
        Point::new(
            self.glyph_column_center(column) - glyph_width / 2.0,
            self.baseline(row),
        )
    }

    // Inner frame space

    /// Left edge offset of the first LED column inside the frame
    fn inner_offset_x(&self) -> f64 {
        self.config.panel.border_x + self.layout.first_column_width / 2.0
            - self.config.panel.frame_width
    }

    /// Top offset of the first LED row inside the frame
    fn inner_offset_y(&self) -> f64 {
        self.config.panel.border_y + self.layout.max_character_height / 2.0
            - self.config.panel.frame_width
    }

    /// LED position behind the glyph at `row`, `column`
    pub fn led_center(&self, row: usize, column: usize) -> Point {
        self.grid_point(row as f64, column as f64)
    }

    /// LED positions, row by row
    pub fn led_centers(&self) -> impl Iterator<Item = Point> + 'a {
        let this = *self;
        (0..self.layout.rows)
            .flat_map(move |row| (0..this.layout.columns).map(move |col| this.led_center(row, col)))
    }

    /// Point at fractional grid coordinates
    fn grid_point(&self, row: f64, column: f64) -> Point {
        Point::new(
            self.inner_offset_x() + column * self.layout.factor_x,
            self.inner_offset_y() + row * self.layout.factor_y,
        )
    }

    /// `p` reflected across both inner frame midlines, in the order
    /// unchanged, horizontal mirror, vertical mirror, both.
    pub fn mirrored(&self, p: Point) -> [Point; 4] {
        let w = self.layout.inner_width;
        let h = self.layout.inner_height;
        [
            p,
            Point::new(w - p.x, p.y),
            Point::new(p.x, h - p.y),
            Point::new(w - p.x, h - p.y),
        ]
    }

    /// The eight frame screws
    ///
    /// Two base positions between LED cells (half a cell in, and three and a
    /// half columns by two and a half rows in), each mirrored four ways.
    pub fn screw_centers(&self) -> [Point; 8] {
        let [a, b, c, d] = self.mirrored(self.grid_point(0.5, 0.5));
        let [e, f, g, h] = self.mirrored(self.grid_point(2.5, 3.5));
        [a, b, c, d, e, f, g, h]
    }

    /// The three screws holding the circuit board
    pub fn pcb_screw_centers(&self) -> [Point; 3] {
        let h = self.layout.inner_height;
        self.config
            .hardware
            .pcb_screws
            .map(|screw| Point::new(screw.x, h - screw.y))
    }

    /// Connector pin of anode row `row`
    pub fn anode_connector(&self, row: usize) -> Point {
        let hw = &self.config.hardware;
        Point::new(
            hw.anodes_connector_offset_x + hw.connector_distance * row as f64,
            self.layout.inner_height - hw.anodes_connector_offset_y,
        )
    }

    /// Wire feed-through of anode row `row`, below the LED pads
    pub fn anode_wire(&self, row: usize) -> Point {
        let hw = &self.config.hardware;
        Point::new(
            hw.anodes_connector_offset_x + hw.connector_distance * row as f64,
            self.led_center(row, 0).y + hw.led_pin_distance_y / 2.0,
        )
    }

    /// Connector pin of cathode column `column`
    pub fn cathode_connector(&self, column: usize) -> Point {
        let hw = &self.config.hardware;
        Point::new(
            hw.cathodes_connector_offset_x,
            self.layout.inner_height
                - hw.cathodes_connector_offset_y
                - hw.connector_distance * column as f64,
        )
    }

    /// Wire feed-through of cathode column `column`, counted from the right edge
    pub fn cathode_wire(&self, column: usize) -> Point {
        let hw = &self.config.hardware;
        let panel = &self.config.panel;
        let right = panel.border_x + self.layout.last_column_width / 2.0 - panel.frame_width;
        Point::new(
            self.layout.inner_width - right - self.layout.factor_x * column as f64
                + hw.led_pin_distance_x / 2.0,
            self.cathode_connector(column).y,
        )
    }

    /// Center of the light shade cell in grid column `column`, row `row`
    ///
    /// Odd columns sit half a cell lower to close-pack the honeycomb.
    pub fn shade_cell_center(&self, row: usize, column: usize) -> Point {
        let size = self.layout.size;
        let x = column as f64 * size * 60f64.to_radians().sin();
        let y = if column % 2 == 0 {
            row as f64 * size
        } else {
            (row as f64 + 0.5) * size
        };
        Point::new(x, y)
    }
}
