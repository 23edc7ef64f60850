use crate::common::{approx, BoxProvider};
use proptest::prelude::*;
use wordclock_designer::ClockDesign;
use wordclock_settings::ClockConfig;

fn grid_text(rows: usize, columns: usize) -> Vec<String> {
    (0..rows)
        .map(|row| {
            (0..columns)
                .map(|col| match (col, row % 2) {
                    (0, 0) => 'W',
                    (0, _) => 'I',
                    (c, _) if c + 1 == columns => 'M',
                    _ => 'A',
                })
                .collect()
        })
        .collect()
}

prop_compose! {
    fn arb_config()(
        rows in 2usize..10,
        columns in 2usize..12,
        width in 150.0f64..400.0,
        height in 150.0f64..400.0,
        border_x in 0.0f64..30.0,
        border_y in 0.0f64..30.0,
    ) -> ClockConfig {
        let mut config = ClockConfig::default();
        config.text = grid_text(rows, columns);
        config.panel.width = width;
        config.panel.height = height;
        config.panel.border_x = border_x;
        config.panel.border_y = border_y;
        config
    }
}

fn provider() -> BoxProvider {
    BoxProvider::new(6.0, 9.0)
        .with_glyph('W', 11.0, 9.0)
        .with_glyph('I', 2.5, 9.0)
        .with_glyph('M', 8.5, 10.5)
}

proptest! {
    #[test]
    fn prop_column_pitch_reconstructs_width(config in arb_config()) {
        let design = ClockDesign::new(&config, &provider()).unwrap();
        let l = design.layout();
        let total = l.factor_x * (l.columns as f64 - 1.0)
            + l.first_column_width / 2.0
            + l.last_column_width / 2.0
            + 2.0 * config.panel.border_x;
        prop_assert!(approx(total, config.panel.width));
    }

    #[test]
    fn prop_row_pitch_reconstructs_height(config in arb_config()) {
        let design = ClockDesign::new(&config, &provider()).unwrap();
        let l = design.layout();
        let rows = l.rows as f64;
        let total = l.factor_y * (rows - 1.0) + rows * l.max_character_height
            - (rows - 1.0) * l.max_character_height;
        prop_assert!(approx(total, config.panel.height - 2.0 * config.panel.border_y));
    }

    #[test]
    fn prop_layout_is_deterministic(config in arb_config()) {
        let first = ClockDesign::new(&config, &provider()).unwrap();
        let second = ClockDesign::new(&config, &provider()).unwrap();
        prop_assert_eq!(first.layout(), second.layout());
    }

    #[test]
    fn prop_edge_columns_use_widest_glyph(config in arb_config()) {
        let design = ClockDesign::new(&config, &provider()).unwrap();
        let l = design.layout();
        prop_assert_eq!(l.first_column_width, 11.0);
        prop_assert_eq!(l.last_column_width, 8.5);
        prop_assert_eq!(l.size, 11.0 + config.panel.light_shade_extra);
    }
}
