use wordclock_designer::model::path_points;
use wordclock_designer::primitives::{hexagon, hexagon_fraction, hexagon_vertices};
use wordclock_designer::{Corner, Point, ShadeCell};

fn close(a: &Point, b: &Point) -> bool {
    a.distance_to(b) < 1e-5
}

#[test]
fn test_hexagon_matches_full_fraction() {
    for r in [0.5, 2.75, 9.0] {
        let full = path_points(&hexagon(r));
        let fraction = path_points(&hexagon_fraction(r, &Corner::ALL, true));
        assert_eq!(full, fraction);

        let expected = hexagon_vertices(r, &Corner::ALL);
        assert_eq!(full.len(), 6);
        for (got, want) in full.iter().zip(&expected) {
            assert!(close(got, want), "{got:?} vs {want:?}");
        }
    }
}

#[test]
fn test_hexagon_incircle() {
    let r = 3.0;
    for pair in hexagon_vertices(r, &Corner::ALL).windows(2) {
        let mid = Point::new((pair[0].x + pair[1].x) / 2.0, (pair[0].y + pair[1].y) / 2.0);
        assert!((mid.distance_to(&Point::default()) - r).abs() < 1e-9);
    }
}

#[test]
fn test_open_top_skips_only_top_edge() {
    let open = hexagon_vertices(1.0, ShadeCell::OpenTop.corners());
    let first = open.first().unwrap();
    let last = open.last().unwrap();
    // the missing edge joins the two upper corners
    assert!((first.y - last.y).abs() < 1e-12);
    assert!(first.y < 0.0);
}

#[test]
fn test_lower_rim_below_center_line() {
    let rim = hexagon_vertices(1.0, ShadeCell::LowerRim.corners());
    assert_eq!(rim.len(), 4);
    assert!(rim.iter().all(|p| p.y >= -1e-12));
}
