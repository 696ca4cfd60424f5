use clipum::{clip_polygon, clip_segment, Point2, Polygon, Rect2, Segment2};
use proptest::prelude::*;

fn window() -> Rect2<f64> {
    Rect2::new(0.0, 0.0, 10.0, 10.0).unwrap()
}

fn point_in(lo: f64, hi: f64) -> impl Strategy<Value = Point2<f64>> {
    (lo..=hi, lo..=hi).prop_map(|(x, y)| Point2::new(x, y))
}

fn grid_point(lo: i32, hi: i32) -> impl Strategy<Value = Point2<f64>> {
    (lo..=hi, lo..=hi).prop_map(|(x, y)| Point2::new(x as f64, y as f64))
}

fn rect_strategy() -> impl Strategy<Value = Rect2<f64>> {
    (-20i32..20, -20i32..20, 1i32..30, 1i32..30).prop_map(|(x, y, w, h)| {
        Rect2::new(x as f64, y as f64, (x + w) as f64, (y + h) as f64).unwrap()
    })
}

/// A convex CCW window: a regular polygon with 3 to 12 sides.
fn regular_window() -> impl Strategy<Value = Polygon<f64>> {
    (3usize..=12, 1.0f64..50.0, -20.0f64..20.0, -20.0f64..20.0, 0.0f64..1.0).prop_map(
        |(n, r, cx, cy, phase)| {
            (0..n)
                .map(|i| {
                    let a = (i as f64 + phase) * std::f64::consts::TAU / n as f64;
                    Point2::new(cx + r * a.cos(), cy + r * a.sin())
                })
                .collect()
        },
    )
}

fn same_up_to_rotation(a: &Polygon<f64>, b: &Polygon<f64>, eps: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let n = a.len();
    (0..n).any(|shift| (0..n).all(|i| a.vertices[(i + shift) % n].approx_eq(b.vertices[i], eps)))
}

proptest! {
    #[test]
    fn inside_segment_is_unchanged(a in point_in(0.0, 10.0), b in point_in(0.0, 10.0)) {
        let s = Segment2::new(a, b);
        prop_assert_eq!(clip_segment(&s, &window()).unwrap(), Some(s));
    }

    #[test]
    fn segment_left_of_window_is_rejected(
        x1 in -100.0f64..-0.001, x2 in -100.0f64..-0.001,
        y1 in -100.0f64..100.0, y2 in -100.0f64..100.0,
    ) {
        let s = Segment2::from_coords(x1, y1, x2, y2);
        prop_assert_eq!(clip_segment(&s, &window()).unwrap(), None);
    }

    #[test]
    fn segment_above_window_is_rejected(
        x1 in -100.0f64..100.0, x2 in -100.0f64..100.0,
        y1 in 10.001f64..100.0, y2 in 10.001f64..100.0,
    ) {
        let s = Segment2::from_coords(x1, y1, x2, y2);
        prop_assert_eq!(clip_segment(&s, &window()).unwrap(), None);
    }

    #[test]
    fn clipped_segment_is_inside_and_idempotent(a in point_in(-50.0, 50.0), b in point_in(-50.0, 50.0)) {
        let rect = window();
        if let Ok(Some(first)) = clip_segment(&Segment2::new(a, b), &rect) {
            prop_assert!(rect.contains_point(first.start));
            prop_assert!(rect.contains_point(first.end));
            prop_assert_eq!(clip_segment(&first, &rect).unwrap(), Some(first));
        }
    }

    #[test]
    fn clipped_segment_stays_on_original_line(a in grid_point(-50, 50), b in grid_point(-50, 50)) {
        let s = Segment2::new(a, b);
        if let Some(c) = clip_segment(&s, &window()).unwrap() {
            let d = s.direction();
            let scale = d.magnitude_squared().max(1.0);
            prop_assert!(d.cross(c.start - a).abs() <= 1e-9 * scale * 100.0);
            prop_assert!(d.cross(c.end - a).abs() <= 1e-9 * scale * 100.0);
        }
    }

    #[test]
    fn clipped_polygon_lies_in_rect(
        rect in rect_strategy(),
        vertices in prop::collection::vec(point_in(-40.0, 40.0), 3..12),
    ) {
        let subject = Polygon::new(vertices);
        let result = clip_polygon(&subject, &Polygon::from(rect));
        for v in &result.vertices {
            prop_assert!(v.is_finite());
            prop_assert!(v.x >= rect.xmin() - 1e-9 && v.x <= rect.xmax() + 1e-9, "{:?}", v);
            prop_assert!(v.y >= rect.ymin() - 1e-9 && v.y <= rect.ymax() + 1e-9, "{:?}", v);
        }
    }

    #[test]
    fn clipped_polygon_lies_in_convex_window(
        window in regular_window(),
        vertices in prop::collection::vec(point_in(-60.0, 60.0), 3..10),
    ) {
        let subject = Polygon::new(vertices);
        let result = clip_polygon(&subject, &window);
        for v in &result.vertices {
            prop_assert!(v.is_finite());
            for (cp1, cp2) in window.edges() {
                let edge = cp2 - cp1;
                let side = edge.cross(*v - cp1);
                prop_assert!(side >= -1e-6 * edge.magnitude_squared().sqrt(), "{:?} outside edge", v);
            }
        }
    }

    #[test]
    fn polygon_inside_window_is_unchanged(vertices in prop::collection::vec(point_in(0.5, 9.5), 3..12)) {
        let subject = Polygon::new(vertices);
        prop_assert_eq!(clip_polygon(&subject, &Polygon::from(window())), subject);
    }

    #[test]
    fn polygon_touching_window_edge_is_unchanged(
        interior in prop::collection::vec(grid_point(1, 9), 2..10),
        side in 0usize..4,
        along in 0i32..=10,
        index in 0usize..10,
    ) {
        let along = along as f64;
        let touching = match side {
            0 => Point2::new(0.0, along),
            1 => Point2::new(10.0, along),
            2 => Point2::new(along, 0.0),
            _ => Point2::new(along, 10.0),
        };

        let mut vertices = interior;
        let index = index % (vertices.len() + 1);
        vertices.insert(index, touching);

        let subject = Polygon::new(vertices);
        prop_assert_eq!(clip_polygon(&subject, &Polygon::from(window())), subject);
    }

    #[test]
    fn polygon_clipped_by_itself_is_unchanged(rect in rect_strategy()) {
        let square = Polygon::from(rect);
        let result = clip_polygon(&square, &square);
        prop_assert!(same_up_to_rotation(&result, &square, 1e-9), "{:?}", result);
    }
}
