use egui::{Color32, pos2};
use shape_canvas::{Shape, ShapeKind};

fn shape(kind: ShapeKind, x: f32, y: f32, w: f32, h: f32) -> Shape {
    Shape::new(kind, pos2(x, y), w, h, Color32::RED, Color32::BLACK, 2.0)
}

#[test]
fn rectangle_hit_covers_its_box() {
    let rect = shape(ShapeKind::Rectangle, 10.0, 20.0, 100.0, 50.0);

    assert!(rect.hit_test(pos2(11.0, 21.0)));
    assert!(rect.hit_test(pos2(60.0, 45.0)));
    assert!(!rect.hit_test(pos2(9.0, 45.0)));
    assert!(!rect.hit_test(pos2(60.0, 71.0)));
}

#[test]
fn circle_hit_is_radial_not_box() {
    // 100-wide circle: center (50, 50), radius 50.
    let circle = shape(ShapeKind::Circle, 0.0, 0.0, 100.0, 100.0);

    assert!(circle.hit_test(pos2(50.0, 50.0)));
    assert!(circle.hit_test(pos2(50.0, 95.0)));
    // Bounding-box corners are outside the disc.
    assert!(!circle.hit_test(pos2(5.0, 5.0)));
    assert!(!circle.hit_test(pos2(95.0, 95.0)));
}

#[test]
fn triangle_hit_excludes_box_corners() {
    let triangle = shape(ShapeKind::Triangle, 0.0, 0.0, 100.0, 100.0);

    // Center and a point toward the base are inside.
    assert!(triangle.hit_test(pos2(50.0, 50.0)));
    assert!(triangle.hit_test(pos2(50.0, 70.0)));
    // The apex points up, so the top box corners are empty space.
    assert!(!triangle.hit_test(pos2(2.0, 2.0)));
    assert!(!triangle.hit_test(pos2(98.0, 2.0)));
}

#[test]
fn triangle_points_use_larger_extent_as_diameter() {
    let triangle = shape(ShapeKind::Triangle, 0.0, 0.0, 40.0, 100.0);
    let [apex, right, left] = triangle.triangle_points();

    // Radius is max(40, 100) / 2 = 50 around the box center (20, 50).
    assert_eq!(apex, pos2(20.0, 0.0));
    assert!((right.x - (20.0 + 50.0 * 3.0_f32.sqrt() / 2.0)).abs() < 1e-3);
    assert!((right.y - 75.0).abs() < 1e-3);
    assert!((left.x - (20.0 - 50.0 * 3.0_f32.sqrt() / 2.0)).abs() < 1e-3);
}

#[test]
fn normalized_flips_negative_extents() {
    let dragged = shape(ShapeKind::Rectangle, 100.0, 100.0, -40.0, -60.0);
    let normalized = dragged.normalized();

    assert_eq!(normalized.pos, pos2(60.0, 40.0));
    assert_eq!(normalized.width, 40.0);
    assert_eq!(normalized.height, 60.0);
}

#[test]
fn normalized_keeps_positive_extents_untouched() {
    let drawn = shape(ShapeKind::Rectangle, 5.0, 6.0, 70.0, 80.0);
    let normalized = drawn.clone().normalized();

    assert_eq!(normalized, drawn);
}

#[test]
fn center_is_the_bounding_box_center() {
    let circle = shape(ShapeKind::Circle, 10.0, 20.0, 60.0, 60.0);
    assert_eq!(circle.center(), pos2(40.0, 50.0));
}
