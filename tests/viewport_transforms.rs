use egui::{Pos2, pos2, vec2};
use shape_canvas::viewport::{MAX_SCALE, MIN_SCALE, Viewport};

fn approx(a: Pos2, b: Pos2, tolerance: f32) -> bool {
    (a - b).length() < tolerance
}

#[test]
fn screen_to_world_matches_formula() {
    let viewport = Viewport::new(2.0, vec2(100.0, 50.0));

    assert!(approx(
        viewport.screen_to_world(pos2(300.0, 250.0)),
        pos2(100.0, 100.0),
        1e-3
    ));
    assert!(approx(
        viewport.world_to_screen(pos2(100.0, 100.0)),
        pos2(300.0, 250.0),
        1e-3
    ));
}

#[test]
fn round_trip_recovers_world_point() {
    let viewport = Viewport::new(2.5, vec2(120.0, -40.0));
    let points = [
        pos2(0.0, 0.0),
        pos2(33.3, -7.5),
        pos2(-250.0, 480.0),
        pos2(1024.0, 768.0),
    ];

    for world in points {
        let round_trip = viewport.screen_to_world(viewport.world_to_screen(world));
        assert!(
            approx(round_trip, world, 1e-3),
            "{world:?} round-tripped to {round_trip:?}"
        );
    }
}

#[test]
fn zoom_keeps_pivot_fixed() {
    let pivots = [pos2(0.0, 0.0), pos2(400.0, 300.0), pos2(-120.0, 955.0)];
    let factors = [1.1, 1.0 / 1.1, 2.5, 0.25];

    for pivot in pivots {
        for factor in factors {
            let mut viewport = Viewport::new(1.7, vec2(64.0, -300.0));
            let world_before = viewport.screen_to_world(pivot);

            viewport.zoom_around(pivot, factor);

            let world_after = viewport.screen_to_world(pivot);
            assert!(
                approx(world_before, world_after, 1e-2),
                "pivot {pivot:?} drifted from {world_before:?} to {world_after:?} at factor {factor}"
            );
        }
    }
}

#[test]
fn zoom_in_then_out_restores_scale() {
    let mut viewport = Viewport::default();
    viewport.zoom_around(pos2(200.0, 200.0), 1.1);
    viewport.zoom_around(pos2(200.0, 200.0), 1.0 / 1.1);

    assert!((viewport.scale() - 1.0).abs() < 1e-4);
}

#[test]
fn scale_is_clamped_at_both_limits() {
    let mut viewport = Viewport::default();
    viewport.zoom_around(pos2(10.0, 10.0), 1e9);
    assert_eq!(viewport.scale(), MAX_SCALE);

    // Zooming further in at the limit changes nothing.
    let translation = viewport.translation();
    viewport.zoom_around(pos2(10.0, 10.0), 2.0);
    assert_eq!(viewport.scale(), MAX_SCALE);
    assert_eq!(viewport.translation(), translation);

    viewport.zoom_around(pos2(10.0, 10.0), 1e-9);
    assert_eq!(viewport.scale(), MIN_SCALE);
}

#[test]
fn partially_clamped_zoom_still_keeps_pivot() {
    // 15 * 2 exceeds MAX_SCALE, so only the clamped part is applied; the
    // pivot must hold regardless.
    let mut viewport = Viewport::new(15.0, vec2(-80.0, 40.0));
    let pivot = pos2(320.0, 240.0);
    let world_before = viewport.screen_to_world(pivot);

    viewport.zoom_around(pivot, 2.0);

    assert_eq!(viewport.scale(), MAX_SCALE);
    assert!(approx(world_before, viewport.screen_to_world(pivot), 1e-2));
}

#[test]
fn pan_shifts_the_world_under_the_pointer() {
    let mut viewport = Viewport::default();
    let world = viewport.screen_to_world(pos2(100.0, 100.0));

    viewport.pan_by(vec2(30.0, -10.0));

    // The same world point now sits 30 px right and 10 px up.
    assert!(approx(viewport.screen_to_world(pos2(130.0, 90.0)), world, 1e-3));
    assert_eq!(viewport.translation(), vec2(30.0, -10.0));
}
