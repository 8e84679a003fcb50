use choreo_core::shapes::primitives::*;
use choreo_core::{ShapeKind, ShapeRegistry};
use glam::Vec3;
use proptest::prelude::*;

fn assert_finite(p: Vec3, label: &str) {
    assert!(
        p.x.is_finite() && p.y.is_finite() && p.z.is_finite(),
        "{label} produced non-finite {:?}",
        p
    );
}

#[test]
fn test_all_shapes_bounded() {
    let radius = 125.0;
    for kind in ShapeKind::ALL {
        for total in [1usize, 7, 200, 350] {
            for i in 0..total {
                let p = kind.position(i, total, radius);
                assert_finite(p, kind.name());
                assert!(
                    p.length() <= radius * 1.5,
                    "shape '{}' at {}/{} = {:?} out of bounds",
                    kind,
                    i,
                    total,
                    p
                );
            }
        }
    }
}

#[test]
fn test_empty_total_is_origin() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.position(0, 0, 100.0), Vec3::ZERO, "{}", kind);
        assert_eq!(kind.position(5, 0, 100.0), Vec3::ZERO, "{}", kind);
    }
}

#[test]
fn test_sphere_eight_points() {
    let radius = 100.0;
    let first = shape_sphere(0, 8, radius);
    assert!((first - Vec3::new(0.0, 85.0, 0.0)).length() < 1e-4, "{:?}", first);

    // t = 7/8 keeps the last point short of the south pole
    let last = shape_sphere(7, 8, radius);
    assert!((last.y + 63.75).abs() < 1e-3, "{:?}", last);

    for i in 0..8 {
        let r = shape_sphere(i, 8, radius).length();
        assert!((r - 85.0).abs() < 1e-3, "sphere radius {} != 85 at {}", r, i);
    }
}

#[test]
fn test_sphere_lattice_has_no_duplicates() {
    let points: Vec<Vec3> = (0..350).map(|i| shape_sphere(i, 350, 125.0)).collect();
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            assert!(a.distance(*b) > 1.0, "lattice points coincide: {:?} {:?}", a, b);
        }
    }
}

#[test]
fn test_bulb_glass_to_base_threshold() {
    let radius = 100.0;
    let glass = shape_bulb(69, 100, radius);
    let base = shape_bulb(70, 100, radius);

    // first base point sits on the screw, at angle zero, top of the base
    assert!((base - Vec3::new(22.0, 45.0, 0.0)).length() < 1e-3, "{:?}", base);

    // glass is a squashed sphere centred 0.15r above the origin
    let local = glass - Vec3::new(0.0, -15.0, 0.0);
    let unsquashed = Vec3::new(local.x, local.y / 0.75, local.z);
    assert!((unsquashed.length() - 72.0).abs() < 1e-2, "{:?}", glass);
}

#[test]
fn test_bulb_screw_narrows() {
    let radius = 100.0;
    let total = 1000;
    let top = shape_bulb(700, total, radius);
    let bottom = shape_bulb(999, total, radius);
    let planar = |p: Vec3| (p.x * p.x + p.z * p.z).sqrt();
    assert!(planar(bottom) < planar(top));
    assert!(bottom.y > top.y);
}

#[test]
fn test_logo_mark_arc_and_accent() {
    let radius = 100.0;
    let total = 200;
    for i in 0..170 {
        let p = shape_logo_mark(i, total, radius);
        let ring = (p.x * p.x + p.y * p.y).sqrt();
        assert!(
            (41.0 - 1e-3..=69.0 + 1e-3).contains(&ring),
            "arc point {} off the stroke: ring {}",
            i,
            ring
        );
        // the arc is open on the +x side
        let angle = p.y.atan2(p.x).rem_euclid(std::f32::consts::TAU);
        assert!(angle >= std::f32::consts::PI * 0.3 - 1e-3);
        assert!(angle <= std::f32::consts::PI * 1.7 + 1e-3);
    }
    for i in 170..200 {
        let p = shape_logo_mark(i, total, radius);
        let centre = Vec3::new(42.0, -5.0, 0.0);
        assert!(
            (p.distance(centre) - 15.0).abs() < 1e-2,
            "accent point {} not on the dot: {:?}",
            i,
            p
        );
    }
}

#[test]
fn test_rocket_nose_and_fins() {
    let radius = 100.0;
    let nose = shape_rocket(0, 100, radius);
    assert!((nose - Vec3::new(0.0, -85.0, 0.0)).length() < 1e-4, "{:?}", nose);

    // fins fan out at three evenly spaced angles
    let total = 3000;
    let mut angles: Vec<f32> = (2340..total)
        .map(|i| {
            let p = shape_rocket(i, total, radius);
            p.z.atan2(p.x)
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    angles.dedup_by(|a, b| (*a - *b).abs() < 1e-3);
    assert_eq!(angles.len(), 3, "fin angles {:?}", angles);

    // last index still lands on the third fin
    let tip = shape_rocket(total - 1, total, radius);
    assert_finite(tip, "rocket tip");
}

#[test]
fn test_message_bubble_tail_narrows_to_tip() {
    let radius = 100.0;
    let total = 4000;
    let spread_at = |start: usize| {
        let xs: Vec<f32> = (start..start + 4)
            .map(|i| shape_message_bubble(i, total, radius).x)
            .collect();
        let lo = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let hi = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        hi - lo
    };
    let near_body = spread_at(3400);
    let near_tip = spread_at(3996);
    assert!(near_tip < near_body, "tip {} body {}", near_tip, near_body);
    assert!(near_tip < 1.0);
}

#[test]
fn test_message_bubble_body_is_layered() {
    let radius = 100.0;
    let zs: Vec<f32> = (0..5)
        .map(|i| shape_message_bubble(i, 100, radius).z)
        .collect();
    for pair in zs.windows(2) {
        assert!(pair[1] > pair[0], "layers not increasing in z: {:?}", zs);
    }
}

#[test]
fn test_registry_dispatch_matches_generators() {
    let registry = ShapeRegistry::builtin();
    for kind in ShapeKind::ALL {
        let f = registry.get(kind.name()).expect("builtin shape registered");
        for i in [0usize, 13, 199] {
            assert_eq!(f(i, 200, 85.0), kind.position(i, 200, 85.0));
        }
    }
}

proptest! {
    #[test]
    fn prop_generators_are_pure(
        kind in prop::sample::select(ShapeKind::ALL.to_vec()),
        total in 1usize..1000,
        seed in any::<usize>(),
        radius in 1.0f32..300.0,
    ) {
        let index = seed % total;
        let a = kind.position(index, total, radius);
        let b = kind.position(index, total, radius);
        prop_assert_eq!(a, b);
        prop_assert!(a.is_finite());
        prop_assert!(a.length() <= radius * 1.5);
    }

    #[test]
    fn prop_shapes_scale_with_radius(
        kind in prop::sample::select(ShapeKind::ALL.to_vec()),
        total in 1usize..500,
        seed in any::<usize>(),
    ) {
        let index = seed % total;
        let one = kind.position(index, total, 50.0);
        let two = kind.position(index, total, 100.0);
        prop_assert!((two - one * 2.0).length() < 1e-2, "{:?} vs {:?}", one, two);
    }
}
