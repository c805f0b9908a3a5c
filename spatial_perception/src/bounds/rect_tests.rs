use super::*;

fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
    Rect::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
}

#[test]
fn test_new_normalizes_corners() {
    let r = rect(10.0, 0.0, 0.0, 10.0);
    assert_eq!(r.min, Vec2::new(0.0, 0.0));
    assert_eq!(r.max, Vec2::new(10.0, 10.0));
    assert_eq!(r.size(), Vec2::splat(10.0));
}

#[test]
fn test_from_center_size() {
    let r = Rect::from_center_size(Vec2::new(5.0, 5.0), Vec2::new(2.0, 4.0));
    assert_eq!(r, rect(4.0, 3.0, 6.0, 7.0));
    assert_eq!(r.center(), Vec2::new(5.0, 5.0));
}

#[test]
fn test_contains_and_intersects() {
    let big = rect(0.0, 0.0, 100.0, 100.0);
    let small = rect(10.0, 10.0, 20.0, 20.0);
    let straddling = rect(90.0, 90.0, 110.0, 110.0);
    let apart = rect(200.0, 200.0, 210.0, 210.0);

    assert!(big.contains(&small));
    assert!(!small.contains(&big));
    assert!(!big.contains(&straddling));
    assert!(big.intersects(&straddling));
    assert!(!big.intersects(&apart));
    assert!(big.contains_point(Vec2::new(100.0, 0.0)));
    assert!(!big.contains_point(Vec2::new(100.1, 0.0)));
}

#[test]
fn test_union_encloses_both() {
    let a = rect(0.0, 0.0, 1.0, 1.0);
    let b = rect(5.0, -2.0, 6.0, 0.5);
    let u = a.union(&b);
    assert!(u.contains(&a));
    assert!(u.contains(&b));
    assert_eq!(u, rect(0.0, -2.0, 6.0, 1.0));
}

#[test]
fn test_orthant_bit_layout() {
    let c = Vec2::new(50.0, 50.0);
    assert_eq!(Rect::orthant(c, Vec2::new(10.0, 10.0)), 0);
    assert_eq!(Rect::orthant(c, Vec2::new(90.0, 10.0)), 1);
    assert_eq!(Rect::orthant(c, Vec2::new(10.0, 90.0)), 2);
    assert_eq!(Rect::orthant(c, Vec2::new(90.0, 90.0)), 3);
    // Ties go to the high side
    assert_eq!(Rect::orthant(c, c), 3);
}

#[test]
fn test_orthant_bounds_tile_the_parent() {
    let r = rect(0.0, 0.0, 100.0, 100.0);
    let c = Vec2::new(30.0, 60.0);
    assert_eq!(r.orthant_bounds(c, 0), rect(0.0, 0.0, 30.0, 60.0));
    assert_eq!(r.orthant_bounds(c, 1), rect(30.0, 0.0, 100.0, 60.0));
    assert_eq!(r.orthant_bounds(c, 2), rect(0.0, 60.0, 30.0, 100.0));
    assert_eq!(r.orthant_bounds(c, 3), rect(30.0, 60.0, 100.0, 100.0));
    for orthant in 0..4 {
        assert!(r.contains(&r.orthant_bounds(c, orthant)));
    }
}

#[test]
fn test_validity() {
    assert!(rect(0.0, 0.0, 1.0, 1.0).is_valid());
    assert!(!Rect { min: Vec2::ONE, max: Vec2::ZERO }.is_valid());
    assert!(!Rect { min: Vec2::new(f32::NAN, 0.0), max: Vec2::ONE }.is_valid());
    assert!(!Rect::new(Vec2::new(f32::NAN, 0.0), Vec2::ONE).is_valid());
    assert!(!Rect::new(Vec2::ZERO, Vec2::new(1.0, f32::NAN)).is_valid());
    assert!(Rect::from_point(Vec2::ONE).is_degenerate());
    assert!(!rect(0.0, 0.0, 0.0, 1.0).is_degenerate());
}
