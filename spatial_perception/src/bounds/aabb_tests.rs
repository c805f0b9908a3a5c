use super::*;

fn make_aabb(min: Vec3, max: Vec3) -> Aabb {
    Aabb { min, max }
}

#[test]
fn test_aabb_contains() {
    let big = make_aabb(Vec3::splat(-10.0), Vec3::splat(10.0));
    let small = make_aabb(Vec3::splat(-1.0), Vec3::splat(1.0));
    let straddling = make_aabb(Vec3::new(5.0, 5.0, 5.0), Vec3::new(15.0, 15.0, 15.0));

    assert!(big.contains(&small));
    assert!(!small.contains(&big));
    assert!(!big.contains(&straddling));
}

#[test]
fn test_aabb_intersects() {
    let a = make_aabb(Vec3::splat(-2.0), Vec3::splat(2.0));
    let b = make_aabb(Vec3::splat(1.0), Vec3::splat(3.0));
    let c = make_aabb(Vec3::splat(5.0), Vec3::splat(7.0));

    assert!(a.intersects(&b)); // overlapping
    assert!(!a.intersects(&c)); // disjoint
}

#[test]
fn test_corner_mask() {
    let a = make_aabb(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(a.corner(0), Vec3::ZERO);
    assert_eq!(a.corner(7), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(a.corner(5), Vec3::new(1.0, 0.0, 3.0));
}

#[test]
fn test_octant_of_point() {
    let center = Vec3::ZERO;
    assert_eq!(Aabb::orthant(center, Vec3::new(-1.0, -1.0, -1.0)), 0);
    assert_eq!(Aabb::orthant(center, Vec3::new(1.0, -1.0, -1.0)), 1);
    assert_eq!(Aabb::orthant(center, Vec3::new(-1.0, 1.0, -1.0)), 2);
    assert_eq!(Aabb::orthant(center, Vec3::new(-1.0, -1.0, 1.0)), 4);
    assert_eq!(Aabb::orthant(center, Vec3::new(1.0, 1.0, 1.0)), 7);
}

#[test]
fn test_octant_bounds_are_enclosed_and_cover_volume() {
    let world = make_aabb(Vec3::splat(-100.0), Vec3::splat(100.0));
    let center = world.center();
    let mut volume = 0.0;
    for octant in 0..8 {
        let child = world.orthant_bounds(center, octant);
        assert!(world.contains(&child));
        let s = child.size();
        volume += s.x * s.y * s.z;
    }
    let s = world.size();
    assert!((volume - s.x * s.y * s.z).abs() < 1.0);
}

#[test]
fn test_union_and_validity() {
    let a = Aabb::new(Vec3::ONE, Vec3::ZERO);
    assert_eq!(a.min, Vec3::ZERO);
    let b = Aabb::from_center_size(Vec3::splat(5.0), Vec3::splat(2.0));
    let u = a.union(&b);
    assert!(u.contains(&a) && u.contains(&b));
    assert!(u.is_valid());
    assert!(!make_aabb(Vec3::ONE, Vec3::ZERO).is_valid());
    assert!(!Aabb::new(Vec3::new(0.0, f32::NAN, 0.0), Vec3::ONE).is_valid());
    assert!(!Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, f32::NAN)).is_valid());
    assert!(Aabb::from_point(Vec3::ONE).is_degenerate());
    assert_eq!(u.dimension(), Dimension::Three);
}
