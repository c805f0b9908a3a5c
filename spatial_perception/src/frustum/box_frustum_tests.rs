use super::*;
use glam::{Vec2, Vec3};
use crate::bounds::{Aabb, Interval, Rect};

fn view() -> BoxFrustum<Rect> {
    BoxFrustum::new(FrustumId(1), Rect::new(Vec2::new(10.0, 10.0), Vec2::new(50.0, 30.0)))
}

#[test]
fn test_rect_inside() {
    let bounds = Rect::new(Vec2::new(20.0, 15.0), Vec2::new(25.0, 20.0));
    assert_eq!(view().classify(&bounds), Classification::Inside);
    assert!(view().intersects(&bounds));
}

#[test]
fn test_rect_outside() {
    let bounds = Rect::new(Vec2::new(60.0, 15.0), Vec2::new(70.0, 20.0));
    assert_eq!(view().classify(&bounds), Classification::Outside);
    assert!(!view().intersects(&bounds));
}

#[test]
fn test_rect_intersecting() {
    let bounds = Rect::new(Vec2::new(45.0, 25.0), Vec2::new(55.0, 35.0));
    assert_eq!(view().classify(&bounds), Classification::Intersecting);
}

#[test]
fn test_enclosing_bounds_intersect() {
    let bounds = Rect::new(Vec2::ZERO, Vec2::splat(100.0));
    assert_eq!(view().classify(&bounds), Classification::Intersecting);
}

#[test]
fn test_touching_edge_counts_as_inside() {
    let bounds = Rect::from_point(Vec2::new(50.0, 30.0));
    assert_eq!(view().classify(&bounds), Classification::Inside);
}

#[test]
fn test_interval_and_aabb() {
    let line = BoxFrustum::new(FrustumId(2), Interval::new(0.0, 10.0));
    assert_eq!(line.classify(&Interval::new(2.0, 3.0)), Classification::Inside);
    assert_eq!(line.classify(&Interval::new(9.0, 12.0)), Classification::Intersecting);
    assert_eq!(line.classify(&Interval::new(11.0, 12.0)), Classification::Outside);

    let room = BoxFrustum::new(FrustumId(3), Aabb::new(Vec3::ZERO, Vec3::splat(4.0)));
    assert_eq!(room.classify(&Aabb::new(Vec3::ONE, Vec3::splat(2.0))), Classification::Inside);
    assert_eq!(room.classify(&Aabb::new(Vec3::splat(5.0), Vec3::splat(6.0))), Classification::Outside);
    assert_eq!(room.id(), FrustumId(3));
}

#[test]
fn test_frustum_id_display() {
    assert_eq!(FrustumId(7).to_string(), "frustum#7");
}
