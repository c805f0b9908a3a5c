use super::*;
use glam::{Vec2, Vec3};
use crate::bounds::{Aabb, Interval, Rect};

fn point_rect(x: f32, y: f32) -> Rect {
    Rect::from_point(Vec2::new(x, y))
}

// ============================================================================
// classify
// ============================================================================

#[test]
fn test_classify_quadrants() {
    let field = PartitionField::<Rect>::new(Vec2::new(50.0, 50.0));
    assert_eq!(field.child_count(), 4);
    assert_eq!(field.classify(&point_rect(10.0, 10.0)), 0);
    assert_eq!(field.classify(&point_rect(90.0, 10.0)), 1);
    assert_eq!(field.classify(&point_rect(10.0, 90.0)), 2);
    assert_eq!(field.classify(&point_rect(90.0, 90.0)), 3);
}

#[test]
fn test_classify_on_reference_goes_high() {
    let field = PartitionField::<Rect>::new(Vec2::new(50.0, 50.0));
    assert_eq!(field.classify(&point_rect(50.0, 50.0)), 3);
}

#[test]
fn test_classify_uses_center_of_extended_bounds() {
    let field = PartitionField::<Rect>::new(Vec2::new(50.0, 50.0));
    // Straddles both axes, center at (60, 40)
    let wide = Rect::new(Vec2::new(30.0, 20.0), Vec2::new(90.0, 60.0));
    assert_eq!(field.classify(&wide), 1);
}

#[test]
fn test_classify_outside_region_is_total() {
    let field = PartitionField::<Rect>::new(Vec2::new(50.0, 50.0));
    assert_eq!(field.classify(&point_rect(-500.0, 900.0)), 2);
}

#[test]
fn test_classify_octants_and_interval() {
    let field = PartitionField::<Aabb>::new(Vec3::ZERO);
    assert_eq!(field.child_count(), 8);
    let b = Aabb::from_point(Vec3::new(1.0, -1.0, 1.0));
    assert_eq!(field.classify(&b), 0b101);

    let line = PartitionField::<Interval>::new(5.0);
    assert_eq!(line.child_count(), 2);
    assert_eq!(line.classify(&Interval::new(1.0, 2.0)), 0);
    assert_eq!(line.classify(&Interval::new(6.0, 9.0)), 1);
}

// ============================================================================
// child_region / occupied_slots
// ============================================================================

#[test]
fn test_child_regions_tile_the_parent() {
    let region = Rect::new(Vec2::ZERO, Vec2::splat(100.0));
    let field = PartitionField::<Rect>::new(Vec2::new(25.0, 75.0));

    let children: Vec<Rect> = (0..4).map(|slot| field.child_region(&region, slot)).collect();
    assert_eq!(children[0], Rect::new(Vec2::new(0.0, 0.0), Vec2::new(25.0, 75.0)));
    assert_eq!(children[3], Rect::new(Vec2::new(25.0, 75.0), Vec2::new(100.0, 100.0)));
    for child in &children {
        assert!(region.contains(child));
    }
}

#[test]
fn test_occupied_slots() {
    let field = PartitionField::<Rect>::new(Vec2::new(50.0, 50.0));
    let spread = [point_rect(1.0, 1.0), point_rect(99.0, 1.0), point_rect(2.0, 2.0)];
    assert_eq!(field.occupied_slots(&spread), 2);

    let clustered = [point_rect(60.0, 60.0), point_rect(70.0, 70.0)];
    assert_eq!(field.occupied_slots(&clustered), 1);

    let empty: [Rect; 0] = [];
    assert_eq!(field.occupied_slots(&empty), 0);
}
