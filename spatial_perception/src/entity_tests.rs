use super::*;
use glam::Vec2;
use crate::bounds::Rect;

fn unit_rect(x: f32, y: f32) -> Rect {
    Rect::new(Vec2::new(x, y), Vec2::new(x + 1.0, y + 1.0))
}

#[test]
fn test_entity_id_display() {
    assert_eq!(format!("{}", EntityId(42)), "entity#42");
}

#[test]
fn test_static_and_mobile_constructors() {
    let wall = Entity::new_static(EntityId(1), unit_rect(0.0, 0.0));
    let walker = Entity::new_mobile(EntityId(2), unit_rect(5.0, 5.0));

    assert_eq!(wall.kind(), EntityKind::Static);
    assert!(!wall.is_mobile());
    assert_eq!(walker.kind(), EntityKind::Mobile);
    assert!(walker.is_mobile());
    assert_eq!(walker.id(), EntityId(2));
    assert_eq!(*walker.bounds(), unit_rect(5.0, 5.0));
    assert!(walker.tags().is_empty());
}

#[test]
fn test_tags() {
    let walker = Entity::new_mobile(EntityId(3), unit_rect(0.0, 0.0))
        .with_tags(SemanticTags::AGENT | SemanticTags::PEDESTRIAN);
    assert!(walker.tags().contains(SemanticTags::AGENT));
    assert!(walker.tags().intersects(SemanticTags::PEDESTRIAN | SemanticTags::VEHICLE));
    assert!(!walker.tags().contains(SemanticTags::VEHICLE));
    assert_eq!(SemanticTags::default(), SemanticTags::empty());
}

#[test]
fn test_relocated_keeps_identity() {
    let walker = Entity::new_mobile(EntityId(4), unit_rect(0.0, 0.0))
        .with_tags(SemanticTags::AGENT);
    let moved = walker.relocated(unit_rect(9.0, 9.0));
    assert_eq!(moved.id(), walker.id());
    assert_eq!(moved.tags(), walker.tags());
    assert_eq!(*moved.bounds(), unit_rect(9.0, 9.0));
}
