use super::*;
use glam::Vec2;
use crate::bounds::Rect;
use crate::entity::SemanticTags;
use crate::frustum::{BoxFrustum, FrustumId};
use crate::culling::TagInterestFilter;

fn view() -> BoxFrustum<Rect> {
    BoxFrustum::new(FrustumId(5), Rect::new(Vec2::ZERO, Vec2::splat(10.0)))
}

fn walker(id: u64) -> Entity<Rect> {
    Entity::new_mobile(EntityId(id), Rect::from_point(Vec2::splat(5.0))).with_tags(SemanticTags::PEDESTRIAN)
}

#[test]
fn test_defaults() {
    let frustum = view();
    let request = CullingRequest::new(&frustum);
    assert_eq!(request.frustum().id(), FrustumId(5));
    assert!(request.sensing_entity().is_none());
    assert!(request.alterator().is_none());
    assert!(request.filter().is_none());

    let request = request.with_sensing_entity(EntityId(3));
    assert_eq!(request.sensing_entity(), Some(EntityId(3)));
}

#[test]
fn test_judge_rejects_outside() {
    let frustum = view();
    let request = CullingRequest::new(&frustum);
    let entity = walker(1);
    assert!(request.judge(&entity, Classification::Outside).is_none());

    let result = request.judge(&entity, Classification::Intersecting).unwrap();
    assert_eq!(result.frustum(), FrustumId(5));
    assert_eq!(result.classification(), Classification::Intersecting);
    assert_eq!(result.entity_id(), EntityId(1));
}

#[test]
fn test_alterator_can_demote_and_reject() {
    let frustum = view();
    let occlude_odd = |_: &Rect, e: &Entity<Rect>, c: Classification, _: FrustumId| {
        if e.id().0 % 2 == 1 { Classification::Outside } else { c }
    };
    let request = CullingRequest::new(&frustum).with_alterator(&occlude_odd);
    assert!(request.judge(&walker(1), Classification::Inside).is_none());
    assert_eq!(
        request.judge(&walker(2), Classification::Inside).unwrap().classification(),
        Classification::Inside
    );
}

#[test]
fn test_filter_sees_altered_classification() {
    let frustum = view();
    let demote = |_: &Rect, _: &Entity<Rect>, _: Classification, _: FrustumId| Classification::Intersecting;
    let only_inside = |_: &Rect, _: &Entity<Rect>, c: Classification, _: FrustumId| c == Classification::Inside;
    let request = CullingRequest::new(&frustum)
        .with_alterator(&demote)
        .with_filter(&only_inside);
    assert!(request.judge(&walker(2), Classification::Inside).is_none());
}

#[test]
fn test_tag_filter() {
    let frustum = view();
    let vehicles = TagInterestFilter::new(SemanticTags::VEHICLE);
    let pedestrians = TagInterestFilter::new(SemanticTags::PEDESTRIAN);

    let request = CullingRequest::new(&frustum).with_filter(&vehicles);
    assert!(request.judge(&walker(1), Classification::Inside).is_none());
    let request = CullingRequest::new(&frustum).with_filter(&pedestrians);
    assert!(request.judge(&walker(1), Classification::Inside).is_some());
}
