use super::*;
use glam::Vec2;
use crate::bounds::Rect;
use crate::partition::PartitionField;

/// Always splits around the origin
struct OriginPolicy;

impl PartitionPolicy<Rect> for OriginPolicy {
    fn name(&self) -> &str {
        "origin"
    }

    fn compute_partition_field(
        &self,
        _node_slot: usize,
        _node_bounds: &Rect,
        _entities: &[Rect],
        prior_failures: &[PartitionField<Rect>],
    ) -> Result<Option<PartitionField<Rect>>> {
        if prior_failures.is_empty() {
            Ok(Some(PartitionField::new(Vec2::ZERO)))
        } else {
            Ok(None)
        }
    }
}

fn origin_factory() -> Box<dyn PartitionPolicy<Rect>> {
    Box::new(OriginPolicy)
}

#[test]
fn test_builtin_policies_are_registered() {
    let registry = PolicyRegistry::<Rect>::new();
    assert!(registry.contains("center"));
    assert!(registry.contains("density"));
    assert_eq!(registry.names(), vec!["center", "density"]);

    assert_eq!(registry.create("center").unwrap().name(), "center");
    assert_eq!(registry.create("density").unwrap().name(), "density");
}

#[test]
fn test_unknown_policy_is_invalid_argument() {
    let registry = PolicyRegistry::<Rect>::default();
    match registry.create("voronoi") {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains("voronoi")),
        _ => panic!("expected InvalidArgument"),
    }
}

#[test]
fn test_register_custom_policy() {
    let mut registry = PolicyRegistry::<Rect>::empty();
    assert!(registry.names().is_empty());

    registry.register("origin", origin_factory);
    let policy = registry.create("origin").unwrap();
    assert_eq!(policy.name(), "origin");

    let world = Rect::new(Vec2::splat(-10.0), Vec2::splat(10.0));
    let field = policy
        .compute_partition_field(0, &world, &[world], &[])
        .unwrap()
        .unwrap();
    assert_eq!(field.reference(), Vec2::ZERO);
}
