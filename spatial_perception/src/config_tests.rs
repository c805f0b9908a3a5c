use super::*;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_tree_config_defaults() {
    let config = TreeConfig::default();
    assert_eq!(config.split_threshold, 8);
    assert_eq!(config.max_depth, 16);
    assert_eq!(config.partition_policy, "center");
    assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Reject);
    assert_eq!(config.merge, MergePolicy::WhenEmpty);
    assert!(config.validate().is_ok());
}

#[test]
fn test_perception_config_defaults() {
    let config = PerceptionConfig::default();
    assert_eq!(config.traversal, TraversalStrategy::BottomUp);
    assert!(config.validate().is_ok());
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_with_setters() {
    let config = TreeConfig::default()
        .with_split_threshold(4)
        .with_max_depth(3)
        .with_partition_policy("density")
        .with_out_of_bounds(OutOfBoundsPolicy::Expand)
        .with_merge(MergePolicy::Never);

    assert_eq!(config.split_threshold, 4);
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.partition_policy, "density");
    assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Expand);
    assert_eq!(config.merge, MergePolicy::Never);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_zero_split_threshold_is_rejected() {
    let config = TreeConfig::default().with_split_threshold(0);
    assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_excessive_depth_is_rejected() {
    let config = TreeConfig::default().with_max_depth(MAX_DEPTH_LIMIT + 1);
    assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));

    let config = TreeConfig::default().with_max_depth(MAX_DEPTH_LIMIT);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_policy_name_is_rejected() {
    let config = TreeConfig::default().with_partition_policy("");
    assert!(config.validate().is_err());
}

#[test]
fn test_perception_config_validates_both_trees() {
    let mut config = PerceptionConfig::default();
    config.dynamic_tree.split_threshold = 0;
    assert!(config.validate().is_err());
}
