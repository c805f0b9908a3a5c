/// PolicyRegistry - named factories for partition policies.
///
/// Configuration refers to policies by name; the registry resolves the
/// name once, when a builder is created.

use rustc_hash::FxHashMap;
use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::perception_err;
use super::policy::{PartitionPolicy, CenterPolicy, DensityPolicy};

/// Creates a fresh policy instance.
pub type PolicyFactory<B> = fn() -> Box<dyn PartitionPolicy<B>>;

fn center_factory<B: Bounds>() -> Box<dyn PartitionPolicy<B>> {
    Box::new(CenterPolicy)
}

fn density_factory<B: Bounds>() -> Box<dyn PartitionPolicy<B>> {
    Box::new(DensityPolicy)
}

pub struct PolicyRegistry<B: Bounds> {
    factories: FxHashMap<String, PolicyFactory<B>>,
}

impl<B: Bounds> PolicyRegistry<B> {
    /// Registry with the built-in `"center"` and `"density"` policies.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(CenterPolicy::NAME, center_factory::<B>);
        registry.register(DensityPolicy::NAME, density_factory::<B>);
        registry
    }

    /// Registry without any policy.
    pub fn empty() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Register (or replace) a factory under a name.
    pub fn register(&mut self, name: impl Into<String>, factory: PolicyFactory<B>) {
        self.factories.insert(name.into(), factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Instantiate the policy registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn PartitionPolicy<B>>> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(perception_err!(
                "perception::PartitionPolicy",
                Error::InvalidArgument(format!("unknown partition policy '{}'", name))
            )),
        }
    }
}

impl<B: Bounds> Default for PolicyRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
