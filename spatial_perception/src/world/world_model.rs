/// WorldModel - static and mobile entities of one place, and how agents perceive them.
///
/// A tick uses the model in two phases: `perceive` (shared access, one
/// call per sensing agent), then staging and `commit` of mobile changes
/// (exclusive access). The borrow rules keep the two from overlapping.

use rustc_hash::FxHashMap;
use crate::bounds::Bounds;
use crate::config::PerceptionConfig;
use crate::culling::{culler_for, CullingRequest, CullingResult, PerceptionCuller};
use crate::dynamic::{CommitReport, DynamicEntityManager};
use crate::entity::{Entity, EntityId};
use crate::error::{Error, Result};
use crate::partition::PolicyRegistry;
use crate::tree::{PerceptionTree, TreeBuilder};
use crate::{perception_err, perception_info};

const SOURCE: &str = "perception::WorldModel";

/// Everything one request perceived, split by tree.
#[derive(Debug, Clone)]
pub struct Percepts<'a, B: Bounds> {
    pub static_results: Vec<CullingResult<'a, B>>,
    pub mobile_results: Vec<CullingResult<'a, B>>,
}

impl<'a, B: Bounds> Percepts<'a, B> {
    pub fn len(&self) -> usize {
        self.static_results.len() + self.mobile_results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.static_results.is_empty() && self.mobile_results.is_empty()
    }

    /// Static results first, then mobile ones.
    pub fn iter(&self) -> impl Iterator<Item = &CullingResult<'a, B>> {
        self.static_results.iter().chain(self.mobile_results.iter())
    }
}

/// Percepts of a tick, keyed by sensing entity; one entry per request, in request order.
pub type AgentPercepts<'a, B> = FxHashMap<EntityId, Vec<Percepts<'a, B>>>;

pub struct WorldModel<B: Bounds> {
    static_tree: PerceptionTree<B>,
    mobile: DynamicEntityManager<B>,
    culler: Box<dyn PerceptionCuller<B>>,
}

impl<B: Bounds> WorldModel<B> {
    pub fn new(
        static_tree: PerceptionTree<B>,
        mobile: DynamicEntityManager<B>,
        culler: Box<dyn PerceptionCuller<B>>,
    ) -> Self {
        Self { static_tree, mobile, culler }
    }

    /// Build both trees from a configuration.
    ///
    /// # Arguments
    ///
    /// * `static_entities` - Population of the static tree, built once
    /// * `world_bounds` - Root region of both trees
    pub fn from_config<I>(
        config: &PerceptionConfig,
        registry: &PolicyRegistry<B>,
        static_entities: I,
        world_bounds: B,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Entity<B>>,
    {
        config.validate().map_err(|e| perception_err!(SOURCE, e))?;

        let static_entities: Vec<Entity<B>> = static_entities.into_iter().collect();
        if let Some(entity) = static_entities.iter().find(|e| e.is_mobile()) {
            return Err(perception_err!(
                SOURCE,
                Error::InvalidArgument(format!("{} is not a static entity", entity.id()))
            ));
        }

        let static_tree = TreeBuilder::from_config(&config.static_tree, registry)?
            .build(static_entities, Some(world_bounds))?;
        let mobile = DynamicEntityManager::from_config(&config.dynamic_tree, registry, world_bounds)?;
        let culler = culler_for(config.traversal);

        perception_info!(
            SOURCE,
            "World model ready: {} static entities, {} culler",
            static_tree.len(),
            culler.name()
        );
        Ok(Self::new(static_tree, mobile, culler))
    }

    pub fn with_culler(mut self, culler: Box<dyn PerceptionCuller<B>>) -> Self {
        self.culler = culler;
        self
    }

    // ===== READ ACCESS =====

    pub fn static_tree(&self) -> &PerceptionTree<B> {
        &self.static_tree
    }

    /// Committed tree of mobile entities.
    pub fn mobile_tree(&self) -> &PerceptionTree<B> {
        self.mobile.tree()
    }

    pub fn mobile(&self) -> &DynamicEntityManager<B> {
        &self.mobile
    }

    pub fn culler(&self) -> &dyn PerceptionCuller<B> {
        self.culler.as_ref()
    }

    /// Committed entity, static or mobile.
    pub fn entity(&self, id: EntityId) -> Option<&Entity<B>> {
        self.static_tree.entity(id).or_else(|| self.mobile.tree().entity(id))
    }

    pub fn len(&self) -> usize {
        self.static_tree.len() + self.mobile.tree().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ===== PERCEPTION =====

    /// Cull both trees against one request.
    pub fn perceive<'a>(&'a self, request: &CullingRequest<'a, B>) -> Result<Percepts<'a, B>> {
        Ok(Percepts {
            static_results: self.culler.cull(&self.static_tree, request)?,
            mobile_results: self.culler.cull(self.mobile.tree(), request)?,
        })
    }

    /// Run the requests of every agent body of a tick.
    ///
    /// An agent with several sensors sends one request per frustum.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a request without sensing entity or naming an
    /// entity unknown to both trees, plus the errors of the culler.
    pub fn perceive_all<'a, I>(&'a self, requests: I) -> Result<AgentPercepts<'a, B>>
    where
        I: IntoIterator<Item = CullingRequest<'a, B>>,
    {
        let mut perceptions: AgentPercepts<'a, B> = FxHashMap::default();
        for request in requests {
            let Some(sensing) = request.sensing_entity() else {
                return Err(perception_err!(
                    SOURCE,
                    Error::InvalidArgument(format!("{} has no sensing entity", request.frustum().id()))
                ));
            };
            if self.entity(sensing).is_none() {
                return Err(perception_err!(
                    SOURCE,
                    Error::InvalidArgument(format!("unknown sensing {}", sensing))
                ));
            }
            let percepts = self.perceive(&request)?;
            perceptions.entry(sensing).or_default().push(percepts);
        }
        Ok(perceptions)
    }

    // ===== MOBILE ENTITIES =====

    /// Stage a mobile entity. Identifiers of static entities are refused.
    pub fn register_mobile_entity(&mut self, entity: Entity<B>) -> Result<()> {
        if self.static_tree.contains(entity.id()) {
            return Err(perception_err!(
                SOURCE,
                Error::InvalidArgument(format!("{} is already a static entity", entity.id()))
            ));
        }
        self.mobile.register_mobile_entity(entity)
    }

    pub fn unregister_mobile_entity(&mut self, id: EntityId) {
        self.mobile.unregister_mobile_entity(id);
    }

    pub fn relocate_mobile_entity(&mut self, id: EntityId, bounds: B) -> Result<()> {
        self.mobile.relocate_mobile_entity(id, bounds)
    }

    pub fn commit(&mut self) -> Result<CommitReport> {
        self.mobile.commit()
    }
}

#[cfg(test)]
#[path = "world_model_tests.rs"]
mod tests;
