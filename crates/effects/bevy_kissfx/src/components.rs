use bevy::prelude::*;

use kissfx_core::TargetId;

/// Marks an entity as an effect target. `slots` lists the entities carrying
/// the target's `Handle<StandardMaterial>` components, in slot order (a
/// multi-material renderer is a root plus one entity per slot). An empty list
/// means the root entity is its own single slot.
#[derive(Component, Debug, Clone, Default)]
pub struct KissTarget {
    pub slots: Vec<Entity>,
}

/// Attached by the indexing system once the engine has allocated an id for
/// the target.
#[derive(Component, Copy, Clone, Debug)]
pub struct RegisteredTarget(pub TargetId);
