use bevy::prelude::*;
use std::collections::HashMap;

use kissfx_core::{MaterialHandle, MaterialHost, ParamValue, TargetId};

use crate::components::{KissTarget, RegisteredTarget};
use crate::registry::MaterialPropertyRegistry;
use crate::resources::{
    DestroyMode, EffectCommands, HandleTable, PendingDestroys, PendingEffectEvents, TargetIndex,
    TargetSlots,
};
use crate::KissfxEngine;

/// Registers new `KissTarget` roots with the engine and keeps slot material
/// handles interned so snapshots see stable core handles even after apps swap
/// materials between plays.
pub fn index_targets(
    mut commands: Commands,
    mut eng: ResMut<KissfxEngine>,
    mut table: ResMut<HandleTable>,
    mut index: ResMut<TargetIndex>,
    roots: Query<(Entity, &KissTarget, Option<&RegisteredTarget>)>,
    handles: Query<&Handle<StandardMaterial>>,
) {
    for (entity, target, registered) in &roots {
        let slots: Vec<Entity> = if target.slots.is_empty() {
            vec![entity]
        } else {
            target.slots.clone()
        };

        let mut complete = true;
        for slot in &slots {
            match handles.get(*slot) {
                Ok(handle) => {
                    table.intern_material(handle.clone());
                }
                Err(_) => complete = false,
            }
        }

        if registered.is_none() {
            // Wait until every slot entity carries a material.
            if !complete {
                continue;
            }
            let id = eng.0.create_target();
            index.map.insert(id, TargetSlots { root: entity, slots });
            commands.entity(entity).insert(RegisteredTarget(id));
        }
    }
}

/// MaterialHost over the Bevy world: slot materials are
/// `Handle<StandardMaterial>` components on slot entities, duplication and
/// destruction go through `Assets<StandardMaterial>`, and property writes go
/// through the name->setter registry.
struct WorldHost<'a> {
    world: &'a mut World,
    table: &'a mut HandleTable,
    assets: &'a mut Assets<StandardMaterial>,
    pending: &'a mut PendingDestroys,
    registry: MaterialPropertyRegistry,
    index: HashMap<TargetId, TargetSlots>,
    mode: DestroyMode,
}

impl MaterialHost for WorldHost<'_> {
    fn duplicate(&mut self, source: MaterialHandle) -> Option<MaterialHandle> {
        let handle = self.table.material(source)?;
        let copy = self.assets.get(&handle)?.clone();
        let new_handle = self.assets.add(copy);
        Some(self.table.intern_material(new_handle))
    }

    fn destroy(&mut self, instance: MaterialHandle) {
        match self.mode {
            DestroyMode::Immediate => {
                if let Some(handle) = self.table.forget_material(instance) {
                    self.assets.remove(&handle);
                }
            }
            DestroyMode::Deferred => self.pending.handles.push(instance),
        }
    }

    fn slot_materials(&self, target: TargetId) -> Option<Vec<MaterialHandle>> {
        let entry = self.index.get(&target)?;
        let mut out = Vec::with_capacity(entry.slots.len());
        for &slot in &entry.slots {
            let handle = self.world.get::<Handle<StandardMaterial>>(slot)?;
            out.push(self.table.lookup_material(handle)?);
        }
        Some(out)
    }

    fn set_slot_materials(&mut self, target: TargetId, materials: &[MaterialHandle]) -> bool {
        let Some(entry) = self.index.get(&target) else {
            return false;
        };
        if entry.slots.len() != materials.len() {
            return false;
        }
        // Resolve everything before writing anything, so a missing slot
        // entity or handle never leaves the target half-reassigned.
        let mut writes = Vec::with_capacity(materials.len());
        for (&slot, &mat) in entry.slots.iter().zip(materials) {
            let Some(handle) = self.table.material(mat) else {
                return false;
            };
            if self.world.get_entity(slot).is_none() {
                return false;
            }
            writes.push((slot, handle));
        }
        for (slot, handle) in writes {
            if let Some(mut e) = self.world.get_entity_mut(slot) {
                e.insert(handle);
            }
        }
        true
    }

    fn has_property(&self, material: MaterialHandle, property: &str) -> bool {
        if !self.registry.contains(property) {
            return false;
        }
        self.table
            .material(material)
            .is_some_and(|h| self.assets.get(&h).is_some())
    }

    fn set_property(&mut self, material: MaterialHandle, property: &str, value: &ParamValue) {
        let Some(setter) = self.registry.get(property) else {
            return;
        };
        let Some(handle) = self.table.material(material) else {
            return;
        };
        if let Some(mat) = self.assets.get_mut(&handle) {
            setter(mat, value, self.table);
        }
    }
}

/// Exclusive per-frame step: drain staged commands, sweep despawned targets,
/// run the core engine against a world-backed host, and stage events for app
/// systems (Compute -> Apply ordering, applied via the host during stepping).
pub fn tick_effects(world: &mut World) {
    let dt = world.resource::<Time>().delta_seconds();
    let inputs = std::mem::take(&mut world.resource_mut::<EffectCommands>().0);
    let mode = *world.resource::<DestroyMode>();
    let registry = world.resource::<MaterialPropertyRegistry>().clone();
    let index = world.resource::<TargetIndex>().map.clone();

    // Targets whose root entity despawned get torn down this frame.
    let dead: Vec<TargetId> = index
        .iter()
        .filter(|(_, entry)| world.get_entity(entry.root).is_none())
        .map(|(id, _)| *id)
        .collect();

    let events = world.resource_scope(|world, mut eng: Mut<KissfxEngine>| {
        world.resource_scope(|world, mut table: Mut<HandleTable>| {
            world.resource_scope(|world, mut assets: Mut<Assets<StandardMaterial>>| {
                world.resource_scope(|world, mut pending: Mut<PendingDestroys>| {
                    let mut host = WorldHost {
                        world,
                        table: &mut table,
                        assets: &mut assets,
                        pending: &mut pending,
                        registry,
                        index,
                        mode,
                    };
                    for id in &dead {
                        eng.0.remove_target(&mut host, *id);
                    }
                    eng.0.update(&mut host, dt, inputs).events.clone()
                })
            })
        })
    });

    if !dead.is_empty() {
        world
            .resource_mut::<TargetIndex>()
            .map
            .retain(|id, _| !dead.contains(id));
    }
    world.resource_mut::<PendingEffectEvents>().events = events;
}

/// Deferred-destroy flush: removes queued effect instance assets at the end
/// of the frame, after renderers have seen the restored originals.
pub fn flush_destroys(
    mut pending: ResMut<PendingDestroys>,
    mut table: ResMut<HandleTable>,
    mut assets: ResMut<Assets<StandardMaterial>>,
) {
    for id in pending.handles.drain(..) {
        if let Some(handle) = table.forget_material(id) {
            assets.remove(&handle);
        }
    }
}
