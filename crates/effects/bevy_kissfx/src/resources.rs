use bevy::prelude::*;
use std::collections::HashMap;

use kissfx_core::{
    EffectEvent, HandleAllocator, Inputs, MaterialHandle, TargetId, TextureHandle,
};

/// Maps core handles to strong asset handles (and back). Strong handles are
/// held here so interned assets stay alive while the core references them.
#[derive(Resource, Default)]
pub struct HandleTable {
    alloc: HandleAllocator,
    materials: HashMap<MaterialHandle, Handle<StandardMaterial>>,
    material_ids: HashMap<AssetId<StandardMaterial>, MaterialHandle>,
    textures: HashMap<TextureHandle, Handle<Image>>,
    texture_ids: HashMap<AssetId<Image>, TextureHandle>,
}

impl HandleTable {
    /// Intern a material asset handle, returning the stable core handle.
    pub fn intern_material(&mut self, handle: Handle<StandardMaterial>) -> MaterialHandle {
        if let Some(existing) = self.material_ids.get(&handle.id()) {
            return *existing;
        }
        let id = self.alloc.alloc_material();
        self.material_ids.insert(handle.id(), id);
        self.materials.insert(id, handle);
        id
    }

    pub fn intern_texture(&mut self, handle: Handle<Image>) -> TextureHandle {
        if let Some(existing) = self.texture_ids.get(&handle.id()) {
            return *existing;
        }
        let id = self.alloc.alloc_texture();
        self.texture_ids.insert(handle.id(), id);
        self.textures.insert(id, handle);
        id
    }

    pub fn material(&self, id: MaterialHandle) -> Option<Handle<StandardMaterial>> {
        self.materials.get(&id).cloned()
    }

    pub fn texture(&self, id: TextureHandle) -> Option<Handle<Image>> {
        self.textures.get(&id).cloned()
    }

    /// Core handle for an asset the table has already interned.
    pub fn lookup_material(&self, handle: &Handle<StandardMaterial>) -> Option<MaterialHandle> {
        self.material_ids.get(&handle.id()).copied()
    }

    /// Forget a material mapping, returning the strong handle for teardown.
    pub fn forget_material(&mut self, id: MaterialHandle) -> Option<Handle<StandardMaterial>> {
        let handle = self.materials.remove(&id)?;
        self.material_ids.remove(&handle.id());
        Some(handle)
    }
}

/// Slot entities per registered target. Populated by the indexing system by
/// reading `KissTarget` components.
#[derive(Resource, Default)]
pub struct TargetIndex {
    pub map: HashMap<TargetId, TargetSlots>,
}

/// A target's root entity and its material slot entities, in slot order.
#[derive(Clone, Debug)]
pub struct TargetSlots {
    pub root: Entity,
    pub slots: Vec<Entity>,
}

/// Playback commands staged by gameplay/editor systems, drained into
/// `EffectEngine::update` once per frame.
#[derive(Resource, Default)]
pub struct EffectCommands(pub Inputs);

impl EffectCommands {
    pub fn push(&mut self, cmd: kissfx_core::EffectCommand) {
        self.0.push(cmd);
    }
}

/// Events staged from EffectEngine::update for consumption by app systems
/// (keeps ordering explicit: Compute -> Apply).
#[derive(Resource, Default)]
pub struct PendingEffectEvents {
    pub events: Vec<EffectEvent>,
}

/// Instances queued for destruction under `DestroyMode::Deferred`.
#[derive(Resource, Default)]
pub struct PendingDestroys {
    pub handles: Vec<MaterialHandle>,
}

/// Destroy-strategy for effect material instances, chosen at plugin setup.
/// Deferred removes assets at the end of the frame (the running-simulation
/// path); Immediate removes them inside the tick (authoring/editor path).
#[derive(Resource, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DestroyMode {
    #[default]
    Deferred,
    Immediate,
}
