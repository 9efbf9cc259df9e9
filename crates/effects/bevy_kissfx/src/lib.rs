//! Bevy plugin wrapping the kissfx effect playback core.
//!
//! The core addresses materials through opaque handles and a capability
//! trait; this crate provides the world-backed host (StandardMaterial assets,
//! slot entities, name->setter property registry) and the per-frame driver.

use bevy::prelude::*;

pub mod components;
pub mod registry;
pub mod resources;
pub mod systems;

pub use components::{KissTarget, RegisteredTarget};
pub use registry::{MaterialPropertyRegistry, PropertySetter};
pub use resources::{
    DestroyMode, EffectCommands, HandleTable, PendingDestroys, PendingEffectEvents, TargetIndex,
};

use kissfx_core::{Config, EffectEngine};

#[derive(Resource)]
pub struct KissfxEngine(pub EffectEngine);

pub struct KissfxPlugin;

impl Plugin for KissfxPlugin {
    fn build(&self, app: &mut App) {
        // Headless apps (tests, tools) run without the asset plugin; the host
        // only needs the Assets collections themselves.
        if !app.world().contains_resource::<Assets<StandardMaterial>>() {
            app.insert_resource(Assets::<StandardMaterial>::default());
        }
        if !app.world().contains_resource::<Assets<Image>>() {
            app.insert_resource(Assets::<Image>::default());
        }

        app.insert_resource(KissfxEngine(EffectEngine::new(Config::default())))
            .insert_resource(MaterialPropertyRegistry::with_defaults())
            .init_resource::<HandleTable>()
            .init_resource::<TargetIndex>()
            .init_resource::<EffectCommands>()
            .init_resource::<PendingEffectEvents>()
            .init_resource::<PendingDestroys>()
            .init_resource::<DestroyMode>()
            .add_systems(
                Update,
                (systems::index_targets, systems::tick_effects).chain(),
            )
            .add_systems(PostUpdate, systems::flush_destroys);
    }
}
