#![allow(dead_code)]
//! kissfx Core (engine-agnostic)
//!
//! Timed, parameterized shader-effect playback: material instancing, progress
//! driven shader-parameter updates, loop vs one-shot completion, and
//! restoration of original materials on stop/teardown. The crate defines the
//! host capability trait, the per-target controller state machine, and an
//! engine that steps many controllers from a single per-frame update.

pub mod config;
pub mod controller;
pub mod engine;
pub mod host;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod params;
pub mod registry;
pub mod timer;
pub mod value;

// Re-exports for consumers (adapters)
pub use config::{Config, DEFAULT_PROGRESS_PROPERTY};
pub use controller::{CompletionCallback, EffectController};
pub use engine::EffectEngine;
pub use host::MaterialHost;
pub use ids::{HandleAllocator, IdAllocator, MaterialHandle, TargetId, TextureHandle};
pub use inputs::{EffectCommand, Inputs};
pub use outputs::{EffectEvent, Outputs};
pub use registry::MaterialRegistry;
pub use timer::EffectTimer;
pub use value::{ParamKind, ParamValue};
