#![allow(dead_code)]
//! Engine: controller ownership and public API (commands + stepping).
//!
//! Methods:
//! - new, create_target, remove_target, controller accessors, update
//!   (apply commands → tick controllers → collect events)

use crate::config::Config;
use crate::controller::{CompletionCallback, EffectController};
use crate::host::MaterialHost;
use crate::ids::{IdAllocator, MaterialHandle, TargetId};
use crate::inputs::{EffectCommand, Inputs};
use crate::outputs::Outputs;

/// Owns one controller per registered target and steps them all each tick.
#[derive(Debug)]
pub struct EffectEngine {
    cfg: Config,
    ids: IdAllocator,
    controllers: Vec<EffectController>,

    // Per-tick outputs
    outputs: Outputs,
}

impl EffectEngine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            controllers: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Register a renderable target, returning its id. The host maps the id
    /// to its own object; the core never creates or destroys the target.
    pub fn create_target(&mut self) -> TargetId {
        let id = self.ids.alloc_target();
        self.controllers.push(EffectController::new(id, &self.cfg));
        id
    }

    /// Tear down and forget a target's controller. Restores originals and
    /// destroys any live instances first.
    pub fn remove_target(&mut self, host: &mut dyn MaterialHost, target: TargetId) {
        if let Some(idx) = self.controllers.iter().position(|c| c.target() == target) {
            let mut ctrl = self.controllers.swap_remove(idx);
            ctrl.force_reset(host);
        }
    }

    pub fn controller(&self, target: TargetId) -> Option<&EffectController> {
        self.controllers.iter().find(|c| c.target() == target)
    }

    pub fn controller_mut(&mut self, target: TargetId) -> Option<&mut EffectController> {
        self.controllers.iter_mut().find(|c| c.target() == target)
    }

    /// Direct one-shot play with an optional completion callback. Command
    /// users get `EffectEvent::Completed` instead of a callback.
    pub fn play_once(
        &mut self,
        host: &mut dyn MaterialHost,
        target: TargetId,
        material: MaterialHandle,
        duration: f32,
        progress_property: Option<&str>,
        on_complete: Option<CompletionCallback>,
    ) {
        if let Some(ctrl) = self.controller_mut(target) {
            ctrl.play_once(host, material, duration, progress_property, on_complete);
        } else {
            log::warn!("play_once on unknown target {target:?}");
        }
    }

    pub fn play_loop(
        &mut self,
        host: &mut dyn MaterialHost,
        target: TargetId,
        material: MaterialHandle,
        duration: f32,
    ) {
        if let Some(ctrl) = self.controller_mut(target) {
            ctrl.play_loop(host, material, duration);
        } else {
            log::warn!("play_loop on unknown target {target:?}");
        }
    }

    pub fn stop(&mut self, host: &mut dyn MaterialHost, target: TargetId) {
        if let Some(ctrl) = self.controller_mut(target) {
            ctrl.stop(host);
        }
    }

    /// Apply queued commands (minimal per-target dispatch).
    fn apply_inputs(&mut self, host: &mut dyn MaterialHost, inputs: Inputs) {
        for cmd in inputs.commands {
            match cmd {
                EffectCommand::PlayOnce {
                    target,
                    material,
                    duration,
                    progress_property,
                } => {
                    self.play_once(
                        host,
                        target,
                        material,
                        duration,
                        progress_property.as_deref(),
                        None,
                    );
                }
                EffectCommand::PlayLoop {
                    target,
                    material,
                    duration,
                } => self.play_loop(host, target, material, duration),
                EffectCommand::Stop { target } => self.stop(host, target),
                EffectCommand::Pause { target } => {
                    if let Some(ctrl) = self.controller_mut(target) {
                        ctrl.pause();
                    }
                }
                EffectCommand::Resume { target } => {
                    if let Some(ctrl) = self.controller_mut(target) {
                        ctrl.resume();
                    }
                }
                EffectCommand::Seek { target, elapsed } => {
                    if let Some(ctrl) = self.controller_mut(target) {
                        ctrl.seek(host, elapsed);
                    }
                }
                EffectCommand::ForceReset { target } => {
                    if let Some(ctrl) = self.controller_mut(target) {
                        ctrl.force_reset(host);
                    }
                }
                EffectCommand::SetParam {
                    target,
                    property,
                    value,
                } => {
                    if let Some(ctrl) = self.controller_mut(target) {
                        ctrl.set_param(host, &property, &value);
                    }
                }
            }
        }
    }

    /// Step the simulation by dt with given inputs, producing outputs.
    /// Commands apply first, then every controller ticks once.
    pub fn update(&mut self, host: &mut dyn MaterialHost, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        // 1) Apply playback commands
        self.apply_inputs(host, inputs);

        // 2) Advance every controller
        for ctrl in &mut self.controllers {
            ctrl.tick(host, dt);
        }

        // 3) Fold controller events into this tick's outputs
        let cap = self.cfg.max_events_per_tick;
        for ctrl in &mut self.controllers {
            for ev in ctrl.drain_events() {
                self.outputs.push_event(ev, cap);
            }
        }

        &self.outputs
    }
}
