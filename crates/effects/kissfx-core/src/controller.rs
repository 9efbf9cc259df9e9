#![allow(dead_code)]
//! Per-target effect playback controller.
//!
//! Orchestrates the material registry and timer for a single target: material
//! instancing on play, per-tick progress writes, loop vs one-shot completion,
//! and restoration of the original materials on stop/teardown.

use std::fmt;

use crate::config::Config;
use crate::host::MaterialHost;
use crate::ids::{MaterialHandle, TargetId, TextureHandle};
use crate::outputs::EffectEvent;
use crate::params;
use crate::registry::MaterialRegistry;
use crate::timer::EffectTimer;
use crate::value::ParamValue;

/// Invoked exactly once when a one-shot playback stops.
pub type CompletionCallback = Box<dyn FnOnce() + Send + Sync + 'static>;

/// Playback state machine for one target.
///
/// Invariants: when not playing and not paused mid-cycle, no effect instances
/// exist and the target holds only original materials; progress is always
/// recomputed from elapsed/duration, never stored.
pub struct EffectController {
    target: TargetId,
    registry: MaterialRegistry,
    timer: EffectTimer,
    playing: bool,
    looping: bool,
    /// Default from Config; per-play overrides replace `active_property`.
    default_property: String,
    active_property: String,
    on_complete: Option<CompletionCallback>,
    events: Vec<EffectEvent>,
}

impl EffectController {
    pub fn new(target: TargetId, cfg: &Config) -> Self {
        Self {
            target,
            registry: MaterialRegistry::new(),
            timer: EffectTimer::default(),
            playing: false,
            looping: false,
            default_property: cfg.progress_property.clone(),
            active_property: cfg.progress_property.clone(),
            on_complete: None,
            events: Vec::new(),
        }
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    /// Play a one-shot effect: snapshot originals (first call only), stop any
    /// active playback, instance one effect material per slot, and start
    /// timing. Logs and no-ops when the target or material is unavailable.
    pub fn play_once(
        &mut self,
        host: &mut dyn MaterialHost,
        material: MaterialHandle,
        duration: f32,
        progress_property: Option<&str>,
        on_complete: Option<CompletionCallback>,
    ) {
        if !self.begin_playback(host, material, duration, progress_property) {
            return;
        }
        self.looping = false;
        self.on_complete = on_complete;
        self.events.push(EffectEvent::Started {
            target: self.target,
            looping: false,
        });
    }

    /// Play a looping effect. Clears any pending completion callback.
    pub fn play_loop(&mut self, host: &mut dyn MaterialHost, material: MaterialHandle, duration: f32) {
        if !self.begin_playback(host, material, duration, None) {
            return;
        }
        self.looping = true;
        self.on_complete = None;
        self.events.push(EffectEvent::Started {
            target: self.target,
            looping: true,
        });
    }

    /// Shared play path. Stops the previous playback (firing its callback)
    /// before installing anything for the new one.
    fn begin_playback(
        &mut self,
        host: &mut dyn MaterialHost,
        material: MaterialHandle,
        duration: f32,
        progress_property: Option<&str>,
    ) -> bool {
        if !self.registry.snapshot(host, self.target) {
            log::warn!("cannot play effect: target {:?} unavailable", self.target);
            return false;
        }
        // Instance the new material before stopping the active playback: a
        // bad material must leave the running effect untouched.
        let Some(instances) = self.registry.create_instances(host, material) else {
            log::warn!(
                "cannot play effect on target {:?}: material {material:?} unavailable",
                self.target
            );
            return false;
        };
        self.finish(host, false);
        self.registry.install(instances);
        self.registry.apply(host, self.target);
        self.active_property = progress_property
            .map(str::to_string)
            .unwrap_or_else(|| self.default_property.clone());
        self.timer = EffectTimer::new(duration);
        self.playing = true;
        true
    }

    /// Stop playback, restore originals, destroy instances, and (one-shot
    /// only) fire the completion callback exactly once. Idempotent.
    pub fn stop(&mut self, host: &mut dyn MaterialHost) {
        self.finish(host, false);
    }

    /// Pause without touching instances or the timer.
    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.events.push(EffectEvent::Paused {
                target: self.target,
            });
        }
    }

    /// Resume a paused playback. No-op when no effect instances exist.
    pub fn resume(&mut self) {
        if !self.playing && self.registry.has_instances() {
            self.playing = true;
            self.events.push(EffectEvent::Resumed {
                target: self.target,
            });
        }
    }

    /// Advance playback. Within one tick the progress write happens strictly
    /// before the loop-reset or stop transition, so one-shot playback is
    /// observed at progress 1 before teardown.
    pub fn tick(&mut self, host: &mut dyn MaterialHost, dt: f32) {
        if !self.playing {
            return;
        }
        // Degenerate duration is "already complete": one frame at progress 1,
        // then teardown, even when looping.
        if self.timer.duration <= 0.0 {
            self.push_progress(host);
            self.finish(host, true);
            return;
        }
        self.timer.advance(dt);
        self.push_progress(host);
        if self.timer.is_complete() {
            if self.looping {
                self.timer.reset();
                self.events.push(EffectEvent::Looped {
                    target: self.target,
                });
            } else {
                self.finish(host, true);
            }
        }
    }

    /// Set elapsed directly (editor scrubbing), bypassing tick transitions.
    /// Pushes the resulting progress even while paused so a preview renders.
    pub fn seek(&mut self, host: &mut dyn MaterialHost, elapsed: f32) {
        self.timer.seek(elapsed);
        if self.registry.has_instances() {
            self.push_progress(host);
        }
    }

    /// Unconditional teardown: restore originals, destroy instances, drop the
    /// snapshot and any pending callback without firing it. Host collaborators
    /// call this on disable/undo/preview-session end.
    pub fn force_reset(&mut self, host: &mut dyn MaterialHost) {
        self.playing = false;
        self.registry.restore(host, self.target);
        self.registry.clear(host);
        self.on_complete = None;
    }

    /// Write a named parameter to every instance declaring it. Applies only
    /// while playing; unknown properties are skipped silently.
    pub fn set_param(&mut self, host: &mut dyn MaterialHost, property: &str, value: &ParamValue) {
        if !self.playing {
            return;
        }
        params::push(host, self.registry.instances(), property, value);
    }

    pub fn set_float(&mut self, host: &mut dyn MaterialHost, property: &str, value: f32) {
        self.set_param(host, property, &ParamValue::Float(value));
    }

    pub fn set_color(&mut self, host: &mut dyn MaterialHost, property: &str, value: [f32; 4]) {
        self.set_param(host, property, &ParamValue::Color(value));
    }

    pub fn set_texture(&mut self, host: &mut dyn MaterialHost, property: &str, value: TextureHandle) {
        self.set_param(host, property, &ParamValue::Texture(value));
    }

    pub fn set_vector(&mut self, host: &mut dyn MaterialHost, property: &str, value: [f32; 4]) {
        self.set_param(host, property, &ParamValue::Vector(value));
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Normalized progress, 0 when idle.
    pub fn progress(&self) -> f32 {
        if self.playing {
            self.timer.progress()
        } else {
            0.0
        }
    }

    /// Seconds until completion, 0 when idle.
    pub fn remaining_time(&self) -> f32 {
        if self.playing {
            self.timer.remaining()
        } else {
            0.0
        }
    }

    pub fn duration(&self) -> f32 {
        self.timer.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.timer.elapsed
    }

    /// Drain events accumulated since the last call (the engine folds these
    /// into its per-tick Outputs).
    pub fn take_events(&mut self) -> Vec<EffectEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn drain_events(&mut self) -> std::vec::Drain<'_, EffectEvent> {
        self.events.drain(..)
    }

    /// Common stop path. Restore happens before instance cleanup so the
    /// target never holds a destroyed material.
    fn finish(&mut self, host: &mut dyn MaterialHost, completed: bool) {
        let was_active = self.playing || self.registry.has_instances();
        self.playing = false;
        self.registry.restore(host, self.target);
        self.registry.release(host);
        if !self.looping {
            if let Some(cb) = self.on_complete.take() {
                cb();
            }
        }
        if was_active {
            self.events.push(if completed {
                EffectEvent::Completed {
                    target: self.target,
                }
            } else {
                EffectEvent::Stopped {
                    target: self.target,
                }
            });
        }
    }

    fn push_progress(&mut self, host: &mut dyn MaterialHost) {
        params::push_progress(
            host,
            self.registry.instances(),
            &self.active_property,
            self.timer.progress(),
        );
    }
}

impl fmt::Debug for EffectController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectController")
            .field("target", &self.target)
            .field("playing", &self.playing)
            .field("looping", &self.looping)
            .field("timer", &self.timer)
            .field("active_property", &self.active_property)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}
