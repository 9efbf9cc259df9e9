#![allow(dead_code)]
//! Output contracts from the core engine.
//!
//! Parameter writes go straight to the host during stepping; Outputs carries
//! only the semantic playback events for this tick. Adapters (Bevy, tooling)
//! transport them.

use serde::{Deserialize, Serialize};

use crate::ids::TargetId;

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum EffectEvent {
    /// Playback began on a target (one-shot or loop).
    Started { target: TargetId, looping: bool },
    /// Playback was stopped externally before completing.
    Stopped { target: TargetId },
    /// A one-shot playback reached progress 1 and tore down.
    Completed { target: TargetId },
    /// A looping playback wrapped elapsed back to 0.
    Looped { target: TargetId },
    Paused { target: TargetId },
    Resumed { target: TargetId },
    /// Catch-all for forward-compatible payloads.
    Custom {
        kind: String,
        data: serde_json::Value,
    },
}

/// Outputs returned by `EffectEngine::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<EffectEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Push an event, dropping it once the per-tick cap is reached.
    #[inline]
    pub fn push_event(&mut self, event: EffectEvent, cap: usize) {
        if self.events.len() < cap {
            self.events.push(event);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
