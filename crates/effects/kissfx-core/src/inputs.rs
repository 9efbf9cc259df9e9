#![allow(dead_code)]
//! Input contracts for the core engine.
//!
//! Per-target playback commands applied before stepping. Adapters build and
//! pass these into `EffectEngine::update()` each tick. Commands carry no
//! completion callbacks; command users observe `EffectEvent::Completed`
//! instead (the direct controller API accepts a callback).

use serde::{Deserialize, Serialize};

use crate::ids::{MaterialHandle, TargetId};
use crate::value::ParamValue;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Playback commands applied before stepping.
    #[serde(default)]
    pub commands: Vec<EffectCommand>,
}

impl Inputs {
    #[inline]
    pub fn push(&mut self, cmd: EffectCommand) {
        self.commands.push(cmd);
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum EffectCommand {
    PlayOnce {
        target: TargetId,
        material: MaterialHandle,
        duration: f32,
        /// Overrides `Config::progress_property` for this playback.
        #[serde(default)]
        progress_property: Option<String>,
    },
    PlayLoop {
        target: TargetId,
        material: MaterialHandle,
        duration: f32,
    },
    Stop {
        target: TargetId,
    },
    Pause {
        target: TargetId,
    },
    Resume {
        target: TargetId,
    },
    /// Set elapsed directly (editor scrubbing), bypassing tick.
    Seek {
        target: TargetId,
        elapsed: f32,
    },
    /// Restore originals and destroy all instances unconditionally.
    ForceReset {
        target: TargetId,
    },
    SetParam {
        target: TargetId,
        property: String,
        value: ParamValue,
    },
}
