#![allow(dead_code)]
//! Core configuration for kissfx-core.

use serde::{Deserialize, Serialize};

/// Canonical default shader property driven with normalized progress each tick.
/// The 3D component of the original plugin used a second spelling
/// (`_OnProgress01`) for its convenience entry point; callers that need it can
/// pass a per-play override instead.
pub const DEFAULT_PROGRESS_PROPERTY: &str = "_Progress01";

/// Configuration for engine defaults and output limits.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Shader property that receives normalized progress unless a play call
    /// overrides it.
    pub progress_property: String,

    /// Maximum events to retain per tick before backpressure policy applies.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            progress_property: DEFAULT_PROGRESS_PROPERTY.to_string(),
            max_events_per_tick: 256,
        }
    }
}
