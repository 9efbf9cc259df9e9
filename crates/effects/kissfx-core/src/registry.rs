#![allow(dead_code)]
//! Material registry: original-material snapshot and effect-instance ownership.
//!
//! Originals are borrowed from the target (snapshot keeps handles only);
//! effect instances are owned here for exactly one playback cycle.

use crate::host::MaterialHost;
use crate::ids::{MaterialHandle, TargetId};

/// Per-target bookkeeping of original slot materials and live effect
/// instances. Snapshot is first-call-wins: repeated snapshots while originals
/// are already stored are no-ops, so the true originals survive back-to-back
/// play calls.
#[derive(Clone, Debug, Default)]
pub struct MaterialRegistry {
    originals: Option<Vec<MaterialHandle>>,
    instances: Vec<MaterialHandle>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the target's current slot materials unless already captured.
    /// Returns false when the target is unavailable.
    pub fn snapshot(&mut self, host: &dyn MaterialHost, target: TargetId) -> bool {
        if self.originals.is_some() {
            return true;
        }
        match host.slot_materials(target) {
            Some(slots) => {
                self.originals = Some(slots);
                true
            }
            None => false,
        }
    }

    /// Number of slots captured by the snapshot, 0 before any snapshot.
    pub fn slot_count(&self) -> usize {
        self.originals.as_ref().map_or(0, |o| o.len())
    }

    pub fn originals(&self) -> Option<&[MaterialHandle]> {
        self.originals.as_deref()
    }

    pub fn instances(&self) -> &[MaterialHandle] {
        &self.instances
    }

    pub fn has_instances(&self) -> bool {
        !self.instances.is_empty()
    }

    /// Duplicate `source` once per snapshot slot without retaining anything.
    /// On any duplication failure the created instances are destroyed and
    /// `None` is returned, so a bad material never disturbs live state.
    pub fn create_instances(
        &self,
        host: &mut dyn MaterialHost,
        source: MaterialHandle,
    ) -> Option<Vec<MaterialHandle>> {
        let count = self.slot_count();
        if count == 0 {
            return None;
        }
        let mut created = Vec::with_capacity(count);
        for _ in 0..count {
            match host.duplicate(source) {
                Some(inst) => created.push(inst),
                None => {
                    for inst in created {
                        host.destroy(inst);
                    }
                    log::warn!("effect material {source:?} could not be instanced");
                    return None;
                }
            }
        }
        Some(created)
    }

    /// Take ownership of instances created by [`create_instances`]. Any
    /// previously held instances must have been released first.
    ///
    /// [`create_instances`]: MaterialRegistry::create_instances
    pub fn install(&mut self, instances: Vec<MaterialHandle>) {
        self.instances = instances;
    }

    /// Assign the live instance set to all of the target's slots.
    pub fn apply(&self, host: &mut dyn MaterialHost, target: TargetId) -> bool {
        if self.instances.is_empty() {
            return false;
        }
        host.set_slot_materials(target, &self.instances)
    }

    /// Reassign the snapshot originals to the target's slots. No-op without a
    /// snapshot; safe to call repeatedly.
    pub fn restore(&self, host: &mut dyn MaterialHost, target: TargetId) {
        if let Some(originals) = &self.originals {
            if !host.set_slot_materials(target, originals) {
                log::debug!("target {target:?} unavailable during restore");
            }
        }
    }

    /// Destroy all live instances. Safe to call when empty.
    pub fn release(&mut self, host: &mut dyn MaterialHost) {
        for inst in self.instances.drain(..) {
            host.destroy(inst);
        }
    }

    /// Drop the snapshot as well as the instances (controller teardown).
    pub fn clear(&mut self, host: &mut dyn MaterialHost) {
        self.release(host);
        self.originals = None;
    }
}
