#![allow(dead_code)]
//! Host material-system capability trait.
//!
//! The core never touches real materials: it asks the host to duplicate,
//! destroy, and reassign them through opaque handles. Adapters (Bevy, the
//! in-memory fixture host) implement this and pass it into controller/engine
//! calls as `&mut dyn MaterialHost`.

use crate::ids::{MaterialHandle, TargetId};
use crate::value::ParamValue;

/// Capabilities the core requires from the host material system.
///
/// Whether `destroy` tears the instance down immediately or defers it to a
/// safe point in the host's frame is the host's construction-time choice; the
/// core only guarantees it never uses an instance after calling `destroy`.
pub trait MaterialHost {
    /// Duplicate `source` into a new independent writable instance.
    /// Returns `None` when `source` is not a known material.
    fn duplicate(&mut self, source: MaterialHandle) -> Option<MaterialHandle>;

    /// Destroy an instance previously returned by [`MaterialHost::duplicate`].
    fn destroy(&mut self, instance: MaterialHandle);

    /// Materials currently assigned to the target's slots, in slot order.
    /// Returns `None` when the target is unavailable.
    fn slot_materials(&self, target: TargetId) -> Option<Vec<MaterialHandle>>;

    /// Assign `materials` to the target's slots, in slot order.
    /// Returns false when the target is unavailable.
    fn set_slot_materials(&mut self, target: TargetId, materials: &[MaterialHandle]) -> bool;

    /// Whether `material` declares the named shader property.
    fn has_property(&self, material: MaterialHandle, property: &str) -> bool;

    /// Write a value to a named shader property. Callers guard with
    /// [`MaterialHost::has_property`]; unknown properties must not error.
    fn set_property(&mut self, material: MaterialHandle, property: &str, value: &ParamValue);
}
