#![allow(dead_code)]
//! Parameter pusher: guarded named-property writes across effect instances.

use crate::host::MaterialHost;
use crate::ids::MaterialHandle;
use crate::value::ParamValue;

/// Write `value` to `property` on every instance that declares it. Instances
/// lacking the property are skipped silently; different effect materials may
/// not declare the same property set.
pub fn push(
    host: &mut dyn MaterialHost,
    instances: &[MaterialHandle],
    property: &str,
    value: &ParamValue,
) {
    for &inst in instances {
        if host.has_property(inst, property) {
            host.set_property(inst, property, value);
        }
    }
}

/// Convenience for the per-tick progress write.
pub fn push_progress(
    host: &mut dyn MaterialHost,
    instances: &[MaterialHandle],
    property: &str,
    progress: f32,
) {
    push(host, instances, property, &ParamValue::Float(progress));
}
