//! Shared fixtures for kissfx tests: an in-memory [`MaterialHost`] with
//! inspectable material state. Destruction is immediate (the authoring-time
//! strategy); destroyed handles are journaled for assertions.

use std::collections::HashMap;

use kissfx_core::{HandleAllocator, MaterialHandle, MaterialHost, ParamValue, TargetId};

/// A material as the fixture host sees it: a property table plus whether it
/// was created by `duplicate` (effect instance) or seeded (original asset).
#[derive(Clone, Debug, Default)]
pub struct MemoryMaterial {
    pub properties: HashMap<String, ParamValue>,
    pub is_instance: bool,
}

/// In-memory host: materials are property tables, targets are slot vectors.
#[derive(Debug, Default)]
pub struct MemoryHost {
    alloc: HandleAllocator,
    materials: HashMap<MaterialHandle, MemoryMaterial>,
    targets: HashMap<TargetId, Vec<MaterialHandle>>,
    destroyed: Vec<MaterialHandle>,
    graveyard: HashMap<MaterialHandle, MemoryMaterial>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a material asset declaring the given properties.
    pub fn add_material(&mut self, properties: &[(&str, ParamValue)]) -> MaterialHandle {
        let handle = self.alloc.alloc_material();
        let props = properties
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        self.materials.insert(
            handle,
            MemoryMaterial {
                properties: props,
                is_instance: false,
            },
        );
        handle
    }

    /// Register a target with the given slot materials.
    pub fn add_target(&mut self, target: TargetId, slots: Vec<MaterialHandle>) {
        self.targets.insert(target, slots);
    }

    /// Forget a target (for "target unavailable" scenarios).
    pub fn remove_target(&mut self, target: TargetId) {
        self.targets.remove(&target);
    }

    pub fn property(&self, material: MaterialHandle, name: &str) -> Option<&ParamValue> {
        self.materials.get(&material)?.properties.get(name)
    }

    pub fn float_property(&self, material: MaterialHandle, name: &str) -> Option<f32> {
        match self.property(material, name) {
            Some(ParamValue::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Handles destroyed so far, in destruction order.
    pub fn destroyed(&self) -> &[MaterialHandle] {
        &self.destroyed
    }

    /// Final property value of a destroyed material (the state it was torn
    /// down with).
    pub fn destroyed_property(&self, material: MaterialHandle, name: &str) -> Option<&ParamValue> {
        self.graveyard.get(&material)?.properties.get(name)
    }

    /// Effect instances currently alive.
    pub fn live_instances(&self) -> Vec<MaterialHandle> {
        let mut out: Vec<MaterialHandle> = self
            .materials
            .iter()
            .filter(|(_, m)| m.is_instance)
            .map(|(h, _)| *h)
            .collect();
        out.sort_by_key(|h| h.0);
        out
    }

    pub fn slots(&self, target: TargetId) -> Option<&[MaterialHandle]> {
        self.targets.get(&target).map(Vec::as_slice)
    }
}

impl MaterialHost for MemoryHost {
    fn duplicate(&mut self, source: MaterialHandle) -> Option<MaterialHandle> {
        let props = self.materials.get(&source)?.properties.clone();
        let handle = self.alloc.alloc_material();
        self.materials.insert(
            handle,
            MemoryMaterial {
                properties: props,
                is_instance: true,
            },
        );
        Some(handle)
    }

    fn destroy(&mut self, instance: MaterialHandle) {
        if let Some(mat) = self.materials.remove(&instance) {
            self.graveyard.insert(instance, mat);
        }
        self.destroyed.push(instance);
    }

    fn slot_materials(&self, target: TargetId) -> Option<Vec<MaterialHandle>> {
        self.targets.get(&target).cloned()
    }

    fn set_slot_materials(&mut self, target: TargetId, materials: &[MaterialHandle]) -> bool {
        match self.targets.get_mut(&target) {
            Some(slots) => {
                *slots = materials.to_vec();
                true
            }
            None => false,
        }
    }

    fn has_property(&self, material: MaterialHandle, property: &str) -> bool {
        self.materials
            .get(&material)
            .is_some_and(|m| m.properties.contains_key(property))
    }

    fn set_property(&mut self, material: MaterialHandle, property: &str, value: &ParamValue) {
        // Mirrors shader semantics: writes to undeclared properties are
        // dropped, so the has_property guard is observable in tests.
        if let Some(mat) = self.materials.get_mut(&material) {
            if let Some(slot) = mat.properties.get_mut(property) {
                *slot = value.clone();
            }
        }
    }
}

/// A one-target fixture: `slot_count` originals assigned to `TargetId(0)` and
/// an effect source declaring `_Progress01` and `_Intensity`.
pub fn seeded_host(slot_count: usize) -> (MemoryHost, TargetId, Vec<MaterialHandle>, MaterialHandle) {
    let mut host = MemoryHost::new();
    let originals: Vec<MaterialHandle> = (0..slot_count)
        .map(|_| host.add_material(&[("_BaseColor", ParamValue::Color([1.0, 1.0, 1.0, 1.0]))]))
        .collect();
    let target = TargetId(0);
    host.add_target(target, originals.clone());
    let effect = host.add_material(&[
        ("_Progress01", ParamValue::Float(0.0)),
        ("_Intensity", ParamValue::Float(1.0)),
    ]);
    (host, target, originals, effect)
}
