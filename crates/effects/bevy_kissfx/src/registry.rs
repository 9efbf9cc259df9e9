// Property-writer registry: maps shader property names onto StandardMaterial
// fields. kissfx-core addresses properties by string name; this registry is
// the adapter's answer to "does this material declare _Foo, and how is it
// written". Applications register additional setters for their own materials.

use std::sync::{Arc, Mutex};

use bevy::prelude::*;

use kissfx_core::ParamValue;

use crate::resources::HandleTable;

pub type PropertySetter =
    dyn Fn(&mut StandardMaterial, &ParamValue, &HandleTable) + Send + Sync + 'static;

/// Registry of property setters keyed by shader property name.
/// Uses an Arc<Mutex<...>> so callers can register setters and look them up
/// at runtime without requiring the boxed setter to be Clone.
#[derive(Resource, Clone, Default)]
pub struct MaterialPropertyRegistry {
    inner: Arc<Mutex<hashbrown::HashMap<String, Arc<PropertySetter>>>>,
}

impl MaterialPropertyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the default property bindings.
    pub fn with_defaults() -> Self {
        let reg = Self::new();
        reg.register_defaults();
        reg
    }

    /// Register a setter for a property name. An existing setter for that
    /// name is overwritten.
    pub fn register<F>(&self, property: impl Into<String>, f: F)
    where
        F: Fn(&mut StandardMaterial, &ParamValue, &HandleTable) + Send + Sync + 'static,
    {
        let mut guard = self.inner.lock().unwrap();
        guard.insert(property.into(), Arc::new(f));
    }

    /// Setter for a property name, if registered.
    pub fn get(&self, property: &str) -> Option<Arc<PropertySetter>> {
        let guard = self.inner.lock().unwrap();
        guard.get(property).cloned()
    }

    /// Whether a property name is registered. Unregistered names are what the
    /// core sees as "property not declared": writes to them are skipped.
    pub fn contains(&self, property: &str) -> bool {
        let guard = self.inner.lock().unwrap();
        guard.contains_key(property)
    }

    /// Default bindings: progress drives base-color alpha, plus the common
    /// color/texture slots.
    pub fn register_defaults(&self) {
        self.register(
            kissfx_core::DEFAULT_PROGRESS_PROPERTY,
            |mat, val, _table| {
                if let ParamValue::Float(f) = val {
                    mat.base_color.set_alpha(f.clamp(0.0, 1.0));
                }
            },
        );
        self.register("_BaseColor", |mat, val, _table| {
            if let ParamValue::Color(c) = val {
                mat.base_color = Color::srgba(c[0], c[1], c[2], c[3]);
            }
        });
        self.register("_EmissiveColor", |mat, val, _table| {
            if let ParamValue::Color(c) = val {
                mat.emissive = Color::srgba(c[0], c[1], c[2], c[3]).into();
            }
        });
        self.register("_MainTex", |mat, val, table| {
            if let ParamValue::Texture(tex) = val {
                mat.base_color_texture = table.texture(*tex);
            }
        });
    }
}
