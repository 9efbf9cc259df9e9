#![allow(dead_code)]
//! Identifiers and simple allocators for core entities.
//!
//! `TargetId` is allocated by the engine; `MaterialHandle` and `TextureHandle`
//! are allocated by the host material system and are opaque to the core.

use serde::{Deserialize, Serialize};

/// Handle to a renderable surface (2D graphic or multi-material 3D renderer).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

/// Host-side handle to a material (original asset or effect instance).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MaterialHandle(pub u64);

/// Host-side handle to a texture.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u64);

/// Monotonic allocator for TargetId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_target: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_target(&mut self) -> TargetId {
        let id = TargetId(self.next_target);
        self.next_target = self.next_target.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Monotonic allocator hosts can use for material/texture handles.
#[derive(Default, Debug)]
pub struct HandleAllocator {
    next_material: u64,
    next_texture: u64,
}

impl HandleAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_material(&mut self) -> MaterialHandle {
        let id = MaterialHandle(self.next_material);
        self.next_material = self.next_material.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_texture(&mut self) -> TextureHandle {
        let id = TextureHandle(self.next_texture);
        self.next_texture = self.next_texture.wrapping_add(1);
        id
    }
}
