#![allow(dead_code)]
//! Shader parameter kinds and typed values pushed to effect material instances.

use serde::{Deserialize, Serialize};

use crate::ids::TextureHandle;

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParamKind {
    Float,
    Color,
    Texture,
    Vector,
}

/// A value written to a named shader property on an effect material instance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum ParamValue {
    Float(f32),
    /// RGBA color
    Color([f32; 4]),
    /// Host texture handle
    Texture(TextureHandle),
    /// 4-component vector
    Vector([f32; 4]),
}

impl ParamValue {
    #[inline]
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Float(_) => ParamKind::Float,
            ParamValue::Color(_) => ParamKind::Color,
            ParamValue::Texture(_) => ParamKind::Texture,
            ParamValue::Vector(_) => ParamKind::Vector,
        }
    }
}
