use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use glsl::GlslStruct;

use crate::Bool32;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, GlslStruct, Pod, Zeroable)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub casts_shadow: Bool32,
    #[serde(skip)]
    pub _pad0: u32,
}

/// Planar quad spanned by `v1` and `v2` from `corner`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize, GlslStruct, Pod, Zeroable)]
pub struct ParallelogramLight {
    pub corner: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub normal: Vec3,
    pub emission: Vec3,
}

impl PointLight {
    pub fn new(position: Vec3, color: Vec3, casts_shadow: bool) -> Self {
        Self {
            position,
            color,
            casts_shadow: casts_shadow.into(),
            _pad0: 0,
        }
    }
}

// Padding is not part of the light.
impl PartialEq for PointLight {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.color == other.color
            && self.casts_shadow.get() == other.casts_shadow.get()
    }
}

impl ParallelogramLight {
    const NORMAL_TOLERANCE: f32 = 1e-4;

    pub fn new(corner: Vec3, v1: Vec3, v2: Vec3, emission: Vec3) -> Self {
        Self {
            corner,
            v1,
            v2,
            normal: v1.cross(v2).normalize_or_zero(),
            emission,
        }
    }

    /// True when `normal` is a unit vector facing the same way as `v1 x v2`.
    pub fn has_consistent_normal(&self) -> bool {
        let expected = self.v1.cross(self.v2).normalize_or_zero();
        expected != Vec3::ZERO
            && (self.normal.length() - 1.0).abs() <= Self::NORMAL_TOLERANCE
            && self.normal.dot(expected) >= 1.0 - Self::NORMAL_TOLERANCE
    }

    pub fn area(&self) -> f32 {
        self.v1.cross(self.v2).length()
    }

    /// Maps `(u, v)` in the unit square onto the light's surface.
    pub fn point_at(&self, u: f32, v: f32) -> Vec3 {
        self.corner + u * self.v1 + v * self.v2
    }
}
