//! Ray types and the per-ray payloads the shading programs write into.
//!
//! A payload lives on the stack of the invocation that starts a trace, is
//! mutated in place by the hit/miss programs and read once the trace returns.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use glsl::{GlslEnum, GlslStruct};

use crate::{Bool32, rand};

/// Selects the hit group and the payload of a trace. The ordinals are the
/// ray-type index handed to the trace call, so they must stay in this order.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, GlslEnum)]
pub enum RayType {
    GeometryHit = 0,
    Shadow = 1,
    GroundTruth = 2,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a ray type (expected less than {})", RayType::COUNT)]
pub struct InvalidRayType(pub u32);

impl RayType {
    pub const COUNT: u32 = 3;

    pub const ALL: [Self; Self::COUNT as usize] =
        [Self::GeometryHit, Self::Shadow, Self::GroundTruth];

    pub const fn index(self) -> u32 {
        self as u32
    }

    pub const fn payload_size(self) -> usize {
        match self {
            Self::GeometryHit => core::mem::size_of::<GeometryHitPayload>(),
            Self::Shadow => core::mem::size_of::<ShadowPayload>(),
            Self::GroundTruth => core::mem::size_of::<GroundTruthPayload>(),
        }
    }
}

impl TryFrom<u32> for RayType {
    type Error = InvalidRayType;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidRayType(value))
    }
}

/// Payload carried by rays of a single [`RayType`].
pub trait RayPayload: Pod + Default {
    const RAY_TYPE: RayType;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, GlslStruct, Pod, Zeroable)]
pub struct DistanceSamplePayload {
    pub color: Vec3,
    /// Distance to the light, projected
    pub projected_distance: Vec2,
    pub d1: f32,
    pub d2_min: f32,
    pub d2_max: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, GlslStruct, Pod, Zeroable)]
pub struct GeometryHitPayload {
    pub color: Vec3,
    pub object_id: f32,
    pub geometry_hit: Vec3,
    pub geometry_normal: Vec3,
    /// Shading normal flipped towards the incoming ray.
    pub ffnormal: Vec3,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, GlslStruct, Pod, Zeroable)]
pub struct GroundTruthPayload {
    pub color: Vec3,
    pub seed: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, GlslStruct, Pod, Zeroable)]
pub struct ShadowPayload {
    pub hit: Bool32,
    pub hit_point: Vec3,
}

impl RayPayload for GeometryHitPayload {
    const RAY_TYPE: RayType = RayType::GeometryHit;
}

impl RayPayload for ShadowPayload {
    const RAY_TYPE: RayType = RayType::Shadow;
}

impl RayPayload for GroundTruthPayload {
    const RAY_TYPE: RayType = RayType::GroundTruth;
}

impl GroundTruthPayload {
    pub const fn new(seed: u32) -> Self {
        Self {
            color: Vec3::ZERO,
            seed,
        }
    }

    /// Seed decorrelated across pixels and frames.
    pub const fn for_pixel(pixel_index: u32, frame: u32) -> Self {
        Self::new(rand::tea(pixel_index, frame))
    }

    /// Generator continuing from `seed`. Write `Rng::state` back to keep
    /// later samples of the same path decorrelated.
    pub const fn rng(&self) -> rand::Rng {
        rand::Rng::from_seed(self.seed)
    }
}

impl ShadowPayload {
    pub const fn occluded(&self) -> bool {
        self.hit.get()
    }
}
