pub mod lights;
pub mod rand;
pub mod ray;
mod sync;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use glsl::{Glsl, GlslEnum, GlslStruct, Header};

pub use glam;
pub use sync::sync_headers;

/// A boolean that is 4 bytes wide on both sides of the boundary. Zero is
/// false, anything else is true.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Pod, Zeroable)]
#[serde(from = "bool", into = "bool")]
pub struct Bool32(pub u32);

impl Bool32 {
    pub const FALSE: Self = Self(0);
    pub const TRUE: Self = Self(1);

    pub const fn get(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool32 {
    fn from(value: bool) -> Self {
        Self(u32::from(value))
    }
}

impl From<Bool32> for bool {
    fn from(value: Bool32) -> Self {
        value.get()
    }
}

impl Glsl for Bool32 {
    const NAME: &'static str = "bool";
    const SIZE: usize = 4;
    const ALIGN: usize = 4;
}

/// Every include file the shaders are built against.
pub fn glsl_headers() -> [Header; 2] {
    [
        Header::new(
            "lights",
            vec![
                lights::PointLight::glsl_struct_definition(),
                lights::ParallelogramLight::glsl_struct_definition(),
            ],
        ),
        Header::new(
            "ray",
            vec![
                ray::RayType::glsl_enum_definition(),
                ray::DistanceSamplePayload::glsl_struct_definition(),
                ray::GeometryHitPayload::glsl_struct_definition(),
                ray::GroundTruthPayload::glsl_struct_definition(),
                ray::ShadowPayload::glsl_struct_definition(),
            ],
        ),
    ]
}

/// Fails on the first record whose host layout disagrees with its GLSL definition.
pub fn verify_layouts() -> Result<(), glsl::LayoutError> {
    lights::PointLight::verify_layout()?;
    lights::ParallelogramLight::verify_layout()?;
    ray::DistanceSamplePayload::verify_layout()?;
    ray::GeometryHitPayload::verify_layout()?;
    ray::GroundTruthPayload::verify_layout()?;
    ray::ShadowPayload::verify_layout()?;
    Ok(())
}
