extern crate self as glsl;

mod header;
pub mod layout;

pub use glsl_derive::{GlslEnum, GlslStruct};
pub use header::Header;
pub use layout::LayoutError;

/// A type with a GLSL counterpart. `SIZE` and `ALIGN` follow the scalar block
/// layout (`GL_EXT_scalar_block_layout`), which is what buffers and payloads
/// shared with the host are declared with.
pub trait Glsl {
    const NAME: &'static str;
    const SIZE: usize;
    const ALIGN: usize;
}

pub struct GlslField {
    pub name: &'static str,
    pub ty: &'static str,
    pub size: usize,
    pub align: usize,
    pub host_offset: usize,
    pub host_size: usize,
}

pub trait GlslStruct: Glsl + Sized {
    const FIELDS: &'static [GlslField];

    fn glsl_struct_definition() -> String {
        let mut def = String::from("struct ");
        def.push_str(Self::NAME);
        def.push_str(" {\n");
        for field in Self::FIELDS {
            def.push_str("  ");
            def.push_str(field.ty);
            def.push(' ');
            def.push_str(field.name);
            def.push_str(";\n");
        }
        def.push_str("};\n");
        def
    }

    /// Field offsets as the GLSL side lays them out.
    fn scalar_layout() -> Vec<usize> {
        layout::scalar_offsets(Self::FIELDS)
    }

    fn verify_layout() -> Result<(), LayoutError> {
        layout::verify(Self::NAME, Self::FIELDS, core::mem::size_of::<Self>())
    }
}

pub struct GlslVariant {
    pub name: &'static str,
    pub value: u32,
}

pub trait GlslEnum: Glsl {
    const PREFIX: &'static str;
    const VARIANTS: &'static [GlslVariant];

    fn glsl_enum_definition() -> String {
        let mut def = String::new();
        for variant in Self::VARIANTS {
            push_constant(&mut def, Self::PREFIX, variant.name, variant.value);
        }
        push_constant(&mut def, Self::PREFIX, "COUNT", Self::VARIANTS.len() as u32);
        def
    }
}

fn push_constant(def: &mut String, prefix: &str, name: &str, value: u32) {
    def.push_str("const uint ");
    def.push_str(prefix);
    def.push('_');
    def.push_str(name);
    def.push_str(" = ");
    def.push_str(&value.to_string());
    def.push_str("u;\n");
}

macro_rules! impl_glsl {
    ($type:ty => $name:expr, $size:expr, $align:expr) => {
        impl Glsl for $type {
            const NAME: &'static str = $name;
            const SIZE: usize = $size;
            const ALIGN: usize = $align;
        }
    };
}

impl_glsl!(f32 => "float", 4, 4);
impl_glsl!(f64 => "double", 8, 8);
impl_glsl!(i32 => "int", 4, 4);
impl_glsl!(u32 => "uint", 4, 4);
impl_glsl!(i64 => "int64_t", 8, 8);
impl_glsl!(u64 => "uint64_t", 8, 8);

impl_glsl!(glam::Vec2 => "vec2", 8, 4);
impl_glsl!(glam::Vec3 => "vec3", 12, 4);
impl_glsl!(glam::Vec4 => "vec4", 16, 4);

impl_glsl!(glam::Mat4 => "mat4", 64, 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C)]
    #[allow(dead_code)]
    #[derive(GlslStruct)]
    struct Sample {
        color: glam::Vec3,
        weight: f32,
        uv: glam::Vec2,
    }

    #[repr(u32)]
    #[allow(dead_code)]
    #[derive(Clone, Copy, GlslEnum)]
    enum PassKind {
        Raster,
        PathTrace,
        Tonemap,
    }

    #[test]
    fn struct_definition_lists_fields_in_order() {
        assert_eq!(
            Sample::glsl_struct_definition(),
            "struct Sample {\n  vec3 color;\n  float weight;\n  vec2 uv;\n};\n"
        );
    }

    #[test]
    fn derived_struct_reports_scalar_size_and_alignment() {
        assert_eq!(<Sample as Glsl>::NAME, "Sample");
        assert_eq!(<Sample as Glsl>::SIZE, 24);
        assert_eq!(<Sample as Glsl>::ALIGN, 4);
        assert_eq!(Sample::scalar_layout(), vec![0, 12, 16]);
        assert!(Sample::verify_layout().is_ok());
    }

    #[test]
    fn fields_carry_host_offsets() {
        let offsets: Vec<_> = Sample::FIELDS.iter().map(|f| f.host_offset).collect();
        assert_eq!(offsets, vec![0, 12, 16]);
    }

    #[test]
    fn enum_definition_ends_with_count() {
        assert_eq!(
            PassKind::glsl_enum_definition(),
            "const uint PASS_KIND_RASTER = 0u;\n\
             const uint PASS_KIND_PATH_TRACE = 1u;\n\
             const uint PASS_KIND_TONEMAP = 2u;\n\
             const uint PASS_KIND_COUNT = 3u;\n"
        );
        assert_eq!(<PassKind as Glsl>::NAME, "uint");
    }
}
