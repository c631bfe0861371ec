//! Scalar block layout (`GL_EXT_scalar_block_layout`): every member is aligned
//! to its component size and structs to their most aligned member.

use super::GlslField;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("{ty}.{field}: host offset {host} but GLSL offset {glsl}")]
    FieldOffset {
        ty: &'static str,
        field: &'static str,
        host: usize,
        glsl: usize,
    },
    #[error("{ty}.{field}: host size {host} but GLSL size {glsl}")]
    FieldSize {
        ty: &'static str,
        field: &'static str,
        host: usize,
        glsl: usize,
    },
    #[error("{ty}: host size {host} but GLSL size {glsl}")]
    StructSize {
        ty: &'static str,
        host: usize,
        glsl: usize,
    },
}

pub const fn align_to(value: usize, alignment: usize) -> usize {
    (value + alignment - 1) & !(alignment - 1)
}

pub const fn scalar_align(fields: &[GlslField]) -> usize {
    let mut align = 1;
    let mut i = 0;
    while i < fields.len() {
        if fields[i].align > align {
            align = fields[i].align;
        }
        i += 1;
    }
    align
}

pub const fn scalar_size(fields: &[GlslField]) -> usize {
    let mut end = 0;
    let mut i = 0;
    while i < fields.len() {
        end = align_to(end, fields[i].align) + fields[i].size;
        i += 1;
    }
    align_to(end, scalar_align(fields))
}

pub fn scalar_offsets(fields: &[GlslField]) -> Vec<usize> {
    let mut end = 0;
    fields
        .iter()
        .map(|field| {
            let offset = align_to(end, field.align);
            end = offset + field.size;
            offset
        })
        .collect()
}

/// Checks that the host declaration matches, field by field, what the GLSL
/// side computes for the generated definition.
pub fn verify(
    ty: &'static str,
    fields: &[GlslField],
    host_size: usize,
) -> Result<(), LayoutError> {
    for (field, glsl) in fields.iter().zip(scalar_offsets(fields)) {
        if field.host_offset != glsl {
            return Err(LayoutError::FieldOffset {
                ty,
                field: field.name,
                host: field.host_offset,
                glsl,
            });
        }
        if field.host_size != field.size {
            return Err(LayoutError::FieldSize {
                ty,
                field: field.name,
                host: field.host_size,
                glsl: field.size,
            });
        }
    }

    let glsl = scalar_size(fields);
    if host_size != glsl {
        return Err(LayoutError::StructSize {
            ty,
            host: host_size,
            glsl,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Glsl, GlslStruct, LayoutError};

    #[repr(C, packed)]
    #[allow(dead_code)]
    #[derive(GlslStruct)]
    struct Packed {
        index: u32,
        address: u64,
    }

    #[repr(C)]
    #[allow(dead_code)]
    #[derive(GlslStruct)]
    struct Tail {
        address: u64,
        index: u32,
    }

    #[repr(C)]
    #[allow(dead_code)]
    #[derive(GlslStruct)]
    struct Nested {
        flag: u32,
        tail: Tail,
    }

    #[repr(C, align(16))]
    #[allow(dead_code)]
    #[derive(GlslStruct)]
    struct OverAligned {
        a: glam::Vec3,
        b: u32,
        c: u32,
    }

    // Claims to be a vec3 but occupies a full vec4 on the host.
    #[allow(dead_code)]
    struct PaddedVec3([f32; 4]);

    impl Glsl for PaddedVec3 {
        const NAME: &'static str = "vec3";
        const SIZE: usize = 12;
        const ALIGN: usize = 4;
    }

    #[repr(C)]
    #[allow(dead_code)]
    #[derive(GlslStruct)]
    struct Widened {
        weight: f32,
        direction: PaddedVec3,
    }

    #[test]
    fn align_to_rounds_up_to_power_of_two() {
        assert_eq!(super::align_to(0, 4), 0);
        assert_eq!(super::align_to(13, 4), 16);
        assert_eq!(super::align_to(16, 8), 16);
    }

    #[test]
    fn packed_host_struct_is_rejected() {
        assert_eq!(
            Packed::verify_layout(),
            Err(LayoutError::FieldOffset {
                ty: "Packed",
                field: "address",
                host: 4,
                glsl: 8,
            })
        );
    }

    #[test]
    fn over_aligned_host_struct_is_rejected() {
        assert_eq!(OverAligned::scalar_layout(), vec![0, 12, 16]);
        assert_eq!(
            OverAligned::verify_layout(),
            Err(LayoutError::StructSize {
                ty: "OverAligned",
                host: 32,
                glsl: 20,
            })
        );
    }

    #[test]
    fn field_wider_than_its_glsl_type_is_rejected() {
        assert_eq!(
            Widened::verify_layout(),
            Err(LayoutError::FieldSize {
                ty: "Widened",
                field: "direction",
                host: 16,
                glsl: 12,
            })
        );
    }

    #[test]
    fn struct_size_is_rounded_to_widest_member() {
        assert_eq!(Tail::scalar_layout(), vec![0, 8]);
        assert!(Tail::verify_layout().is_ok());
        assert_eq!(Nested::scalar_layout(), vec![0, 8]);
        assert!(Nested::verify_layout().is_ok());
    }

    #[test]
    fn error_message_names_the_field() {
        let err = Packed::verify_layout().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Packed.address: host offset 4 but GLSL offset 8"
        );
    }
}
