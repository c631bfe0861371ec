use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DataStruct, DeriveInput, Fields, parse_macro_input};

#[proc_macro_derive(GlslStruct)]
pub fn derive_macro_glsl_struct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(DataStruct {
        fields: Fields::Named(fields),
        ..
    }) = &input.data
    else {
        return syn::Error::new_spanned(name, "GlslStruct requires a struct with named fields")
            .to_compile_error()
            .into();
    };

    let fields = fields.named.iter().filter_map(|field| {
        let field_ident = field.ident.as_ref()?;
        let field_name_str = field_ident.to_string();
        let field_type = &field.ty;

        Some(quote! {
            ::glsl::GlslField {
                name: #field_name_str,
                ty: <#field_type as ::glsl::Glsl>::NAME,
                size: <#field_type as ::glsl::Glsl>::SIZE,
                align: <#field_type as ::glsl::Glsl>::ALIGN,
                host_offset: ::core::mem::offset_of!(#name #ty_generics, #field_ident),
                host_size: ::core::mem::size_of::<#field_type>(),
            }
        })
    });

    quote! {
        impl #impl_generics ::glsl::Glsl for #name #ty_generics #where_clause {
            const NAME: &'static str = #name_str;
            const SIZE: usize =
                ::glsl::layout::scalar_size(<Self as ::glsl::GlslStruct>::FIELDS);
            const ALIGN: usize =
                ::glsl::layout::scalar_align(<Self as ::glsl::GlslStruct>::FIELDS);
        }

        impl #impl_generics ::glsl::GlslStruct for #name #ty_generics #where_clause {
            const FIELDS: &'static [::glsl::GlslField] = &[
                #( #fields, )*
            ];
        }
    }
    .into()
}

#[proc_macro_derive(GlslEnum)]
pub fn derive_macro_glsl_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let prefix = screaming_snake_case(&name.to_string());

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(name, "GlslEnum requires an enum")
            .to_compile_error()
            .into();
    };

    if !has_repr_u32(&input.attrs) {
        return syn::Error::new_spanned(name, "GlslEnum requires #[repr(u32)]")
            .to_compile_error()
            .into();
    }

    if let Some(variant) = variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        return syn::Error::new_spanned(variant, "GlslEnum variants cannot carry data")
            .to_compile_error()
            .into();
    }

    let variants = variants.iter().map(|variant| {
        let ident = &variant.ident;
        let variant_name_str = screaming_snake_case(&ident.to_string());
        quote! {
            ::glsl::GlslVariant {
                name: #variant_name_str,
                value: #name::#ident as u32,
            }
        }
    });

    quote! {
        impl ::glsl::Glsl for #name {
            const NAME: &'static str = "uint";
            const SIZE: usize = 4;
            const ALIGN: usize = 4;
        }

        impl ::glsl::GlslEnum for #name {
            const PREFIX: &'static str = #prefix;
            const VARIANTS: &'static [::glsl::GlslVariant] = &[
                #( #variants, )*
            ];
        }
    }
    .into()
}

fn has_repr_u32(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("repr"))
        .any(|attr| {
            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| {
                found |= meta.path.is_ident("u32");
                Ok(())
            });
            found
        })
}

// GeometryHit -> GEOMETRY_HIT
fn screaming_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev_lower = false;
    for c in ident.chars() {
        if c.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.extend(c.to_uppercase());
    }
    out
}
