//! SchemaModel impl generation

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::parsing::{FieldInfo, ModelInfo};

pub fn generate_schema_model_impl(
    input: &DeriveInput,
    model_info: &ModelInfo,
    fields: &[FieldInfo],
) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let model_name = &model_info.name;

    // Explicit tags are already validated; the rest map from the Rust type
    let field_tags: Vec<TokenStream> = fields
        .iter()
        .map(|field| {
            let field_name = field.name.as_str();
            match &field.explicit_tag {
                Some(tag) => quote! {
                    (#field_name, ::std::string::String::from(#tag))
                },
                None => {
                    let rust_type = field.rust_type.as_str();
                    quote! {
                        (#field_name, ::tagschema::type_mapping::rust_type_to_type_tag(#rust_type))
                    }
                }
            }
        })
        .collect();

    quote! {
        impl #impl_generics ::tagschema::model_object::SchemaModel
            for #name #ty_generics #where_clause
        {
            fn model_name() -> &'static str {
                #model_name
            }

            fn field_tags() -> ::std::vec::Vec<(&'static str, ::std::string::String)> {
                ::std::vec![#(#field_tags),*]
            }
        }
    }
}
