//! Procedural macros for generating model schema metadata
//!
//! This crate provides the `#[model]` macro and `SchemaModel` derive, which
//! describe a struct's persisted fields as schema tags.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod model_macro;
mod parsing;
mod schema_generation;

use model_macro::model_attribute;
use parsing::{parse_field_attributes, parse_schema_attributes};
use schema_generation::generate_schema_model_impl;

/// Derive macro for the SchemaModel trait
///
/// Note: It's recommended to use the `#[model]` attribute macro instead,
/// which adds this derive along with the serde derives `to_record` needs.
///
/// Manual usage:
/// ```ignore
/// #[derive(Debug, Clone, serde::Serialize, serde::Deserialize, SchemaModel)]
/// #[schema(name = "Person")]
/// pub struct Person {
///     pub name: String,
///
///     #[field(type = "Dog[]")]
///     pub dogs: Vec<String>,
///
///     #[field(skip)]
///     pub cached_score: u32,
/// }
/// ```
#[proc_macro_derive(SchemaModel, attributes(schema, field))]
pub fn derive_schema_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let model_info = match parse_schema_attributes(&input.attrs, &input.ident) {
        Ok(info) => info,
        Err(e) => return e.to_compile_error().into(),
    };

    let fields = match parse_field_attributes(&input.data) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    generate_schema_model_impl(&input, &model_info, &fields).into()
}

/// Convenience attribute macro that adds all necessary derives for a model
///
/// Usage:
/// ```ignore
/// use model_derive::model;
///
/// #[model]
/// #[schema(name = "Dog")]
/// pub struct Dog {
///     pub name: String,
///     pub age: Option<i64>,
/// }
/// ```
#[proc_macro_attribute]
pub fn model(attr: TokenStream, item: TokenStream) -> TokenStream {
    model_attribute(attr, item)
}
