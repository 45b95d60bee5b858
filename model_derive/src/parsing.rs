//! Parsing utilities for schema and field attributes
//!
//! This module handles the parsing of `#[schema]` and `#[field]` attributes
//! and validation of model names, field names and explicit tags.

use model_object::validation::{ValidatedFieldName, ValidatedModelName};
use quote::quote;
use syn::{
    ext::IdentExt, parse::Parse, parse::ParseStream, spanned::Spanned, Attribute, Data, Error,
    Fields, Ident, LitStr, Meta, Result, Token,
};

/// Validate model name and return syn::Error for better proc macro error handling
pub fn validate_model_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    ValidatedModelName::new(name)
        .map(|_| ())
        .map_err(|e| Error::new(span, format!("Invalid model name '{}': {}", name, e)))
}

/// Validate field name and return syn::Error for better proc macro error handling
pub fn validate_field_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    ValidatedFieldName::new(name)
        .map(|_| ())
        .map_err(|e| Error::new(span, format!("Invalid field name '{}': {}", name, e)))
}

/// Validate an explicit `#[field(type = "...")]` tag
pub fn validate_type_tag_syn(tag: &str, span: proc_macro2::Span) -> Result<()> {
    type_mapping::TypeTag::parse(tag)
        .map(|_| ())
        .map_err(|e| Error::new(span, format!("Invalid type tag '{}': {}", tag, e)))
}

/// Check that a field type without an explicit tag maps to a usable one
pub fn validate_rust_type_syn(rust_type: &str, span: proc_macro2::Span) -> Result<()> {
    type_mapping::checked_type_tag(rust_type).map(|_| ()).map_err(|e| {
        Error::new(
            span,
            format!(
                "Unsupported field type `{}`: {}; declare a tag with #[field(type = \"...\")]",
                rust_type, e
            ),
        )
    })
}

/// Options inside `#[field(...)]`
#[derive(Debug, Default)]
struct FieldOptions {
    skip: bool,
    tag: Option<LitStr>,
}

impl Parse for FieldOptions {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut options = FieldOptions::default();

        while !input.is_empty() {
            if input.peek(Token![type]) {
                let _: Token![type] = input.parse()?;
                let _: Token![=] = input.parse()?;
                options.tag = Some(input.parse()?);
            } else {
                let option: Ident = input.parse()?;
                match option.to_string().as_str() {
                    "skip" => options.skip = true,
                    other => {
                        return Err(Error::new(
                            option.span(),
                            format!(
                                "unknown field option '{}': expected `skip` or `type = \"...\"`",
                                other
                            ),
                        ))
                    }
                }
            }

            if input.peek(Token![,]) {
                let _: Token![,] = input.parse()?;
            }
        }

        Ok(options)
    }
}

#[derive(Debug)]
pub struct ModelInfo {
    pub name: String,
}

/// One persisted field
#[derive(Debug)]
pub struct FieldInfo {
    pub name: String,
    /// Normalized Rust type text, mapped to a tag at runtime
    pub rust_type: String,
    pub explicit_tag: Option<String>,
}

pub fn parse_schema_attributes(attrs: &[Attribute], ident: &Ident) -> Result<ModelInfo> {
    let mut model_name = None;

    for attr in attrs {
        if attr.path().is_ident("schema") {
            if let Meta::List(meta_list) = &attr.meta {
                let mut tokens = meta_list.tokens.clone().into_iter().peekable();

                while let Some(token) = tokens.next() {
                    if let proc_macro2::TokenTree::Ident(key) = token {
                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == '=' {
                                tokens.next(); // consume '='

                                if let Some(proc_macro2::TokenTree::Literal(lit)) = tokens.next() {
                                    let value = lit.to_string().trim_matches('"').to_string();
                                    if key == "name" {
                                        model_name = Some(value);
                                    }
                                }
                            }
                        }

                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == ',' {
                                tokens.next(); // consume ','
                            }
                        }
                    }
                }
            }
        }
    }

    let name = model_name.unwrap_or_else(|| ident.unraw().to_string());
    validate_model_name_syn(&name, ident.span())?;

    Ok(ModelInfo { name })
}

pub fn parse_field_attributes(data: &Data) -> Result<Vec<FieldInfo>> {
    if let Data::Struct(data_struct) = data {
        if let Fields::Named(fields_named) = &data_struct.fields {
            let mut fields = Vec::new();

            for field in &fields_named.named {
                let field_ident = field
                    .ident
                    .as_ref()
                    .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;

                let options = parse_field_options(&field.attrs)?;
                if options.skip {
                    continue;
                }

                let field_name = field_ident.unraw().to_string();
                validate_field_name_syn(&field_name, field_ident.span())?;

                let ty = &field.ty;
                let rust_type = quote!(#ty).to_string().replace(' ', "");

                let explicit_tag = match &options.tag {
                    Some(lit) => {
                        let tag = lit.value();
                        validate_type_tag_syn(&tag, lit.span())?;
                        Some(tag)
                    }
                    None => {
                        validate_rust_type_syn(&rust_type, ty.span())?;
                        None
                    }
                };

                fields.push(FieldInfo {
                    name: field_name,
                    rust_type,
                    explicit_tag,
                });
            }

            return Ok(fields);
        }
    }

    Err(Error::new(
        proc_macro2::Span::call_site(),
        "SchemaModel can only be derived for structs with named fields",
    ))
}

fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("field") {
            continue;
        }
        let parsed = match &attr.meta {
            Meta::List(meta_list) => meta_list.parse_args::<FieldOptions>()?,
            _ => {
                return Err(Error::new_spanned(
                    attr,
                    "expected #[field(skip)] or #[field(type = \"...\")]",
                ))
            }
        };
        options.skip |= parsed.skip;
        if parsed.tag.is_some() {
            options.tag = parsed.tag;
        }
    }

    Ok(options)
}
