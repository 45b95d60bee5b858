//! Rust type conversion utilities
//!
//! This module maps Rust type names, as written in struct declarations,
//! to their schema tag equivalents.

use crate::tag::{CollectionKind, OPTIONAL_SUFFIX, ScalarKind, TagParseError, TypeTag};
use thiserror::Error;

/// Primitive types with no schema tag
const UNMAPPED_PRIMITIVES: &[&str] = &["i128", "u128"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnmappedTypeError {
    #[error("primitive `{0}` has no schema tag")]
    Primitive(String),
    #[error(transparent)]
    Tag(#[from] TagParseError),
}

/// Map a Rust type name to a schema tag for model registration
pub fn rust_type_to_type_tag(rust_type: &str) -> String {
    // Normalize type string by removing all whitespace for consistent matching
    let normalized: String = rust_type.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some((head, args)) = split_generic(&normalized) {
        let wrapper = last_segment(head);
        match (wrapper, args.as_slice()) {
            ("Option", [inner]) => {
                let inner = rust_type_to_type_tag(inner);
                // Option<Option<T>> still maps to a single suffix
                return if inner.ends_with(OPTIONAL_SUFFIX) {
                    inner
                } else {
                    format!("{}{}", inner, OPTIONAL_SUFFIX)
                };
            }
            ("Vec" | "VecDeque", [inner]) => {
                return CollectionKind::List.wrap(&rust_type_to_type_tag(inner));
            }
            ("HashMap" | "BTreeMap", [_key, value]) => {
                return CollectionKind::Dictionary.wrap(&rust_type_to_type_tag(value));
            }
            ("HashSet" | "BTreeSet", [inner]) => {
                return CollectionKind::Set.wrap(&rust_type_to_type_tag(inner));
            }
            ("DateTime", _) => return ScalarKind::Date.keyword().to_string(),
            ("Box" | "Arc" | "Rc", [inner]) => return rust_type_to_type_tag(inner),
            _ => {}
        }
    }

    let scalar = match normalized.as_str() {
        "i8" | "i16" | "i32" | "i64" | "isize" => Some(ScalarKind::Int),
        "u8" | "u16" | "u32" | "u64" | "usize" => Some(ScalarKind::Int),
        "f32" => Some(ScalarKind::Float),
        "f64" => Some(ScalarKind::Double),
        "String" | "&str" | "&'staticstr" | "std::string::String" | "char" => {
            Some(ScalarKind::String)
        }
        "bool" => Some(ScalarKind::Bool),
        "serde_json::Value" | "Value" | "type_mapping::Value" => Some(ScalarKind::Mixed),
        "chrono::NaiveDateTime" | "NaiveDateTime" => Some(ScalarKind::Date),
        "Uuid" | "uuid::Uuid" => Some(ScalarKind::Uuid),
        _ => None,
    };

    match scalar {
        Some(kind) => kind.keyword().to_string(),
        // Any other path names a model class
        None => last_segment(&normalized).to_string(),
    }
}

/// Map a Rust type to a schema tag, failing on types the schema cannot hold
///
/// Used at compile time by the derive so that `i128` fields are reported
/// at the field instead of as an unknown model at link time.
pub fn checked_type_tag(rust_type: &str) -> Result<String, UnmappedTypeError> {
    let tag = rust_type_to_type_tag(rust_type);
    let parsed = TypeTag::parse(&tag)?;

    match parsed
        .referenced_models()
        .into_iter()
        .find(|name| UNMAPPED_PRIMITIVES.contains(name))
    {
        Some(primitive) => Err(UnmappedTypeError::Primitive(primitive.to_string())),
        None => Ok(tag),
    }
}

/// Split `Head<A,B<C>>` into `Head` and its top-level arguments
pub fn split_generic(ty: &str) -> Option<(&str, Vec<&str>)> {
    let open = ty.find('<')?;
    let inner = ty.strip_suffix('>')?.get(open + 1..)?;
    let head = &ty[..open];

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = &inner[start..];
    if !last.is_empty() {
        args.push(last);
    }

    Some((head, args))
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
