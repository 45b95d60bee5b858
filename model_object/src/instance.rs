//! Model instances and schema materialization
//!
//! An instance starts out with some fields holding type descriptors.
//! Materialization swaps each descriptor for its default value and records
//! the descriptor's tag in the instance's schema map. Fields that never held
//! a descriptor are ordinary, non-persisted fields and are left alone.

use type_mapping::{Record, Value};

use crate::descriptor::TypeDescriptor;
use crate::schema::SchemaMap;
use crate::type_ref::TypeRef;

/// Contents of one instance field
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// Declared through the type factory, not yet materialized
    Tagged(TypeDescriptor),
    Plain(Value),
}

impl From<TypeDescriptor> for Slot {
    fn from(descriptor: TypeDescriptor) -> Self {
        Slot::Tagged(descriptor)
    }
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Slot::Plain(value)
    }
}

/// An object with ordered own fields and the schema gathered from them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelInstance {
    class_name: Option<String>,
    fields: Vec<(String, Slot)>,
    schema: SchemaMap,
}

impl ModelInstance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instance of a named class; the schema map carries the same name
    pub fn of_class(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            schema: SchemaMap::named(name.clone()),
            class_name: Some(name),
            fields: Vec::new(),
        }
    }

    pub(crate) fn from_materialized(
        class_name: Option<String>,
        materialized: Materialized,
    ) -> Self {
        Self {
            class_name,
            fields: materialized
                .values
                .into_iter()
                .map(|(name, value)| (name, Slot::Plain(value)))
                .collect(),
            schema: materialized.schema,
        }
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Assign a slot, keeping the original position of an existing field
    fn assign(&mut self, name: String, slot: Slot) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = slot,
            None => self.fields.push((name, slot)),
        }
    }

    /// Declare a field with a type descriptor
    pub fn declare(&mut self, name: impl Into<String>, descriptor: TypeDescriptor) -> &mut Self {
        self.assign(name.into(), Slot::Tagged(descriptor));
        self
    }

    /// Set a plain value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.assign(name.into(), Slot::Plain(value.into()));
        self
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, slot)| slot)
    }

    /// Plain value of a field; `None` while the field still holds a descriptor
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.slot(name)? {
            Slot::Plain(value) => Some(value),
            Slot::Tagged(_) => None,
        }
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields
            .iter_mut()
            .find(|(existing, _)| existing == name)
            .and_then(|(_, slot)| match slot {
                Slot::Plain(value) => Some(value),
                Slot::Tagged(_) => None,
            })
    }

    /// Own field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn schema(&self) -> &SchemaMap {
        &self.schema
    }

    pub fn is_materialized(&self) -> bool {
        self.fields
            .iter()
            .all(|(_, slot)| matches!(slot, Slot::Plain(_)))
    }

    /// All plain field values, persisted or not
    pub fn to_record(&self) -> Record {
        self.fields
            .iter()
            .filter_map(|(name, slot)| match slot {
                Slot::Plain(value) => Some((name.clone(), value.clone())),
                Slot::Tagged(_) => None,
            })
            .collect()
    }

    /// Values of the fields described by the schema map only
    pub fn persisted_record(&self) -> Record {
        let mut record = self.to_record();
        record.retain(|name, _| self.schema.contains(name));
        record
    }
}

impl From<&ModelInstance> for TypeRef {
    fn from(instance: &ModelInstance) -> Self {
        TypeRef::Instance(instance.class_name.clone())
    }
}

/// Replace the descriptor in a slot with its default, returning its tag
fn take_tagged(slot: &mut Slot) -> Option<String> {
    if !matches!(slot, Slot::Tagged(_)) {
        return None;
    }
    match std::mem::replace(slot, Slot::Plain(Value::Null)) {
        Slot::Tagged(descriptor) => {
            let tag = descriptor.type_tag();
            *slot = Slot::Plain(descriptor.into_default());
            Some(tag)
        }
        plain => {
            *slot = plain;
            None
        }
    }
}

/// Materialize an instance in place, returning the number of fields swapped
///
/// A second pass finds no descriptors and leaves the schema map unchanged.
pub fn materialize(instance: &mut ModelInstance) -> usize {
    let mut swapped = 0;
    for (name, slot) in instance.fields.iter_mut() {
        if let Some(tag) = take_tagged(slot) {
            instance.schema.insert(name.clone(), tag);
            swapped += 1;
        }
    }

    tracing::debug!(
        "Materialized {} field(s) of {}",
        swapped,
        instance.class_name.as_deref().unwrap_or("<unnamed>")
    );
    swapped
}

/// Plain values and schema produced from a field template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Materialized {
    pub values: Vec<(String, Value)>,
    pub schema: SchemaMap,
}

/// Materialize a field template without mutating anything
pub fn materialize_template<'a, I>(name: Option<&str>, template: I) -> Materialized
where
    I: IntoIterator<Item = &'a (String, Slot)>,
{
    let mut schema = name.map(SchemaMap::named).unwrap_or_default();
    let values: Vec<(String, Value)> = template
        .into_iter()
        .map(|(field, slot)| {
            let value = match slot {
                Slot::Tagged(descriptor) => {
                    schema.insert(field.clone(), descriptor.type_tag());
                    descriptor.default_value().clone()
                }
                Slot::Plain(value) => value.clone(),
            };
            (field.clone(), value)
        })
        .collect();

    Materialized { values, schema }
}
