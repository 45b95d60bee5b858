//! Traits for statically declared models
//!
//! Models written as Rust structs describe their persisted fields through
//! these traits instead of building a class at runtime.

pub mod schema_model;

pub use schema_model::SchemaModel;
