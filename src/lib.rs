//! `pgsgo-names` library: computes the identifiers that protoc-gen-go style
//! generated code uses for every entity of a protobuf schema (packages, files,
//! messages, fields, oneofs, enums, enum values, services, methods).
//!
//! The ingestion layer builds a [`schema::SchemaGraph`]; the emission layer asks
//! a [`naming::Resolver`] for names. Nothing here parses descriptors or writes
//! source text.
//==================================================================================
/// Naming constants and plugin parameters.
pub mod conf;
/// Types shared by the schema graph and the resolver (`Name`, `Kind`, ids).
pub mod core;
/// Errors of the fallible surface (parameter parsing).
pub mod error;
/// Camel-case transform, protected-name guard, composer and resolver.
pub mod naming;
/// Arena of schema entities and its builder.
pub mod schema;
//==================================================================================
pub use crate::core::{EntityId, Kind, Name};
pub use crate::naming::Resolver;
