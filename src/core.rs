//! Defines the "data contract" between the schema ingestion layer (which builds
//! the entity graph), the resolver (which names it), and the emission layer
//! (which consumes the produced identifiers).
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

//==================================================================================KIND
/// Closed set of schema entity kinds understood by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Proto package grouping one or more files.
    Package,
    /// Single `.proto` source file.
    File,
    /// Message type, possibly nested in another message.
    Message,
    /// Enum type, possibly nested in a message.
    Enum,
    /// Message field.
    Field,
    /// Oneof group of a message.
    OneOf,
    /// Value of an enum.
    EnumValue,
    /// RPC service.
    Service,
    /// RPC method. Named through the generic rule.
    Method,
}

impl Kind {
    /// Lowercase label used in diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Kind::Package => "package",
            Kind::File => "file",
            Kind::Message => "message",
            Kind::Enum => "enum",
            Kind::Field => "field",
            Kind::OneOf => "oneof",
            Kind::EnumValue => "enum value",
            Kind::Service => "service",
            Kind::Method => "method",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//==================================================================================ENTITY_ID
/// Index of an entity inside its [`SchemaGraph`](crate::schema::SchemaGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    /// Position of the entity in the graph arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//==================================================================================NAME
/// Final identifier produced by the resolver. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Borrow the identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name and return the underlying `String`.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Name {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

impl PartialEq<Name> for &str {
    fn eq(&self, other: &Name) -> bool {
        *self == other.0
    }
}
