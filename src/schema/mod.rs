//! In-memory schema graph handed to the resolver by the ingestion layer.
//!
//! Entities are stored in an arena and address each other through
//! [`EntityId`]s: children are owned by the arena, the parent link is a plain
//! index and never owns anything. The only way to populate a graph is the
//! [`SchemaBuilder`], whose typed ids make structurally invalid graphs (an enum
//! value outside an enum, a field outside a message, ...) unrepresentable.
//!
//! ```
//! use pgsgo_names::schema::{FileInfo, SchemaBuilder};
//!
//! let mut builder = SchemaBuilder::new();
//! let package = builder.package("acme.chat.v1");
//! let file = builder.file(package, FileInfo::new("acme/chat.proto"));
//! let message = builder.message(file, "ChatMessage");
//! let _body = builder.field(message, "body");
//! let graph = builder.build();
//!
//! assert_eq!(graph.len(), 4);
//! assert_eq!(graph.get(message.into()).name(), "ChatMessage");
//! ```
use crate::core::{EntityId, Kind};

//==================================================================================TYPED_IDS
macro_rules! typed_id {
    ($($(#[$meta:meta])* $name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $name(pub(crate) EntityId);

            impl $name {
                /// Kind of every entity addressed by this id type.
                pub const KIND: Kind = Kind::$kind;

                /// Untyped id of the entity.
                #[inline]
                pub const fn id(self) -> EntityId {
                    self.0
                }
            }

            impl From<$name> for EntityId {
                fn from(value: $name) -> Self {
                    value.0
                }
            }
        )*
    };
}

typed_id! {
    /// Id of a [`Kind::Package`] entity.
    PackageId => Package,
    /// Id of a [`Kind::File`] entity.
    FileId => File,
    /// Id of a [`Kind::Message`] entity.
    MessageId => Message,
    /// Id of a [`Kind::Enum`] entity.
    EnumId => Enum,
    /// Id of a [`Kind::Field`] entity.
    FieldId => Field,
    /// Id of a [`Kind::OneOf`] entity.
    OneOfId => OneOf,
    /// Id of a [`Kind::EnumValue`] entity.
    EnumValueId => EnumValue,
    /// Id of a [`Kind::Service`] entity.
    ServiceId => Service,
    /// Id of a [`Kind::Method`] entity.
    MethodId => Method,
}

/// Container a message or an enum can be declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Top-level declaration.
    File(FileId),
    /// Nested declaration.
    Message(MessageId),
}

impl From<FileId> for Scope {
    fn from(value: FileId) -> Self {
        Scope::File(value)
    }
}

impl From<MessageId> for Scope {
    fn from(value: MessageId) -> Self {
        Scope::Message(value)
    }
}

impl From<Scope> for EntityId {
    fn from(value: Scope) -> Self {
        match value {
            Scope::File(id) => id.into(),
            Scope::Message(id) => id.into(),
        }
    }
}

//==================================================================================ENTITY
/// File metadata required to derive Go package names and import paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Path of the file as given to protoc (`foo/bar.proto`).
    pub input_path: String,
    /// Value of the `go_package` file option, if set.
    pub go_package: Option<String>,
    /// Whether code is generated for this file in the current run.
    pub build_target: bool,
}

impl FileInfo {
    /// File metadata for a build target without a `go_package` option.
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            go_package: None,
            build_target: true,
        }
    }

    /// Sets the `go_package` option.
    pub fn with_go_package(mut self, go_package: impl Into<String>) -> Self {
        self.go_package = Some(go_package.into());
        self
    }

    /// Marks the file as a dependency only (not generated in this run).
    pub fn dependency(mut self) -> Self {
        self.build_target = false;
        self
    }
}

/// Kind-specific payload of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityData {
    Package,
    File(FileInfo),
    Message,
    Enum,
    /// `oneof` is set when the field belongs to a oneof group.
    Field { oneof: Option<OneOfId> },
    OneOf,
    EnumValue { number: i32 },
    Service,
    Method,
}

impl EntityData {
    /// Kind tag for this payload.
    pub const fn kind(&self) -> Kind {
        match self {
            EntityData::Package => Kind::Package,
            EntityData::File(_) => Kind::File,
            EntityData::Message => Kind::Message,
            EntityData::Enum => Kind::Enum,
            EntityData::Field { .. } => Kind::Field,
            EntityData::OneOf => Kind::OneOf,
            EntityData::EnumValue { .. } => Kind::EnumValue,
            EntityData::Service => Kind::Service,
            EntityData::Method => Kind::Method,
        }
    }
}

/// Named element of the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    data: EntityData,
}

impl Entity {
    /// Name as declared in the schema source. For files this is the input path,
    /// for packages the dotted proto package (possibly empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Naming parent, `None` for packages.
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    /// Owned children, in declaration order.
    pub fn children(&self) -> &[EntityId] {
        &self.children
    }

    pub fn data(&self) -> &EntityData {
        &self.data
    }

    pub fn kind(&self) -> Kind {
        self.data.kind()
    }
}

//==================================================================================GRAPH
/// Read-only arena of schema entities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaGraph {
    entities: Vec<Entity>,
}

impl SchemaGraph {
    /// Number of entities in the graph.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entity lookup that tolerates ids from another graph.
    pub fn try_get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Entity lookup.
    ///
    /// # Panics
    /// When `id` was not produced by the builder of this graph.
    pub fn get(&self, id: EntityId) -> &Entity {
        match self.try_get(id) {
            Some(entity) => entity,
            None => panic!(
                "entity {id} does not belong to this schema graph ({} entities)",
                self.entities.len()
            ),
        }
    }

    /// Every entity with its id, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, entity)| (EntityId(index as u32), entity))
    }

    /// Ids of every entity of the given kind.
    pub fn ids_of_kind(&self, kind: Kind) -> impl Iterator<Item = EntityId> + '_ {
        self.iter()
            .filter(move |(_, entity)| entity.kind() == kind)
            .map(|(id, _)| id)
    }

    /// Files of a package, in declaration order.
    pub fn package_files(&self, package: PackageId) -> impl Iterator<Item = FileId> + '_ {
        self.get(package.id()).children.iter().map(|id| FileId(*id))
    }

    /// Package owning a file.
    pub fn file_package(&self, file: FileId) -> PackageId {
        PackageId(self.expect_parent(file.id()))
    }

    /// Metadata of a file.
    pub fn file_info(&self, file: FileId) -> &FileInfo {
        let entity = self.get(file.id());
        match &entity.data {
            EntityData::File(info) => info,
            other => unreachable!("{file:?} addresses a {} entity", other.kind()),
        }
    }

    /// File an entity is declared in, walking up the naming parents.
    /// `None` for packages.
    pub fn file_of(&self, id: EntityId) -> Option<FileId> {
        let mut current = Some(id);
        while let Some(cursor) = current {
            let entity = self.get(cursor);
            if entity.kind() == Kind::File {
                return Some(FileId(cursor));
            }
            current = entity.parent;
        }
        None
    }

    /// Message owning a field.
    pub fn field_message(&self, field: FieldId) -> MessageId {
        MessageId(self.expect_parent(field.id()))
    }

    /// Oneof group a field belongs to, if any.
    pub fn field_oneof(&self, field: FieldId) -> Option<OneOfId> {
        match self.get(field.id()).data {
            EntityData::Field { oneof } => oneof,
            ref other => unreachable!("{field:?} addresses a {} entity", other.kind()),
        }
    }

    /// Fields declared in a oneof group.
    pub fn oneof_fields(&self, oneof: OneOfId) -> impl Iterator<Item = FieldId> + '_ {
        let message = self.expect_parent(oneof.id());
        self.get(message)
            .children
            .iter()
            .filter(move |id| {
                matches!(self.get(**id).data, EntityData::Field { oneof: Some(o) } if o == oneof)
            })
            .map(|id| FieldId(*id))
    }

    /// Enum owning a value.
    pub fn value_enum(&self, value: EnumValueId) -> EnumId {
        EnumId(self.expect_parent(value.id()))
    }

    /// Service owning a method.
    pub fn method_service(&self, method: MethodId) -> ServiceId {
        ServiceId(self.expect_parent(method.id()))
    }

    fn expect_parent(&self, id: EntityId) -> EntityId {
        let entity = self.get(id);
        match entity.parent {
            Some(parent) => parent,
            None => unreachable!("{} {id} has no parent", entity.kind()),
        }
    }
}

//==================================================================================BUILDER
/// Populates a [`SchemaGraph`]. Each method returns the typed id of the new
/// entity, which is the only way to declare children under it.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    graph: SchemaGraph,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a proto package (`""` for files without a package statement).
    pub fn package(&mut self, name: impl Into<String>) -> PackageId {
        PackageId(self.push(name.into(), None, EntityData::Package))
    }

    /// Declares a file in a package. The file name is its input path.
    pub fn file(&mut self, package: PackageId, info: FileInfo) -> FileId {
        let name = info.input_path.clone();
        FileId(self.push(name, Some(package.id()), EntityData::File(info)))
    }

    /// Declares a message at file level or nested in another message.
    pub fn message(&mut self, scope: impl Into<Scope>, name: impl Into<String>) -> MessageId {
        let parent = EntityId::from(scope.into());
        MessageId(self.push(name.into(), Some(parent), EntityData::Message))
    }

    /// Declares an enum at file level or nested in a message.
    pub fn enumeration(&mut self, scope: impl Into<Scope>, name: impl Into<String>) -> EnumId {
        let parent = EntityId::from(scope.into());
        EnumId(self.push(name.into(), Some(parent), EntityData::Enum))
    }

    /// Declares a plain field of a message.
    pub fn field(&mut self, message: MessageId, name: impl Into<String>) -> FieldId {
        FieldId(self.push(
            name.into(),
            Some(message.id()),
            EntityData::Field { oneof: None },
        ))
    }

    /// Declares a oneof group of a message.
    pub fn oneof(&mut self, message: MessageId, name: impl Into<String>) -> OneOfId {
        OneOfId(self.push(name.into(), Some(message.id()), EntityData::OneOf))
    }

    /// Declares a field inside a oneof group. The field is owned by the
    /// message of the group.
    pub fn oneof_field(&mut self, oneof: OneOfId, name: impl Into<String>) -> FieldId {
        let message = self.graph.expect_parent(oneof.id());
        FieldId(self.push(
            name.into(),
            Some(message),
            EntityData::Field { oneof: Some(oneof) },
        ))
    }

    /// Declares a value of an enum.
    pub fn enum_value(&mut self, owner: EnumId, name: impl Into<String>, number: i32) -> EnumValueId {
        EnumValueId(self.push(
            name.into(),
            Some(owner.id()),
            EntityData::EnumValue { number },
        ))
    }

    /// Declares a service in a file.
    pub fn service(&mut self, file: FileId, name: impl Into<String>) -> ServiceId {
        ServiceId(self.push(name.into(), Some(file.id()), EntityData::Service))
    }

    /// Declares an RPC method of a service.
    pub fn method(&mut self, service: ServiceId, name: impl Into<String>) -> MethodId {
        MethodId(self.push(name.into(), Some(service.id()), EntityData::Method))
    }

    /// Freezes the graph.
    pub fn build(self) -> SchemaGraph {
        self.graph
    }

    fn push(&mut self, name: String, parent: Option<EntityId>, data: EntityData) -> EntityId {
        let id = EntityId(self.graph.entities.len() as u32);
        self.graph.entities.push(Entity {
            name,
            parent,
            children: Vec::new(),
            data,
        });
        if let Some(parent) = parent {
            self.graph.entities[parent.index()].children.push(id);
        }
        id
    }
}
